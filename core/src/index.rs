use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

pub type DocId = u32;

/// Term frequencies of one term, keyed by document id in ascending order.
pub type Postings = BTreeMap<DocId, f64>;

#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct InvertedIndex {
    /// term -> (doc_id -> term frequency)
    pub postings: HashMap<String, Postings>,
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    /// Record the term frequencies of a freshly added document.
    ///
    /// Each frequency is `occurrences / terms.len()`. A document without terms adds
    /// nothing, so there is never a division by zero. Returns the number of distinct
    /// terms indexed.
    pub fn insert_document(&mut self, doc_id: DocId, terms: &[&str]) -> usize {
        if terms.is_empty() { return 0; }
        let mut counts: HashMap<&str, u32> = HashMap::new();
        for term in terms {
            *counts.entry(*term).or_insert(0) += 1;
        }
        let total = terms.len() as f64;
        let distinct = counts.len();
        for (term, count) in counts {
            self.postings
                .entry(term.to_string())
                .or_default()
                .insert(doc_id, count as f64 / total);
        }
        distinct
    }

    /// Postings for `term`; `None` when the term was never indexed.
    pub fn postings(&self, term: &str) -> Option<&Postings> {
        self.postings.get(term)
    }

    /// Number of documents containing `term`.
    pub fn document_frequency(&self, term: &str) -> usize {
        self.postings.get(term).map_or(0, |p| p.len())
    }

    pub fn contains(&self, term: &str, doc_id: DocId) -> bool {
        self.postings.get(term).is_some_and(|p| p.contains_key(&doc_id))
    }

    /// All (term, frequency) pairs of one document. Linear in the vocabulary size.
    pub fn term_frequencies(&self, doc_id: DocId) -> BTreeMap<&str, f64> {
        self.postings
            .iter()
            .filter_map(|(term, p)| p.get(&doc_id).map(|tf| (term.as_str(), *tf)))
            .collect()
    }

    pub fn term_count(&self) -> usize { self.postings.len() }
}
