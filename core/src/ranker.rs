use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::index::InvertedIndex;
use crate::query::Query;
use crate::store::{DocumentStatus, DocumentStore};
use crate::DocId;

/// One ranked hit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocId,
    pub relevance: f64,
    pub rating: i32,
}

/// `ln(N / df)`; zero when the term occurs in every document.
pub fn inverse_document_frequency(document_count: usize, document_frequency: usize) -> f64 {
    (document_count as f64 / document_frequency as f64).ln()
}

/// Score every document matching the plus words by summed TF-IDF, drop documents
/// containing any minus word, keep those with `status`.
///
/// Scores accumulate in ascending id order and the result is returned in that order.
pub fn find_all_documents(
    query: &Query,
    index: &InvertedIndex,
    store: &DocumentStore,
    status: DocumentStatus,
) -> Vec<Document> {
    let mut relevance: BTreeMap<DocId, f64> = BTreeMap::new();
    let document_count = store.len();

    for word in &query.plus_words {
        let Some(postings) = index.postings(word) else { continue };
        let idf = inverse_document_frequency(document_count, postings.len());
        for (&doc_id, &tf) in postings {
            *relevance.entry(doc_id).or_insert(0.0) += tf * idf;
        }
    }

    for word in &query.minus_words {
        let Some(postings) = index.postings(word) else { continue };
        for doc_id in postings.keys() {
            relevance.remove(doc_id);
        }
    }

    relevance
        .into_iter()
        .filter_map(|(id, relevance)| {
            let record = store.get(id)?;
            (record.status == status).then_some(Document { id, relevance, rating: record.rating })
        })
        .collect()
}

/// Order by descending relevance and keep at most `limit` hits.
///
/// The sort is stable and the input comes in ascending id order, so equal
/// relevance ties resolve to the lower id first.
pub fn top_documents(mut documents: Vec<Document>, limit: usize) -> Vec<Document> {
    documents.sort_by(|a, b| b.relevance.total_cmp(&a.relevance));
    documents.truncate(limit);
    documents
}
