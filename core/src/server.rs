use serde::Serialize;

use crate::config::SearchConfig;
use crate::error::{Result, SearchError};
use crate::index::InvertedIndex;
use crate::query::{parse_query, Query};
use crate::ranker::{find_all_documents, top_documents, Document};
use crate::store::{compute_average_rating, DocumentRecord, DocumentStatus, DocumentStore};
use crate::tokenizer::StopWords;
use crate::DocId;

/// Words of a query found in one document, plus that document's status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchedDocument {
    /// Sorted ascending; empty when any minus word is present in the document
    pub words: Vec<String>,
    pub status: DocumentStatus,
}

/// In-memory TF-IDF search over an append-only corpus.
///
/// Mutation takes `&mut self`, so a single owner serializes ingestion and queries.
/// See [`crate::SharedSearchServer`] for a handle that can be shared across threads.
#[derive(Debug, Default, Clone)]
pub struct SearchServer {
    config: SearchConfig,
    stop_words: StopWords,
    index: InvertedIndex,
    documents: DocumentStore,
}

impl SearchServer {
    pub fn new() -> Self { Self::default() }

    pub fn with_config(config: SearchConfig) -> Self {
        Self { config, ..Self::default() }
    }

    /// Build a server with `stop_words` already configured.
    pub fn with_stop_words(stop_words: &str) -> Self {
        let mut server = Self::new();
        server.configure_stop_words(stop_words);
        server
    }

    pub fn config(&self) -> &SearchConfig { &self.config }

    /// Add stop words. Documents indexed earlier keep the terms they were indexed with.
    pub fn configure_stop_words(&mut self, text: &str) {
        self.stop_words.configure(text);
        tracing::debug!(stop_words = self.stop_words.len(), "configured stop words");
    }

    pub fn add_document(&mut self, id: DocId, text: &str, status: DocumentStatus, ratings: &[i32]) -> Result<()> {
        let rating = compute_average_rating(ratings);
        self.documents.insert(DocumentRecord { id, rating, status })?;
        let terms = self.stop_words.split_no_stop(text);
        let distinct = self.index.insert_document(id, &terms);
        tracing::debug!(doc_id = id, terms = terms.len(), distinct, rating, %status, "indexed document");
        Ok(())
    }

    /// Parse `raw_query` against the configured stop words.
    pub fn parse_query(&self, raw_query: &str) -> Result<Query> {
        parse_query(raw_query, &self.stop_words)
    }

    /// Top documents with status [`DocumentStatus::Actual`].
    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<Document>> {
        self.find_top_documents_with_status(raw_query, DocumentStatus::Actual)
    }

    pub fn find_top_documents_with_status(&self, raw_query: &str, status: DocumentStatus) -> Result<Vec<Document>> {
        let query = self.parse_query(raw_query)?;
        let matched = find_all_documents(&query, &self.index, &self.documents, status);
        let total_hits = matched.len();
        let top = top_documents(matched, self.config.max_result_document_count);
        tracing::trace!(total_hits, returned = top.len(), %status, "ranked documents");
        Ok(top)
    }

    pub fn match_document(&self, raw_query: &str, id: DocId) -> Result<MatchedDocument> {
        let record = self.documents.get(id).ok_or(SearchError::UnknownDocumentId(id))?;
        let query = self.parse_query(raw_query)?;

        let excluded = query.minus_words.iter().any(|w| self.index.contains(w, id));
        let words = if excluded {
            Vec::new()
        } else {
            // plus_words is a BTreeSet, so the filtered words are already sorted
            query
                .plus_words
                .into_iter()
                .filter(|w| self.index.contains(w, id))
                .collect()
        };
        Ok(MatchedDocument { words, status: record.status })
    }

    pub fn document_count(&self) -> usize { self.documents.len() }

    /// Ids in the order documents were added.
    pub fn document_ids(&self) -> impl Iterator<Item = DocId> + '_ {
        self.documents.iter().map(|r| r.id)
    }

    pub fn document(&self, id: DocId) -> Option<&DocumentRecord> {
        self.documents.get(id)
    }

    pub fn index(&self) -> &InvertedIndex { &self.index }
}
