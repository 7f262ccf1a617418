use parking_lot::RwLock;
use std::sync::Arc;

use crate::error::Result;
use crate::ranker::Document;
use crate::server::{MatchedDocument, SearchServer};
use crate::store::DocumentStatus;
use crate::DocId;

/// Cloneable thread-safe handle to a [`SearchServer`].
///
/// Ingestion and stop-word configuration take the write lock; queries share the
/// read lock, so they run concurrently with each other but never with a write.
#[derive(Debug, Clone, Default)]
pub struct SharedSearchServer {
    inner: Arc<RwLock<SearchServer>>,
}

impl SharedSearchServer {
    pub fn new(server: SearchServer) -> Self {
        Self { inner: Arc::new(RwLock::new(server)) }
    }

    pub fn configure_stop_words(&self, text: &str) {
        self.inner.write().configure_stop_words(text);
    }

    pub fn add_document(&self, id: DocId, text: &str, status: DocumentStatus, ratings: &[i32]) -> Result<()> {
        self.inner.write().add_document(id, text, status, ratings)
    }

    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<Document>> {
        self.inner.read().find_top_documents(raw_query)
    }

    pub fn find_top_documents_with_status(&self, raw_query: &str, status: DocumentStatus) -> Result<Vec<Document>> {
        self.inner.read().find_top_documents_with_status(raw_query, status)
    }

    pub fn match_document(&self, raw_query: &str, id: DocId) -> Result<MatchedDocument> {
        self.inner.read().match_document(raw_query, id)
    }

    pub fn document_count(&self) -> usize {
        self.inner.read().document_count()
    }

    /// Run `f` with shared access to the underlying server.
    pub fn read<R>(&self, f: impl FnOnce(&SearchServer) -> R) -> R {
        f(&self.inner.read())
    }
}

impl From<SearchServer> for SharedSearchServer {
    fn from(server: SearchServer) -> Self { Self::new(server) }
}
