//! Error types for docsearch-core

use thiserror::Error;

use crate::DocId;

/// Result type alias using [`SearchError`]
pub type Result<T> = std::result::Result<T, SearchError>;

/// Precondition violations reported by the search server. None of them are transient.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A document with this id was already added
    #[error("duplicate document id: {0}")]
    DuplicateDocumentId(DocId),

    /// No document with this id was ever added
    #[error("unknown document id: {0}")]
    UnknownDocumentId(DocId),

    /// A query word that cannot be interpreted, e.g. a lone `-`
    #[error("malformed query word: {0:?}")]
    MalformedQuery(String),
}

impl SearchError {
    pub fn malformed_query(word: impl Into<String>) -> Self {
        SearchError::MalformedQuery(word.into())
    }
}
