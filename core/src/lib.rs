//! In-memory document search ranked by TF-IDF, with stop words, minus words and
//! per-document status and rating.

pub mod config;
pub mod error;
pub mod index;
pub mod query;
pub mod ranker;
pub mod server;
pub mod shared;
pub mod store;
pub mod tokenizer;

pub use config::SearchConfig;
pub use error::{Result, SearchError};
pub use index::{DocId, InvertedIndex};
pub use query::{parse_query, Query};
pub use ranker::Document;
pub use server::{MatchedDocument, SearchServer};
pub use shared::SharedSearchServer;
pub use store::{DocumentRecord, DocumentStatus, DocumentStore};
