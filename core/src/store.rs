use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SearchError};
use crate::DocId;

/// Lifecycle tag of a document. Only used as a query-time filter.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    #[default]
    Actual,
    Irrelevant,
    Banned,
    Removed,
}

impl DocumentStatus {
    /// Numeric code in declaration order (Actual = 0).
    pub fn code(self) -> u8 {
        match self {
            DocumentStatus::Actual => 0,
            DocumentStatus::Irrelevant => 1,
            DocumentStatus::Banned => 2,
            DocumentStatus::Removed => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DocumentStatus::Actual => "actual",
            DocumentStatus::Irrelevant => "irrelevant",
            DocumentStatus::Banned => "banned",
            DocumentStatus::Removed => "removed",
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "actual" | "0" => Ok(DocumentStatus::Actual),
            "irrelevant" | "1" => Ok(DocumentStatus::Irrelevant),
            "banned" | "2" => Ok(DocumentStatus::Banned),
            "removed" | "3" => Ok(DocumentStatus::Removed),
            other => Err(format!("unknown document status: {other}")),
        }
    }
}

/// Metadata kept for every added document. Never modified after insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub id: DocId,
    pub rating: i32,
    pub status: DocumentStatus,
}

/// Truncating integer mean; 0 for no ratings.
pub fn compute_average_rating(ratings: &[i32]) -> i32 {
    if ratings.is_empty() { return 0; }
    let sum: i64 = ratings.iter().map(|&r| r as i64).sum();
    (sum / ratings.len() as i64) as i32
}

/// Append-only document records. Public ids are mapped to storage slots, so ids
/// may be sparse or start anywhere.
#[derive(Debug, Default, Clone)]
pub struct DocumentStore {
    records: Vec<DocumentRecord>,
    slots: HashMap<DocId, usize>,
}

impl DocumentStore {
    pub fn new() -> Self { Self::default() }

    pub fn insert(&mut self, record: DocumentRecord) -> Result<()> {
        if self.contains(record.id) {
            return Err(SearchError::DuplicateDocumentId(record.id));
        }
        self.slots.insert(record.id, self.records.len());
        self.records.push(record);
        Ok(())
    }

    pub fn contains(&self, id: DocId) -> bool { self.slots.contains_key(&id) }

    pub fn get(&self, id: DocId) -> Option<&DocumentRecord> {
        self.slots.get(&id).map(|&slot| &self.records[slot])
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &DocumentRecord> + '_ {
        self.records.iter()
    }

    pub fn len(&self) -> usize { self.records.len() }

    pub fn is_empty(&self) -> bool { self.records.is_empty() }
}
