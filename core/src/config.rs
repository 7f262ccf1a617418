//! Tunables for ranking.

use serde::{Deserialize, Serialize};

/// Number of results returned by a top-documents query unless configured otherwise.
pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Upper bound on the length of a ranked result list
    pub max_result_document_count: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_result_document_count: MAX_RESULT_DOCUMENT_COUNT }
    }
}

impl SearchConfig {
    pub fn with_limit(limit: usize) -> Self {
        Self { max_result_document_count: limit }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: SearchConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.max_result_document_count, 5);
        let cfg: SearchConfig = serde_json::from_str(r#"{"max_result_document_count": 2}"#).unwrap();
        assert_eq!(cfg, SearchConfig::with_limit(2));
    }
}
