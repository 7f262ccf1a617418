use std::collections::BTreeSet;

use crate::error::{Result, SearchError};
use crate::tokenizer::StopWords;

/// Marker that turns a query word into an excluding (minus) word.
pub const MINUS_MARKER: char = '-';

/// Parsed query: distinct required (plus) and excluding (minus) words.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Query {
    pub plus_words: BTreeSet<String>,
    pub minus_words: BTreeSet<String>,
}

impl Query {
    pub fn is_empty(&self) -> bool {
        self.plus_words.is_empty() && self.minus_words.is_empty()
    }
}

/// Parse a raw query.
///
/// Stop words are removed from the raw words first. A word starting with `-` is a
/// minus word; it is kept only when the part after the marker is not a stop word.
/// A lone `-` is rejected with [`SearchError::MalformedQuery`].
///
/// The raw-word pass runs before the marker is stripped, so a minus word is also
/// dropped when the whole word, marker included, is a stop word (`-x` in the stop
/// set drops `-x` even though `x` is not a stop word). This keeps the historic
/// word-for-word behavior at the cost of one extra set lookup per query word; the
/// check on the stripped word is the one that matters for ordinary stop words.
pub fn parse_query(raw: &str, stop_words: &StopWords) -> Result<Query> {
    let mut query = Query::default();
    for word in stop_words.split_no_stop(raw) {
        match word.strip_prefix(MINUS_MARKER) {
            Some("") => return Err(SearchError::malformed_query(word)),
            Some(rest) => {
                if !stop_words.is_stop(rest) {
                    query.minus_words.insert(rest.to_string());
                }
            }
            None => {
                query.plus_words.insert(word.to_string());
            }
        }
    }
    tracing::trace!(plus = query.plus_words.len(), minus = query.minus_words.len(), "parsed query");
    Ok(query)
}
