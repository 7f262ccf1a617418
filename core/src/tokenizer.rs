use std::collections::HashSet;

/// Split text into words on ASCII spaces. Runs of spaces never produce empty words.
///
/// Tabs, newlines and other whitespace are part of a word; text is treated as raw
/// codepoints with no locale or Unicode segmentation applied.
pub fn split_into_words(text: &str) -> Vec<&str> {
    text.split(' ').filter(|w| !w.is_empty()).collect()
}

/// Set of words that are ignored both when indexing and when querying.
#[derive(Debug, Default, Clone)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn new() -> Self { Self::default() }

    /// Add every word of `text` to the set. Configuration is additive: an empty
    /// `text` leaves previously configured words in place.
    pub fn configure(&mut self, text: &str) {
        if text.is_empty() { return; }
        for word in split_into_words(text) {
            self.words.insert(word.to_string());
        }
    }

    pub fn is_stop(&self, word: &str) -> bool {
        if self.words.is_empty() { return false; }
        self.words.contains(word)
    }

    /// Drop stop words, keeping the order of the remaining words.
    pub fn filter<'a, I>(&self, words: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        words.into_iter().filter(|w| !self.is_stop(w)).collect()
    }

    /// Tokenize `text` and drop stop words in one pass.
    pub fn split_no_stop<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.filter(split_into_words(text))
    }

    pub fn len(&self) -> usize { self.words.len() }

    pub fn is_empty(&self) -> bool { self.words.is_empty() }
}
