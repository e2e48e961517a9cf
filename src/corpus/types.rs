// Corpus types.
//
// A RawCorpus is what the loader hands back: document id -> raw text.
// Cleaning turns it into a Corpus: document id -> token sequence. Both keep
// the order documents were inserted in, which is the order the loader
// visited the files.

use indexmap::IndexMap;

/// Raw document text keyed by document id (file stem).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawCorpus {
    documents: IndexMap<String, String>,
}

impl RawCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document. A repeated id replaces the earlier text in place.
    pub fn insert(&mut self, id: impl Into<String>, text: impl Into<String>) {
        self.documents.insert(id.into(), text.into());
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.documents.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.documents.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.documents
            .iter()
            .map(|(id, text)| (id.as_str(), text.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawCorpus {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut corpus = Self::new();
        for (id, text) in iter {
            corpus.insert(id, text);
        }
        corpus
    }
}

/// Cleaned, tokenized documents keyed by document id.
///
/// Every token is a non-empty run of ASCII letters. Token order follows the
/// source text. Built once by `text::cleaner::clean_corpus` and read-only
/// afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    documents: IndexMap<String, Vec<String>>,
}

impl Corpus {
    pub(crate) fn from_documents(documents: IndexMap<String, Vec<String>>) -> Self {
        Self { documents }
    }

    pub fn tokens(&self, id: &str) -> Option<&[String]> {
        self.documents.get(id).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.documents.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.documents
            .iter()
            .map(|(id, tokens)| (id.as_str(), tokens.as_slice()))
    }

    /// Total number of tokens across all documents.
    pub fn token_count(&self) -> usize {
        self.documents.values().map(Vec::len).sum()
    }

    /// The whole corpus as one lowercase token stream, document by document.
    ///
    /// Cleaning does not change case, so this is where "The" and "the" become
    /// the same word for frequency counting.
    pub fn flatten_lowercase(&self) -> Vec<String> {
        self.documents
            .values()
            .flat_map(|tokens| tokens.iter().map(|t| t.to_lowercase()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus_of(docs: Vec<(&str, Vec<&str>)>) -> Corpus {
        Corpus::from_documents(
            docs.into_iter()
                .map(|(id, toks)| (id.to_string(), toks.into_iter().map(String::from).collect()))
                .collect(),
        )
    }

    #[test]
    fn flatten_lowercase_keeps_document_then_token_order() {
        let corpus = corpus_of(vec![("a", vec!["The", "Cat"]), ("b", vec!["DOG"])]);
        assert_eq!(corpus.flatten_lowercase(), vec!["the", "cat", "dog"]);
    }

    #[test]
    fn flatten_lowercase_of_empty_corpus_is_empty() {
        assert!(Corpus::default().flatten_lowercase().is_empty());
    }

    #[test]
    fn raw_corpus_keeps_insertion_order() {
        let raw: RawCorpus = [("2", "b"), ("10", "c"), ("1", "a")].into_iter().collect();
        assert_eq!(raw.ids().collect::<Vec<_>>(), vec!["2", "10", "1"]);
    }

    #[test]
    fn raw_corpus_repeated_id_replaces_text() {
        let mut raw = RawCorpus::new();
        raw.insert("1", "first");
        raw.insert("1", "second");
        assert_eq!(raw.len(), 1);
        assert_eq!(raw.get("1"), Some("second"));
    }

    #[test]
    fn token_count_sums_documents() {
        let corpus = corpus_of(vec![("a", vec!["x", "y"]), ("b", vec![]), ("c", vec!["z"])]);
        assert_eq!(corpus.token_count(), 3);
    }
}
