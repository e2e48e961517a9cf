// Text cleaning — strip everything but ASCII letters and spaces, then split
// into word tokens.
//
// Case is left alone here; the analysis pipeline lowercases tokens right
// before counting them.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex_lite::Regex;
use tracing::debug;

use crate::corpus::{Corpus, RawCorpus};

static NON_ALPHABETIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[^a-zA-Z ]").expect("character class pattern is valid"));

/// A lone "n" left behind when an escaped newline ("\n") loses its backslash.
const STRAY_N: &str = " n ";

/// Remove every character that is not an ASCII letter or a space, then drop
/// standalone "n" tokens.
///
/// `"B:a,n+a1n$a"` becomes `"Banana"`. The result only ever contains
/// `[A-Za-z ]`, and cleaning an already-clean string returns it unchanged.
pub fn clean_text(text: &str) -> String {
    let mut cleaned = NON_ALPHABETIC.replace_all(text, "").into_owned();
    // "a n n b" needs two passes: the first match consumes the shared space.
    while cleaned.contains(STRAY_N) {
        cleaned = cleaned.replace(STRAY_N, " ");
    }
    cleaned
}

/// Split cleaned text on whitespace. Never yields empty tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_owned).collect()
}

/// Clean and tokenize every document of a raw corpus.
///
/// Documents keep their ids and order; a document with no letters at all
/// becomes an empty token sequence rather than being dropped.
pub fn clean_corpus(raw: &RawCorpus) -> Corpus {
    let documents: IndexMap<String, Vec<String>> = raw
        .iter()
        .map(|(id, text)| (id.to_owned(), tokenize(&clean_text(text))))
        .collect();

    let corpus = Corpus::from_documents(documents);
    debug!(
        documents = corpus.len(),
        tokens = corpus.token_count(),
        "Cleaned corpus"
    );
    corpus
}
