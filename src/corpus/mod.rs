// Corpus — the documents under analysis, before and after cleaning.

pub mod loader;
pub mod types;

pub use types::{Corpus, RawCorpus};
