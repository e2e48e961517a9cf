// Text analyzer: TF, IDF and TF-IDF reports over a small text corpus.
//
// This is the library root. Each module is one stage of the pipeline:
// corpus loading, text cleaning, frequency scoring, ranking, and output.

pub mod config;
pub mod corpus;
pub mod error;
pub mod frequency;
pub mod output;
pub mod pipeline;
pub mod ranking;
pub mod text;

pub use error::{Error, Result};
