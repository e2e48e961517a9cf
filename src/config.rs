use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::ranking::DEFAULT_TOP_K;

/// How the report is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Colored, human-readable listings (default)
    #[default]
    Text,
    /// One pretty-printed JSON document
    Json,
}

/// Options for one analysis run.
///
/// Built from the command line by the binary. Nothing here is read from the
/// environment or from config files.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// A single text file, or a directory of `.txt` files
    pub input: PathBuf,
    /// How many entries each ranking shows
    pub top_k: usize,
    /// Document to score against the corpus IDF table, if any
    pub compare: Option<String>,
    pub output_format: OutputFormat,
}

impl AnalysisConfig {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            top_k: DEFAULT_TOP_K,
            compare: None,
            output_format: OutputFormat::default(),
        }
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn with_compare(mut self, document: Option<String>) -> Self {
        self.compare = document;
        self
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Check that the input path exists before any loading starts.
    pub fn validate(&self) -> Result<()> {
        if !self.input.is_file() && !self.input.is_dir() {
            return Err(Error::InputNotFound(self.input.clone()));
        }
        Ok(())
    }

    /// The comparison document id with any extension removed, so both
    /// `--tfidf 18` and `--tfidf 18.txt` name the document "18".
    pub fn compare_id(&self) -> Option<&str> {
        self.compare.as_deref().map(strip_extension)
    }
}

/// Everything before the last '.', or the whole id when there is none.
pub fn strip_extension(id: &str) -> &str {
    id.rsplit_once('.').map_or(id, |(stem, _)| stem)
}
