// Error kinds for corpus loading and frequency computation.
//
// The binary wraps these in anyhow with extra context; library callers can
// match on the variant (e.g. to keep going after an unknown term).

use std::path::PathBuf;

/// Errors produced while loading a corpus or scoring it.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The input path is neither a file nor a directory.
    #[error("input not found: {} is neither a file nor a directory", .0.display())]
    InputNotFound(PathBuf),

    /// No documents were loaded, or an empty token stream was given to IDF.
    #[error("corpus is empty: nothing to compute IDF over")]
    EmptyCorpus,

    /// A term being scored has no IDF entry in the corpus table.
    #[error("unknown term: {0:?} does not occur in the corpus vocabulary")]
    UnknownTerm(String),

    /// The requested comparison document is not part of the corpus.
    #[error("document not found in corpus: {0:?}")]
    DocumentNotFound(String),

    /// Reading a document failed.
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_term_message_names_the_term() {
        let err = Error::UnknownTerm("thee".to_string());
        assert!(err.to_string().contains("\"thee\""));
    }

    #[test]
    fn input_not_found_message_names_the_path() {
        let err = Error::InputNotFound(PathBuf::from("/no/such/sonnets"));
        assert!(err.to_string().contains("/no/such/sonnets"));
    }
}
