// Corpus loading from disk.
//
// The input is either a single text file or a directory of `.txt` files.
// Each file is one document, keyed by its file stem ("sonnets/18.txt" -> "18").
// Directory mode only looks at direct children and visits them in sorted
// file-name order so runs are reproducible.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::types::RawCorpus;
use crate::error::{Error, Result};

/// File extension picked up in directory mode.
pub const DOCUMENT_EXTENSION: &str = "txt";

/// Load every document under `path` into a `RawCorpus`.
///
/// Line breaks are deleted, not replaced, so the last word of a line runs
/// into the first word of the next ("thee\nTo" reads as "theeTo"). Any read
/// failure is fatal.
pub fn load_corpus(path: &Path) -> Result<RawCorpus> {
    let files = discover_documents(path)?;

    let mut corpus = RawCorpus::new();
    for file in &files {
        let text = read_document(file)?;
        let id = document_id(file);
        debug!(id = %id, bytes = text.len(), "Loaded document");
        corpus.insert(id, text);
    }

    info!(
        documents = corpus.len(),
        path = %path.display(),
        "Loaded corpus"
    );
    Ok(corpus)
}

/// Resolve the input path to the list of document files to read.
pub fn discover_documents(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    if !path.is_dir() {
        return Err(Error::InputNotFound(path.to_path_buf()));
    }

    let entries = fs::read_dir(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file = entry.path();
        let is_document = file
            .extension()
            .is_some_and(|ext| ext == DOCUMENT_EXTENSION);
        if is_document && file.is_file() {
            files.push(file);
        }
    }
    files.sort();
    Ok(files)
}

/// Document id for a file: its name without the extension.
pub fn document_id(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn read_document(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(strip_line_breaks(&text))
}

/// Delete every `\n` and `\r`.
fn strip_line_breaks(text: &str) -> String {
    text.replace(['\n', '\r'], "")
}
