// One analysis run over a corpus.
//
// Flow: load -> clean -> flatten to lowercase tokens -> corpus TF, IDF and
// TF-IDF -> top K of each. With a comparison document, that document's TF is
// also weighted by the corpus IDF table.
//
// Nothing is printed here; the binary renders the returned report.

use serde::Serialize;
use tracing::{info, warn};

use crate::config::AnalysisConfig;
use crate::corpus::{loader, Corpus};
use crate::error::{Error, Result};
use crate::frequency::{idf, tf, tf_idf, tf_idf_lenient};
use crate::ranking::{top_k, RankedList};
use crate::text::cleaner::clean_corpus;

/// Ranked results of one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    /// Number of documents examined
    pub documents: usize,
    /// K used for every ranking below
    pub top_k: usize,
    pub corpus_tf: RankedList<u64>,
    pub corpus_idf: RankedList<f64>,
    pub corpus_tf_idf: RankedList<f64>,
    /// Present when a comparison document was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<Comparison>,
}

/// TF-IDF of a single document, weighted by the corpus IDF table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub document: String,
    pub tf_idf: RankedList<f64>,
    /// Words of the document with no IDF entry; they are left out of the
    /// ranking rather than failing the run
    pub unknown_terms: Vec<String>,
}

/// Load the configured input from disk and analyze it.
pub fn run(config: &AnalysisConfig) -> Result<AnalysisReport> {
    config.validate()?;
    let raw = loader::load_corpus(&config.input)?;
    let corpus = clean_corpus(&raw);
    analyze(&corpus, config.top_k, config.compare_id())
}

/// Score an already-cleaned corpus.
///
/// `compare` is a document id in `corpus`. Fails with `Error::EmptyCorpus`
/// when the corpus has no documents or no tokens at all.
pub fn analyze(corpus: &Corpus, k: usize, compare: Option<&str>) -> Result<AnalysisReport> {
    if corpus.is_empty() {
        return Err(Error::EmptyCorpus);
    }

    // Resolve the comparison document up front so a typo fails before any
    // scoring is done.
    let compare_tokens = compare
        .map(|id| {
            corpus
                .tokens(id)
                .map(|tokens| (id, tokens))
                .ok_or_else(|| Error::DocumentNotFound(id.to_owned()))
        })
        .transpose()?;

    let flattened = corpus.flatten_lowercase();
    let corpus_tf = tf(&flattened);
    let corpus_idf = idf(&flattened)?;
    // Every word of the flattened stream has an IDF entry, so this cannot hit
    // an unknown term.
    let corpus_tf_idf = tf_idf(&corpus_idf, &corpus_tf)?;

    info!(
        documents = corpus.len(),
        tokens = flattened.len(),
        vocabulary = corpus_tf.len(),
        "Scored corpus"
    );

    let comparison = compare_tokens.map(|(id, tokens)| {
        let lowered: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
        let (scores, unknown_terms) = tf_idf_lenient(&corpus_idf, &tf(&lowered));
        if !unknown_terms.is_empty() {
            warn!(
                document = id,
                unknown = unknown_terms.len(),
                "Comparison document has terms outside the corpus vocabulary"
            );
        }
        Comparison {
            document: id.to_owned(),
            tf_idf: top_k(&scores, k),
            unknown_terms,
        }
    });

    Ok(AnalysisReport {
        documents: corpus.len(),
        top_k: k,
        corpus_tf: top_k(&corpus_tf, k),
        corpus_idf: top_k(&corpus_idf, k),
        corpus_tf_idf: top_k(&corpus_tf_idf, k),
        comparison,
    })
}
