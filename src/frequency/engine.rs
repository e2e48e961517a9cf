// TF, IDF and TF-IDF over token sequences.
//
// IDF here is computed over the corpus flattened into one token stream, so
// "number of documents" is the total token count and "document frequency" is
// the word's total occurrence count. Scores are
//
//   idf(w) = ln(total_tokens / count(w))
//
// which is not textbook IDF (that divides by documents containing the word),
// but it is the formula the reports have always used and the numbers people
// compare against.

use tracing::{debug, warn};

use super::table::FrequencyTable;
use crate::error::{Error, Result};

/// Count how often each token occurs. Case-sensitive; an empty sequence gives
/// an empty table. The counts always sum to `tokens.len()`.
pub fn tf<S: AsRef<str>>(tokens: &[S]) -> FrequencyTable<u64> {
    let mut table = FrequencyTable::new();
    for token in tokens {
        table.increment(token.as_ref());
    }
    table
}

/// Inverse frequency of every distinct token in a flattened corpus stream.
///
/// Every score is `>= 0.0`; a word making up the whole stream scores `0.0`.
/// Returns `Error::EmptyCorpus` for an empty stream instead of dividing by
/// zero.
pub fn idf<S: AsRef<str>>(flattened_tokens: &[S]) -> Result<FrequencyTable<f64>> {
    if flattened_tokens.is_empty() {
        return Err(Error::EmptyCorpus);
    }

    let ndocuments = flattened_tokens.len() as f64;
    let counts = tf(flattened_tokens);
    let table: FrequencyTable<f64> = counts
        .iter()
        .map(|(word, &count)| (word, (ndocuments / count as f64).ln()))
        .collect();

    debug!(
        tokens = flattened_tokens.len(),
        vocabulary = table.len(),
        "Computed IDF"
    );
    Ok(table)
}

/// Weight each TF count by the word's IDF.
///
/// Fails with `Error::UnknownTerm` on the first word of `tf_table` that has
/// no IDF entry, e.g. when scoring a document that was not part of the corpus
/// the IDF table came from.
pub fn tf_idf(
    idf_table: &FrequencyTable<f64>,
    tf_table: &FrequencyTable<u64>,
) -> Result<FrequencyTable<f64>> {
    let mut scores = FrequencyTable::new();
    for (word, &count) in tf_table.iter() {
        let weight = idf_table
            .get(word)
            .ok_or_else(|| Error::UnknownTerm(word.to_owned()))?;
        scores.insert(word, weight * count as f64);
    }
    Ok(scores)
}

/// Like [`tf_idf`], but skips words without an IDF entry and hands them back
/// so the caller can report each one.
pub fn tf_idf_lenient(
    idf_table: &FrequencyTable<f64>,
    tf_table: &FrequencyTable<u64>,
) -> (FrequencyTable<f64>, Vec<String>) {
    let mut scores = FrequencyTable::new();
    let mut unknown = Vec::new();
    for (word, &count) in tf_table.iter() {
        match idf_table.get(word) {
            Some(weight) => scores.insert(word, weight * count as f64),
            None => {
                warn!(term = %word, "Term not in corpus vocabulary, skipping");
                unknown.push(word.to_owned());
            }
        }
    }
    (scores, unknown)
}
