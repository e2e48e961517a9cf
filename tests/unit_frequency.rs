// Unit tests for the frequency engine: TF counts, IDF and TF-IDF.
//
// The IDF tests pin down the current formula, ln(total tokens / occurrences)
// over the flattened corpus. That is not per-document IDF; these tests exist
// so any change to it is deliberate.

use proptest::prelude::*;

use text_analyzer::error::Error;
use text_analyzer::frequency::{idf, tf, tf_idf, tf_idf_lenient, FrequencyTable};

fn tokens(text: &str) -> Vec<String> {
    text.split_whitespace().map(String::from).collect()
}

// ============================================================
// tf
// ============================================================

proptest! {
    #[test]
    fn tf_counts_sum_to_token_count(words in prop::collection::vec("[a-e]{1,3}", 0..60)) {
        let table = tf(&words);
        prop_assert_eq!(table.total(), words.len() as u64);
        prop_assert_eq!(table.values().sum::<u64>(), words.len() as u64);
    }

    #[test]
    fn idf_scores_are_never_negative(words in prop::collection::vec("[a-e]{1,3}", 1..60)) {
        let table = idf(&words).unwrap();
        prop_assert!(table.values().all(|&score| score >= 0.0));
    }
}

#[test]
fn corpus_tf_of_worked_example() {
    let table = tf(&tokens("the cat sat the dog ran the cat ran"));
    assert_eq!(table.get("the"), Some(&3));
    assert_eq!(table.get("cat"), Some(&2));
    assert_eq!(table.get("ran"), Some(&2));
    assert_eq!(table.get("sat"), Some(&1));
    assert_eq!(table.get("dog"), Some(&1));
    assert_eq!(table.len(), 5);
}

#[test]
fn tf_does_not_fold_case() {
    let table = tf(&tokens("Love love LOVE"));
    assert_eq!(table.get("love"), Some(&1));
    assert_eq!(table.get("Love"), Some(&1));
}

// ============================================================
// idf — documents current (flattened-stream) behavior
// ============================================================

#[test]
fn idf_divides_total_tokens_by_occurrences() {
    let stream = tokens("the cat sat the dog ran the cat ran");
    let table = idf(&stream).unwrap();

    let expected_the = (9.0_f64 / 3.0).ln();
    let expected_cat = (9.0_f64 / 2.0).ln();
    assert!((table.get("the").unwrap() - expected_the).abs() < 1e-12);
    assert!((table.get("cat").unwrap() - expected_cat).abs() < 1e-12);
}

#[test]
fn idf_vocabulary_matches_tf_vocabulary() {
    let stream = tokens("a b c a b a");
    let idf_table = idf(&stream).unwrap();
    let tf_table = tf(&stream);
    assert_eq!(
        idf_table.words().collect::<Vec<_>>(),
        tf_table.words().collect::<Vec<_>>()
    );
}

#[test]
fn idf_rejects_empty_stream() {
    let empty: Vec<String> = Vec::new();
    assert!(matches!(idf(&empty), Err(Error::EmptyCorpus)));
}

// ============================================================
// tf_idf
// ============================================================

#[test]
fn tf_idf_of_corpus_against_itself_covers_every_word() {
    let stream = tokens("the cat sat the dog ran the cat ran");
    let idf_table = idf(&stream).unwrap();
    let tf_table = tf(&stream);
    let scores = tf_idf(&idf_table, &tf_table).unwrap();

    assert_eq!(scores.len(), tf_table.len());
    let expected_the = 3.0 * (9.0_f64 / 3.0).ln();
    assert!((scores.get("the").unwrap() - expected_the).abs() < 1e-12);
}

#[test]
fn tf_idf_surfaces_unknown_term() {
    let idf_table = idf(&tokens("the cat sat")).unwrap();
    let held_out = tf(&tokens("the nightingale"));
    let err = tf_idf(&idf_table, &held_out).unwrap_err();
    assert!(matches!(&err, Error::UnknownTerm(term) if term == "nightingale"));
    assert!(err.to_string().contains("nightingale"));
}

#[test]
fn tf_idf_lenient_keeps_known_terms() {
    let idf_table = idf(&tokens("the cat sat")).unwrap();
    let held_out = tf(&tokens("the nightingale the lark"));
    let (scores, unknown) = tf_idf_lenient(&idf_table, &held_out);
    assert_eq!(scores.words().collect::<Vec<_>>(), vec!["the"]);
    assert_eq!(unknown, vec!["nightingale", "lark"]);
}

#[test]
fn tf_idf_of_empty_tf_is_empty() {
    let idf_table = idf(&tokens("a b")).unwrap();
    let scores = tf_idf(&idf_table, &FrequencyTable::new()).unwrap();
    assert!(scores.is_empty());
}
