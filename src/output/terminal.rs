// Colored terminal output for the ranked listings.
//
// main.rs delegates all report printing here.

use colored::Colorize;

use crate::pipeline::analysis::AnalysisReport;
use crate::ranking::RankedList;

/// Longest word shown before truncation.
const WORD_WIDTH: usize = 24;

/// How a score is printed in a listing.
pub trait ScoreDisplay {
    fn display_score(&self) -> String;
}

impl ScoreDisplay for u64 {
    fn display_score(&self) -> String {
        self.to_string()
    }
}

impl ScoreDisplay for f64 {
    fn display_score(&self) -> String {
        format!("{self:.4}")
    }
}

/// Which listing a header introduces.
#[derive(Debug, Clone, Copy)]
pub enum Section<'a> {
    CorpusTf,
    CorpusIdf,
    CorpusTfIdf,
    /// TF-IDF of one document against the corpus IDF table
    Comparison(&'a str),
}

/// Header line for a listing, naming K.
pub fn section_title(section: Section<'_>, k: usize) -> String {
    match section {
        Section::CorpusTf => format!("Corpus TF (Top {k}):"),
        Section::CorpusIdf => format!("Corpus IDF (Top {k}):"),
        Section::CorpusTfIdf => format!("Corpus TFIDF (Top {k}):"),
        Section::Comparison(document) => {
            format!("Corpus TFIDF Compared to {document} (Top {k}):")
        }
    }
}

/// Line printed before the listings.
pub fn examining_line(documents: usize) -> String {
    format!("Examining {documents} documents...")
}

/// Print every section of a report, in the order they were computed.
pub fn display_report(report: &AnalysisReport) {
    println!("\n{}", examining_line(report.documents));

    let k = report.top_k;
    display_ranking(&section_title(Section::CorpusTf, k), &report.corpus_tf);
    display_ranking(&section_title(Section::CorpusIdf, k), &report.corpus_idf);
    display_ranking(&section_title(Section::CorpusTfIdf, k), &report.corpus_tf_idf);

    if let Some(comparison) = &report.comparison {
        display_ranking(
            &section_title(Section::Comparison(&comparison.document), k),
            &comparison.tf_idf,
        );
        if !comparison.unknown_terms.is_empty() {
            println!(
                "  {} {} terms not in the corpus vocabulary: {}",
                "Warning:".yellow(),
                comparison.unknown_terms.len(),
                comparison.unknown_terms.join(", ").dimmed()
            );
        }
    }
    println!();
}

/// Print one titled ranking as a numbered list of word / score rows.
pub fn display_ranking<V: ScoreDisplay>(title: &str, ranked: &RankedList<V>) {
    println!("\n{}", title.bold());

    if ranked.is_empty() {
        println!("  {}", "(no entries)".dimmed());
        return;
    }

    for (i, (word, score)) in ranked.iter().enumerate() {
        let word = super::truncate_chars(word, WORD_WIDTH);
        println!(
            "  {:>4}. {:<width$} {:>12}",
            i + 1,
            word,
            score.display_score().cyan(),
            width = WORD_WIDTH + 3,
        );
    }
}
