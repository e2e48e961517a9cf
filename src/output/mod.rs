// Output formatting — terminal listings and JSON reports.

pub mod json;
pub mod terminal;

/// Truncate a word to at most `max_chars` characters, appending "..." if truncated.
///
/// Keeps very long tokens (a run of letters with no spaces) from pushing the
/// score column off screen.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}
