//! Small text helpers shared by the analyzer and the report layer

/// Number of whitespace-separated tokens.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Lowercased form fed to section detection.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}

/// First `max_chars` characters, cut back to the last space and suffixed with
/// an ellipsis when the text is longer.
pub fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let truncated: String = text.chars().take(max_chars).collect();
    let cut = truncated.rfind(' ').unwrap_or(truncated.len());
    format!("{}...", &truncated[..cut])
}
