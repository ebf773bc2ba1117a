//! Whitespace normalization and bounded summarization.

/// Default character budget for summaries.
pub const DEFAULT_SUMMARY_CHARS: usize = 1200;

/// Collapse all whitespace runs to single spaces and trim the ends.
///
/// Pure and idempotent; empty input yields empty output.
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncate text to the first `max_chars` characters.
///
/// Character-count truncation, not word-boundary aware; a summary may cut
/// mid-word.
pub fn summarize(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_runs() {
        assert_eq!(normalize("  a\t\tb\nc  "), "a b c");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for input in ["  a\t\tb\nc  ", "already normal", "", " \n\t ", "x"] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "input {input:?}");
        }
    }

    #[test]
    fn test_normalize_all_whitespace_collapses_to_nothing() {
        assert_eq!(normalize(" \n \t\r\n "), "");
    }

    #[test]
    fn test_summarize_bounds_length() {
        let text = "word ".repeat(500);
        let summary = summarize(&text, DEFAULT_SUMMARY_CHARS);
        assert_eq!(summary.chars().count(), DEFAULT_SUMMARY_CHARS);
    }

    #[test]
    fn test_summarize_is_a_prefix() {
        let text = "the quick brown fox";
        let summary = summarize(text, 7);
        assert_eq!(summary, "the qui");
        assert!(text.starts_with(&summary));
    }

    #[test]
    fn test_summarize_counts_chars_not_bytes() {
        let text = "héllo wörld";
        assert_eq!(summarize(text, 5), "héllo");
    }

    #[test]
    fn test_summarize_shorter_than_budget_is_unchanged() {
        assert_eq!(summarize("short", 1200), "short");
    }
}
