/// Collapse every run of whitespace into a single hyphen, dropping leading and trailing runs.
pub fn hyphenate_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join("-")
}

/// First whitespace-delimited token of `line` with trailing ASCII punctuation removed.
pub fn leading_token(line: &str) -> Option<&str> {
    line.split_whitespace()
        .next()
        .map(|token| token.trim_end_matches(|ch: char| ch.is_ascii_punctuation()))
        .filter(|token| !token.is_empty())
}
