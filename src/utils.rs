//! Utility functions for string processing.

/// Default number of leading characters used as a prefix bucket key.
pub const DEFAULT_PREFIX_LEN: usize = 3;

/// Lowercase and split on whitespace.
///
/// Catalog text and queries go through the same function, so a query token
/// and a record word compare equal exactly when they are the same word
/// ignoring case. Repeats are kept; callers that want a set collect into one.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

/// The first `len` characters of `token`, or the whole token if shorter.
///
/// Counts Unicode scalar values, not bytes, so a multi-byte first character
/// never splits.
pub fn prefix_key(token: &str, len: usize) -> &str {
    match token.char_indices().nth(len) {
        Some((byte_end, _)) => &token[..byte_end],
        None => token,
    }
}

/// True when either string is a prefix of the other.
///
/// Covers both a truncated query ("sho" vs "shoes") and a truncated catalog
/// word ("shoes" vs "sho").
#[inline]
pub fn is_mutual_prefix(a: &str, b: &str) -> bool {
    a.starts_with(b) || b.starts_with(a)
}

/// Render a score as a plain decimal with at least one fractional digit.
///
/// `1.0` stays `1.0` rather than `1`, `0.65` stays `0.65`. Uses the shortest
/// representation that round-trips and never an exponent, so a tiny score
/// prints as `0.0000075` rather than `7.5e-6`.
pub fn format_score(score: f64) -> String {
    let mut text = score.to_string();
    if !text.contains('.') {
        text.push_str(".0");
    }
    text
}
