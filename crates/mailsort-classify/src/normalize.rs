//! Text normalization applied before keyword scoring.

use once_cell::sync::Lazy;
use regex::Regex;

static NON_ALPHA_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z\s]").unwrap());

/// Strip everything but ASCII letters and whitespace, lowercase, and
/// collapse whitespace runs to single spaces.
///
/// Accented letters are deleted rather than transliterated, so
/// `"solicitação"` becomes `"solicitao"`.
pub fn normalize(text: &str) -> String {
    let letters = NON_ALPHA_RE.replace_all(text, "");
    letters
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
