use crate::table::Cell;
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static EMAIL_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}")
        .expect("email token pattern is valid")
});

/// Find all email-like tokens in a cell, left to right.
///
/// The cell text is NFKC-normalized first, so fullwidth and other
/// compatibility forms of ASCII characters are matched. Case is left as is.
pub fn extract_emails(cell: &Cell) -> Vec<String> {
    let Some(text) = cell.text() else {
        return Vec::new();
    };

    let normalized: String = text.nfkc().collect();
    EMAIL_TOKEN
        .find_iter(&normalized)
        .map(|m| m.as_str().to_string())
        .collect()
}
