//! Email token extraction and canonicalization.

mod canonical;
mod extract;

pub use canonical::{canonicalize, CanonicalOptions, ALIASING_DOMAINS};
pub use extract::extract_emails;

use crate::table::Cell;

/// Extract every address in a cell and canonicalize each one, in order of appearance
pub fn canonical_emails(cell: &Cell, options: CanonicalOptions) -> Vec<String> {
    extract_emails(cell)
        .iter()
        .filter(|token| !token.is_empty())
        .map(|token| canonicalize(token, options))
        .collect()
}
