use std::collections::HashSet;

/// Remembers primary addresses already seen in the client table; first occurrence wins.
#[derive(Debug, Default)]
pub struct DuplicateTracker {
    seen: HashSet<String>,
}

impl DuplicateTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `primary` and report whether an earlier row already used it.
    /// Empty primaries mean "no address" and never collide.
    pub fn observe(&mut self, primary: &str) -> bool {
        if primary.is_empty() {
            return false;
        }
        !self.seen.insert(primary.to_string())
    }
}
