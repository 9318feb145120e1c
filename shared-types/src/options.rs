use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

/// How repeated primary addresses inside the client list are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
pub enum DedupeMode {
    /// Keep every row and report later repeats as `duplicate_in_client`
    #[default]
    Tag,
    /// Drop later repeats before classification; they appear in no output table
    Prune,
}

impl fmt::Display for DedupeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DedupeMode::Tag => write!(f, "tag"),
            DedupeMode::Prune => write!(f, "prune"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown dedupe mode '{0}', expected 'tag' or 'prune'")]
pub struct ParseDedupeModeError(pub String);

impl FromStr for DedupeMode {
    type Err = ParseDedupeModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tag" => Ok(DedupeMode::Tag),
            "prune" => Ok(DedupeMode::Prune),
            other => Err(ParseDedupeModeError(other.to_string())),
        }
    }
}

/// Options for one scrub run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
pub struct ScrubOptions {
    /// Explicit email column name used for both tables; auto-detected when absent
    pub email_column: Option<String>,
    pub dedupe: bool,
    pub dedupe_mode: DedupeMode,
    /// Treat `name+tag@gmail.com` as `name@gmail.com`
    pub collapse_plus: bool,
    /// Treat `n.a.me@gmail.com` as `name@gmail.com`
    pub collapse_dots: bool,
    pub drop_invalid: bool,
}

impl Default for ScrubOptions {
    fn default() -> Self {
        Self {
            email_column: None,
            dedupe: true,
            dedupe_mode: DedupeMode::Tag,
            collapse_plus: true,
            collapse_dots: false,
            drop_invalid: true,
        }
    }
}

impl ScrubOptions {
    /// Apply per-run overrides on top of these defaults
    pub fn merged(&self, overrides: &ScrubOptionsOverride) -> Self {
        Self {
            email_column: overrides
                .email_column
                .clone()
                .or_else(|| self.email_column.clone()),
            dedupe: overrides.dedupe.unwrap_or(self.dedupe),
            dedupe_mode: overrides.dedupe_mode.unwrap_or(self.dedupe_mode),
            collapse_plus: overrides.collapse_plus.unwrap_or(self.collapse_plus),
            collapse_dots: overrides.collapse_dots.unwrap_or(self.collapse_dots),
            drop_invalid: overrides.drop_invalid.unwrap_or(self.drop_invalid),
        }
    }

    /// The override column with surrounding whitespace removed, if any remains
    pub fn email_column_override(&self) -> Option<&str> {
        self.email_column
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Partial options supplied by a request or command line
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(default)]
pub struct ScrubOptionsOverride {
    pub email_column: Option<String>,
    pub dedupe: Option<bool>,
    pub dedupe_mode: Option<DedupeMode>,
    pub collapse_plus: Option<bool>,
    pub collapse_dots: Option<bool>,
    pub drop_invalid: Option<bool>,
}
