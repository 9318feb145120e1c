//! Scrubber Crate
//!
//! This crate removes suppressed, invalid and duplicate email addresses from a
//! client contact list. It consumes tables of rows with named columns and
//! produces a kept table, a removed table with reasons, and summary counts.
//!
//! # Architecture
//!
//! - **Types**: Options, summary and request/response types live in the `shared-types` crate
//! - **Implementations**: Extraction, canonicalization, classification and table I/O live here
//!
//! # Pipeline
//!
//! - `email`: Finds address tokens in cell text and canonicalizes them
//! - `column`: Detects the email column from common header names
//! - `suppression`: Builds the set of canonical addresses to exclude
//! - `classifier`: Assigns each client row a verdict by fixed reason priority
//! - `report`: Partitions rows into kept/removed tables and tallies the summary
//!
//! # Example
//!
//! ```rust,ignore
//! use scrubber::{load_table, scrub};
//! use shared_types::ScrubOptions;
//!
//! let client = load_table(Path::new("clients.csv"))?;
//! let suppression = load_table(Path::new("unsubscribes.xlsx"))?;
//! let report = scrub(Some(&client), Some(&suppression), &ScrubOptions::default())?;
//! println!("{}", report.message());
//! ```

pub mod classifier;
pub mod column;
pub mod email;
mod error;
pub mod pipeline;
pub mod report;
pub mod suppression;
pub mod table;

// Re-export commonly used types
pub use classifier::{classify, ClassifyOptions, Disposition, Verdict};
pub use column::detect_email_column;
pub use email::{canonicalize, extract_emails, CanonicalOptions};
pub use error::{Result, ScrubError, TableKind};
pub use pipeline::{scrub, scrub_csv, scrub_files};
pub use report::{assemble, ScrubReport, REASON_COLUMN};
pub use suppression::SuppressionSet;
pub use table::{load_table, parse_workbook, Cell, CsvParser, Table, TableFormat};

// Re-export the option and summary types from shared-types for convenience
pub use shared_types::{DedupeMode, RemovalReason, ScrubOptions, ScrubSummary};
