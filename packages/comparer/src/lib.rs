//! luatdiff Comparer - Version diff engine for structured legal texts.
//!
//! Compares two versions of a hierarchical legal document (articles →
//! clauses → points) and produces a minimal changelog: which units were
//! added, deleted, or modified, with detection of splits (one old unit
//! spread over several new units) and merges (several old units fused into
//! one).
//!
//! # Example
//!
//! ```
//! use luatdiff_comparer::{compare_documents, CompareConfig};
//! use luatdiff_shared::Article;
//!
//! let old = vec![Article::new("L2013_#4", "4").with_full_text("Đất đai thuộc sở hữu toàn dân.")];
//! let new = vec![Article::new("L2024_#4", "4").with_full_text("Đất đai thuộc sở hữu toàn dân.")];
//!
//! let report = compare_documents(&old, &new, &CompareConfig::default()).unwrap();
//! assert!(report.entries.is_empty());
//! ```
//!
//! # Architecture
//!
//! Data flows strictly forward through the modules:
//!
//! - [`units`]: flattening the article tree into comparable text units
//! - [`normalize`]: stripping structural markers and whitespace noise
//! - [`vectorize`]: TF-IDF vectors and the pairwise similarity matrix
//! - [`matching`]: one-to-one assignment (optimal or greedy)
//! - [`splitmerge`]: split and merge detection on the raw matrix
//! - [`mapping`]: changelog synthesis with precedence rules
//! - [`comparer`]: the pipeline tying the stages together
//! - [`glossary`]: independent defined-term extraction
//! - [`report`]: output persistence and console summary
//! - [`cli`]: command-line interface

pub mod cli;
pub mod comparer;
pub mod config;
pub mod error;
pub mod glossary;
pub mod mapping;
pub mod matching;
pub mod normalize;
pub mod report;
pub mod splitmerge;
pub mod units;
pub mod vectorize;

// Re-export main functions
pub use comparer::{compare_documents, ComparisonReport, RunSummary};

// Re-export commonly used items
pub use config::CompareConfig;
pub use error::{ComparerError, Result};
pub use glossary::{extract_glossary, GlossaryTerm};
pub use mapping::{ChangeEntry, ChangeType, UnitKey};
