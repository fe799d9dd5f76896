//! luatdiff Harvester - Download Vietnamese Land Law texts.
//!
//! Fetches the consolidated pages of the Land Law 2013 and 2024 from their
//! public source and parses the flat HTML into the article → clause → point
//! trees the comparer consumes.
//!
//! # Example
//!
//! ```
//! use luatdiff_harvester::config::validate_version;
//!
//! assert!(validate_version("2024").is_ok());
//! assert!(validate_version("1993").is_err());
//! ```
//!
//! # Architecture
//!
//! - [`config`]: source URLs and version validation
//! - [`error`]: error types and Result alias
//! - [`http`]: HTTP client with retry logic
//! - [`parse`]: HTML parsing into article trees
//! - [`cli`]: command-line interface
//! - [`harvester`]: main harvester service

pub mod cli;
pub mod config;
pub mod error;
pub mod harvester;
pub mod http;
pub mod parse;

// Re-export main functions
pub use harvester::harvest_law;

// Re-export commonly used items
pub use config::{source_url, validate_version};
pub use error::{HarvesterError, Result};
pub use parse::parse_articles;
