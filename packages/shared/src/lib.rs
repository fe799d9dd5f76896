//! Shared data model for the luatdiff toolkit.
//!
//! Both the harvester (which produces article trees from the published HTML)
//! and the comparer (which diffs two trees) work on the same JSON shape:
//! a list of articles, each with optional whole-article text, numbered
//! clauses (khoản) and lettered points (điểm).
//!
//! # Example
//!
//! ```
//! use luatdiff_shared::{Article, Clause};
//!
//! let mut article = Article::new("L2024_#1", "1");
//! article.clauses.push(Clause::numbered("1", "1. Phạm vi điều chỉnh."));
//! assert_eq!(article.clauses[0].id(), Some("1"));
//! ```

pub mod error;
pub mod io;
pub mod model;

pub use error::{Result, SharedError};
pub use io::{load_articles, save_articles, write_atomic};
pub use model::{Article, Clause, Point};
