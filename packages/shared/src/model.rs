//! Article tree types.
//!
//! The tree has three levels: article (điều) → clause (khoản) → point (điểm).
//! Field names match the JSON written by the harvester; older dumps used
//! `clause`/`point` instead of `clause_id`/`point_id`, so both spellings are
//! accepted and the accessors fall back to the secondary field.

use serde::{Deserialize, Serialize};

/// A single article of a statute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Stable identifier, e.g. "L2024_#12".
    pub article_id: String,

    /// Version label of the law this article belongs to (e.g. "2013").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub law_version: Option<String>,

    /// Article number within the law (e.g. "12").
    pub article_number: String,

    /// Article heading, e.g. "Điều 12. Những hành vi bị nghiêm cấm".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Whole-article text for articles without clause structure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_text: Option<String>,

    /// Numbered clauses (khoản).
    #[serde(default)]
    pub clauses: Vec<Clause>,
}

impl Article {
    /// Create an empty article.
    #[must_use]
    pub fn new(article_id: impl Into<String>, article_number: impl Into<String>) -> Self {
        Self {
            article_id: article_id.into(),
            law_version: None,
            article_number: article_number.into(),
            title: None,
            full_text: None,
            clauses: Vec::new(),
        }
    }

    /// Set the whole-article text.
    #[must_use]
    pub fn with_full_text(mut self, text: impl Into<String>) -> Self {
        self.full_text = Some(text.into());
        self
    }
}

/// A numbered clause (khoản) within an article.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Clause {
    /// Primary clause identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clause_id: Option<String>,

    /// Secondary identifier field used by older dumps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clause: Option<String>,

    /// Clause text, including its leading "1." marker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_text: Option<String>,

    /// Lettered points (điểm) within the clause.
    #[serde(default)]
    pub points: Vec<Point>,
}

impl Clause {
    /// Create a clause with a number and text, using the secondary field
    /// (the shape the crawlers historically produced).
    #[must_use]
    pub fn numbered(number: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            clause_id: None,
            clause: Some(number.into()),
            full_text: Some(text.into()),
            points: Vec::new(),
        }
    }

    /// Clause identifier, preferring `clause_id` over `clause`.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.clause_id.as_deref().or(self.clause.as_deref())
    }
}

/// A lettered point (điểm) within a clause.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Primary point identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_id: Option<String>,

    /// Secondary identifier field used by older dumps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point: Option<String>,

    /// Point text, including its leading "a)" marker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_text: Option<String>,
}

impl Point {
    /// Create a point with a letter and text, using the secondary field.
    #[must_use]
    pub fn lettered(letter: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            point_id: None,
            point: Some(letter.into()),
            full_text: Some(text.into()),
        }
    }

    /// Point identifier, preferring `point_id` over `point`.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.point_id.as_deref().or(self.point.as_deref())
    }
}
