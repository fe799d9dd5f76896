//! Heuristic glossary extraction.
//!
//! Scans every unit text for definition sentences of the form
//! "<term> là <definition>" or "<term> có nghĩa là <definition>" and keeps
//! the candidates that look like actual terms rather than sentence
//! fragments. Purely lexical; independent of the diff engine.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use std::sync::LazyLock;

use luatdiff_shared::{write_atomic, Article};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;

/// "<term> là <definition>", definition ending at sentence punctuation.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static TERM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)(.+?)\s+(?:là|có nghĩa là)\s+(.*?)(?:[.;\n]|$)").expect("valid regex")
});

/// Leading ordinal or letter marker on a term candidate.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static TERM_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*(\d+\.\s*|[a-zA-Z]\)\s*)").expect("valid regex"));

/// Leading dashes and bullets left over from list formatting.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static LEADING_BULLETS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\-\u{2013}\u{2014}\u{2022}\s]+").expect("valid regex"));

/// A definition-verb phrase anywhere in the candidate marks a sentence.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static VERB_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(là việc|gồm|bao gồm|là những|là các|trường hợp)\b").expect("valid regex")
});

/// A candidate ending in a verb or preposition is a clause, not a term.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static TRAILING_VERB: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:là|gồm|gọi|được|bao|chỉ)\s*$").expect("valid regex"));

/// Substrings that mark a candidate as descriptive prose.
const VERB_STOPWORDS: &[&str] = &[
    "được",
    "gồm",
    "bao gồm",
    "là",
    "lưu ý",
    "có",
    "thực hiện",
    "là việc",
    "gọi là",
    "gồm:",
    "gồm các",
    "trường hợp",
    "là những",
    "là các",
];

/// One extracted term with its definition and provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryTerm {
    pub term: String,
    pub definition: String,

    /// Sorted, deduplicated article identifiers the term was seen in.
    pub related_articles: Vec<String>,
}

/// Strip line breaks and surrounding whitespace from a unit text.
fn clean_text(text: &str) -> String {
    text.replace(['\r', '\n'], " ").trim().to_string()
}

/// Strip leading markers and a trailing colon from a term candidate.
fn clean_term(term: &str) -> String {
    let trimmed = term.trim();
    let stripped = TERM_MARKER.replace(trimmed, "");
    stripped.trim_end_matches(':').trim().to_string()
}

/// Heuristic filter: does the text before "là" look like a term?
///
/// Long candidates, candidates full of commas, and candidates carrying
/// definition verbs are sentence fragments and are rejected.
fn is_likely_term(term: &str) -> bool {
    const MAX_WORDS: usize = 8;
    const MAX_CHARS: usize = 120;
    const MAX_COMMAS: usize = 1;

    let trimmed = term.trim();
    if trimmed.chars().count() < 2 {
        return false;
    }

    let candidate = LEADING_BULLETS.replace(trimmed, "");
    let candidate = candidate.trim();

    if candidate.chars().count() > MAX_CHARS {
        return false;
    }
    if candidate.split_whitespace().count() > MAX_WORDS {
        return false;
    }
    if candidate.matches(',').count() > MAX_COMMAS {
        return false;
    }

    let lowered = candidate.to_lowercase();
    if VERB_STOPWORDS.iter().any(|sw| lowered.contains(sw)) {
        return false;
    }
    if VERB_PHRASE.is_match(&lowered) {
        return false;
    }
    if candidate.contains('.') && candidate.chars().count() > 10 {
        return false;
    }
    if TRAILING_VERB.is_match(&lowered) {
        return false;
    }

    true
}

#[derive(Default)]
struct TermInfo {
    definition: String,
    related_articles: BTreeSet<String>,
}

/// Scan one article set, updating the term table.
///
/// The first definition seen for a term wins; later sightings only extend
/// the related-article set.
fn process_articles(articles: &[Article], terms: &mut HashMap<String, TermInfo>) {
    for article in articles {
        let mut texts: Vec<&str> = Vec::new();
        if let Some(text) = article.full_text.as_deref() {
            texts.push(text);
        }
        for clause in &article.clauses {
            if let Some(text) = clause.full_text.as_deref() {
                texts.push(text);
            }
            for point in &clause.points {
                if let Some(text) = point.full_text.as_deref() {
                    texts.push(text);
                }
            }
        }

        for text in texts {
            let cleaned = clean_text(text);
            for capture in TERM_RE.captures_iter(&cleaned) {
                let candidate = clean_term(&capture[1]);
                let definition = capture[2].trim().to_string();

                if !is_likely_term(&candidate) {
                    continue;
                }

                let info = terms.entry(candidate).or_default();
                if info.definition.is_empty() {
                    info.definition = definition;
                }
                info.related_articles.insert(article.article_id.clone());
            }
        }
    }
}

/// Build a glossary from one or more article sets.
///
/// Output is sorted by term, case-insensitively, so runs are reproducible.
#[must_use]
pub fn extract_glossary(article_sets: &[&[Article]]) -> Vec<GlossaryTerm> {
    let mut terms: HashMap<String, TermInfo> = HashMap::new();
    for articles in article_sets {
        process_articles(articles, &mut terms);
    }

    let mut glossary: Vec<GlossaryTerm> = terms
        .into_iter()
        .map(|(term, info)| GlossaryTerm {
            term,
            definition: info.definition,
            related_articles: info.related_articles.into_iter().collect(),
        })
        .collect();
    glossary.sort_by_key(|t| t.term.to_lowercase());

    info!(terms = glossary.len(), "glossary extracted");
    glossary
}

/// Save glossary terms as pretty-printed JSON, atomically.
pub fn save_glossary(path: &Path, terms: &[GlossaryTerm]) -> Result<()> {
    let content = serde_json::to_string_pretty(terms)?;
    write_atomic(path, &content)?;
    Ok(())
}
