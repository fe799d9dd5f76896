//! HTML parsing of the source pages into article trees.
//!
//! The source site renders the law body as a flat run of `<p>` elements
//! inside `div.content1`. Structure is recovered from navigation anchors
//! (`dieu_*`, `khoan_*`, `diem_*`) when present, with text-pattern
//! fallbacks for paragraphs the site left unanchored.

use std::sync::LazyLock;

use luatdiff_shared::{Article, Clause, Point};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use crate::config::article_id;
use crate::error::{HarvesterError, Result};

#[allow(clippy::expect_used)] // Static selector that is guaranteed to be valid
static CONTENT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.content1").expect("valid selector"));

#[allow(clippy::expect_used)] // Static selector that is guaranteed to be valid
static P_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p").expect("valid selector"));

#[allow(clippy::expect_used)] // Static selector that is guaranteed to be valid
static ARTICLE_ANCHOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[name^='dieu_']").expect("valid selector"));

#[allow(clippy::expect_used)] // Static selector that is guaranteed to be valid
static CLAUSE_ANCHOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[name^='khoan_']").expect("valid selector"));

#[allow(clippy::expect_used)] // Static selector that is guaranteed to be valid
static POINT_ANCHOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[name^='diem_']").expect("valid selector"));

/// "Điều 12. ..." heading.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ARTICLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Điều\s+(\d+)").expect("valid regex"));

/// "1. ..." clause start.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static CLAUSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.").expect("valid regex"));

/// "a) ..." point start. The letter class covers the Vietnamese alphabet
/// so points like "đ)" are recognised.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static POINT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-zÀ-ỹ])\)").expect("valid regex"));

/// Collapse line breaks and whitespace runs into single spaces.
fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Full visible text of an element.
fn element_text(element: ElementRef<'_>) -> String {
    clean_text(&element.text().collect::<String>())
}

/// Anchor name attribute of the first matching child, if any.
fn anchor_name<'a>(element: ElementRef<'a>, selector: &Selector) -> Option<&'a str> {
    element
        .select(selector)
        .next()
        .and_then(|a| a.value().attr("name"))
}

/// Parse the article trees out of a downloaded source page.
///
/// Walks the `<p>` run in document order, opening a new article on every
/// "Điều N" heading, a new clause on every "1."-style paragraph, and
/// attaching "a)"-style paragraphs to the open clause. The paragraph right
/// after a heading becomes the article's `full_text` when it is not itself
/// a clause (articles without internal numbering).
///
/// # Errors
/// Fails with `MissingContent` when the page has no `div.content1` block.
pub fn parse_articles(html: &str, version: &str) -> Result<Vec<Article>> {
    let document = Html::parse_document(html);
    let content = document
        .select(&CONTENT_SELECTOR)
        .next()
        .ok_or_else(|| HarvesterError::MissingContent {
            version: version.to_string(),
        })?;

    let paragraphs: Vec<ElementRef<'_>> = content.select(&P_SELECTOR).collect();
    let texts: Vec<String> = paragraphs.iter().map(|p| element_text(*p)).collect();

    let mut articles: Vec<Article> = Vec::new();
    let mut in_clause = false;

    for (i, (paragraph, text)) in paragraphs.iter().zip(&texts).enumerate() {
        // Article heading.
        let heading_anchor = anchor_name(*paragraph, &ARTICLE_ANCHOR);
        if heading_anchor.is_some() || ARTICLE_RE.is_match(text) {
            let number = heading_anchor
                .map(|name| name.trim_start_matches("dieu_").to_string())
                .or_else(|| {
                    ARTICLE_RE
                        .captures(text)
                        .map(|c| c[1].to_string())
                })
                .unwrap_or_else(|| "?".to_string());

            let mut article = Article::new(article_id(version, &number), number);
            article.law_version = Some(version.to_string());
            article.title = Some(text.clone());

            // An unstructured article keeps its body in full_text: the next
            // paragraph belongs to the article itself when it is not a clause.
            if let Some(next_text) = texts.get(i + 1) {
                if !CLAUSE_RE.is_match(next_text) && !next_text.is_empty() {
                    article.full_text = Some(next_text.clone());
                }
            }

            articles.push(article);
            in_clause = false;
            continue;
        }

        // Clause paragraph.
        let clause_anchor = anchor_name(*paragraph, &CLAUSE_ANCHOR);
        if clause_anchor.is_some() || CLAUSE_RE.is_match(text) {
            let number = clause_anchor
                .and_then(|name| {
                    let parts: Vec<&str> = name.split('_').collect();
                    (parts.len() >= 3).then(|| parts[1].to_string())
                })
                .or_else(|| CLAUSE_RE.captures(text).map(|c| c[1].to_string()))
                .unwrap_or_else(|| "?".to_string());

            if let Some(article) = articles.last_mut() {
                article.clauses.push(Clause::numbered(number, text.clone()));
                in_clause = true;
            } else {
                warn!(paragraph = i, "clause outside any article, skipped");
            }
            continue;
        }

        // Point paragraph.
        let point_anchor = anchor_name(*paragraph, &POINT_ANCHOR);
        if point_anchor.is_some() || POINT_RE.is_match(text) {
            let letter = point_anchor
                .and_then(|name| {
                    let parts: Vec<&str> = name.split('_').collect();
                    (parts.len() >= 4).then(|| parts[1].to_string())
                })
                .or_else(|| POINT_RE.captures(text).map(|c| c[1].to_string()))
                .unwrap_or_else(|| "?".to_string());

            if in_clause {
                if let Some(clause) = articles.last_mut().and_then(|a| a.clauses.last_mut()) {
                    clause.points.push(Point::lettered(letter, text.clone()));
                }
            }
            continue;
        }
    }

    debug!(articles = articles.len(), version, "parsed article trees");
    Ok(articles)
}
