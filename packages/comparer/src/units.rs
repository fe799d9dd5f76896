//! Flattening of article trees into comparable text units.
//!
//! A unit is the whole text of an article, a clause, or a point. Document
//! order is preserved: articles in input order, clauses within each article,
//! points within each clause.

use luatdiff_shared::Article;

/// One comparable fragment of a statute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextUnit {
    /// Identifier of the owning article.
    pub article_id: String,

    /// Number of the owning article.
    pub article_number: String,

    /// Clause identifier; set for clause-level and point-level units.
    pub clause_id: Option<String>,

    /// Point identifier; set only for point-level units.
    pub point_id: Option<String>,

    /// Raw fragment text, non-empty after trimming.
    pub text: String,
}

/// True if the optional text field carries visible content.
fn has_text(text: Option<&str>) -> bool {
    text.is_some_and(|t| !t.trim().is_empty())
}

/// Extract the units of a single article, in document order.
///
/// Units with empty text are not emitted. Missing clause/point identifiers
/// are carried as `None`, never fabricated.
#[must_use]
pub fn extract_units(article: &Article) -> Vec<TextUnit> {
    let mut units = Vec::new();

    if has_text(article.full_text.as_deref()) {
        units.push(TextUnit {
            article_id: article.article_id.clone(),
            article_number: article.article_number.clone(),
            clause_id: None,
            point_id: None,
            text: article.full_text.clone().unwrap_or_default(),
        });
    }

    for clause in &article.clauses {
        let clause_id = clause.id().map(String::from);

        if has_text(clause.full_text.as_deref()) {
            units.push(TextUnit {
                article_id: article.article_id.clone(),
                article_number: article.article_number.clone(),
                clause_id: clause_id.clone(),
                point_id: None,
                text: clause.full_text.clone().unwrap_or_default(),
            });
        }

        for point in &clause.points {
            if has_text(point.full_text.as_deref()) {
                units.push(TextUnit {
                    article_id: article.article_id.clone(),
                    article_number: article.article_number.clone(),
                    clause_id: clause_id.clone(),
                    point_id: point.id().map(String::from),
                    text: point.full_text.clone().unwrap_or_default(),
                });
            }
        }
    }

    units
}

/// Flatten a whole document into an ordered unit list.
#[must_use]
pub fn flatten_units(articles: &[Article]) -> Vec<TextUnit> {
    articles.iter().flat_map(extract_units).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use luatdiff_shared::{Clause, Point};
    use pretty_assertions::assert_eq;

    fn sample_article() -> Article {
        let mut article = Article::new("L2013_#4", "4").with_full_text("Nội dung chung.");
        let mut clause = Clause::numbered("1", "1. Khoản thứ nhất.");
        clause.points.push(Point::lettered("a", "a) Điểm a."));
        clause.points.push(Point::lettered("đ", "đ) Điểm đ."));
        article.clauses.push(clause);
        article.clauses.push(Clause::numbered("2", "2. Khoản thứ hai."));
        article
    }

    #[test]
    fn test_extract_units_document_order() {
        let units = extract_units(&sample_article());
        let texts: Vec<&str> = units.iter().map(|u| u.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "Nội dung chung.",
                "1. Khoản thứ nhất.",
                "a) Điểm a.",
                "đ) Điểm đ.",
                "2. Khoản thứ hai.",
            ]
        );
    }

    #[test]
    fn test_unit_identifiers_per_level() {
        let units = extract_units(&sample_article());

        // Article-level unit has no clause or point.
        assert_eq!(units[0].clause_id, None);
        assert_eq!(units[0].point_id, None);

        // Clause-level unit carries its clause id.
        assert_eq!(units[1].clause_id.as_deref(), Some("1"));
        assert_eq!(units[1].point_id, None);

        // Point-level unit carries both.
        assert_eq!(units[2].clause_id.as_deref(), Some("1"));
        assert_eq!(units[2].point_id.as_deref(), Some("a"));
    }

    #[test]
    fn test_empty_texts_excluded() {
        let mut article = Article::new("L2013_#9", "9");
        article.full_text = Some("   ".to_string());
        article.clauses.push(Clause {
            clause_id: None,
            clause: Some("1".to_string()),
            full_text: None,
            points: vec![Point::lettered("a", "a) Chỉ điểm này.")],
        });

        let units = extract_units(&article);
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].text, "a) Chỉ điểm này.");
    }

    #[test]
    fn test_missing_identifiers_stay_null() {
        let mut article = Article::new("L2013_#9", "9");
        let mut clause = Clause::default();
        clause.full_text = Some("Khoản không số.".to_string());
        clause.points.push(Point {
            point_id: None,
            point: None,
            full_text: Some("Điểm không ký hiệu.".to_string()),
        });
        article.clauses.push(clause);

        let units = extract_units(&article);
        assert_eq!(units.len(), 2);
        assert_eq!(units[0].clause_id, None);
        assert_eq!(units[1].clause_id, None);
        assert_eq!(units[1].point_id, None);
    }

    #[test]
    fn test_flatten_preserves_article_order() {
        let articles = vec![
            Article::new("L2013_#1", "1").with_full_text("Điều một."),
            Article::new("L2013_#2", "2").with_full_text("Điều hai."),
        ];
        let units = flatten_units(&articles);
        assert_eq!(units[0].article_number, "1");
        assert_eq!(units[1].article_number, "2");
    }
}
