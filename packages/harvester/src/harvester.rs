//! Main harvester service.

use luatdiff_shared::Article;
use tracing::info;

use crate::config::{source_url, validate_version};
use crate::error::Result;
use crate::http::{create_client, download_text};
use crate::parse::parse_articles;

/// Download and parse one version of the law.
///
/// # Arguments
/// * `version` - law version label, "2013" or "2024"
///
/// # Returns
/// The article trees in document order.
pub fn harvest_law(version: &str) -> Result<Vec<Article>> {
    validate_version(version)?;
    let url = source_url(version)?;

    info!(version, url, "downloading law text");
    let client = create_client()?;
    let html = download_text(&client, url)?;

    let articles = parse_articles(&html, version)?;
    info!(version, articles = articles.len(), "harvest complete");
    Ok(articles)
}
