//! JSON loading and saving for article trees.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::error::{Result, SharedError};
use crate::model::Article;

/// Load a list of articles from a JSON file.
///
/// Malformed input is fatal: the error carries the offending path and the
/// underlying parse error, and no partial data is returned.
pub fn load_articles(path: &Path) -> Result<Vec<Article>> {
    let content = fs::read_to_string(path).map_err(|source| SharedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| SharedError::MalformedJson {
        path: path.to_path_buf(),
        source,
    })
}

/// Save a list of articles as pretty-printed JSON.
///
/// Uses the atomic write pattern: write to a temp file, sync to disk, then
/// rename over the destination, so a crash never leaves a truncated file.
pub fn save_articles(path: &Path, articles: &[Article]) -> Result<()> {
    let content = serde_json::to_string_pretty(articles)?;
    write_atomic(path, &content)
}

/// Write a string to `path` atomically (temp file + sync + rename).
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let io_err = |source| SharedError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let temp_path = path.with_file_name(format!(".{file_name}.tmp"));

    {
        let mut file = File::create(&temp_path).map_err(io_err)?;
        file.write_all(content.as_bytes()).map_err(io_err)?;
        file.sync_all().map_err(io_err)?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path).map_err(io_err)?;
    }

    fs::rename(&temp_path, path).map_err(io_err)
}
