//! Content file loading
//!
//! Reads the JSON content file once at startup and validates it into a
//! [`ContentStore`].

use std::path::Path;
use tokio::fs;
use tracing::{info, warn, error, debug};
use crate::utils::errors::Result;
use super::model::ContentData;
use super::store::ContentStore;

/// Load and validate content from a JSON file
pub async fn load_content(path: impl AsRef<Path>) -> Result<ContentStore> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Reading content file");

    let raw = fs::read_to_string(path).await.map_err(|e| {
        error!(path = %path.display(), error = %e, "Failed to read content file");
        e
    })?;

    let mut data: ContentData = serde_json::from_str(&raw)?;
    let base = path.parent().unwrap_or_else(|| Path::new(""));
    resolve_media_paths(&mut data, base).await;
    let store = ContentStore::new(data)?;

    info!(
        path = %path.display(),
        facts = store.list_facts().len(),
        quotes = store.list_quotes().len(),
        quiz_questions = store.list_quiz_questions().len(),
        quest_stages = store.list_quest_stages().len(),
        operas = store.list_operas().len(),
        "Content loaded"
    );

    Ok(store)
}

/// Resolve media paths against the content file's directory. Paths that do
/// not point at an existing file are dropped so the item falls back to its
/// file id or caption.
async fn resolve_media_paths(data: &mut ContentData, base: &Path) {
    for item in data.audio.iter_mut().chain(data.photos.iter_mut()) {
        let Some(local_path) = item.local_path.take() else {
            continue;
        };
        let resolved = base.join(&local_path);
        match fs::try_exists(&resolved).await {
            Ok(true) => item.local_path = Some(resolved.to_string_lossy().into_owned()),
            Ok(false) | Err(_) => {
                warn!(
                    title = %item.title,
                    path = %resolved.display(),
                    "Media file not found, ignoring local path"
                );
            }
        }
    }
}

/// Parse and validate content from a JSON string. Media paths are taken
/// as they are.
pub fn parse_content(raw: &str) -> Result<ContentStore> {
    let data: ContentData = serde_json::from_str(raw)?;
    Ok(ContentStore::new(data)?)
}
