//! Local media storage: the fallback target when the remote store is
//! unavailable. Files land under the media root, namespaced by purpose so
//! product images, product videos and About images never collide.

use std::path::Path;

use uuid::Uuid;

use crate::config::MediaConfig;
use crate::error::{AppError, Result};

pub const PRODUCT_IMAGE_DIR: &str = "products";
pub const PRODUCT_VIDEO_DIR: &str = "products/videos";
pub const ABOUT_IMAGE_DIR: &str = "about";

/// Write an uploaded file under `<media root>/<subdir>/` and return the
/// relative ref that gets persisted on the record. The stored name is
/// uuid-prefixed so repeated uploads of the same filename never clash.
pub async fn store(
    media: &MediaConfig,
    subdir: &str,
    original_name: &str,
    data: &[u8],
) -> Result<String> {
    let file_name = format!("{}-{}", Uuid::new_v4(), sanitize_file_name(original_name));
    let relative = format!("{}/{}", subdir, file_name);
    let dest = media.root.join(&relative);

    if let Some(parent) = dest.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to create media dir: {}", e)))?;
    }

    tokio::fs::write(&dest, data)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to store uploaded file: {}", e)))?;

    Ok(relative)
}

/// Strip any path components and replace shell-hostile characters.
fn sanitize_file_name(name: &str) -> String {
    let base = Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload");

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.is_empty() {
        "upload".to_string()
    } else {
        cleaned
    }
}
