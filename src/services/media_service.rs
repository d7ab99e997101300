//! The remote-URL/local-file asset duality, in one place. `resolve` picks
//! the authoritative URL for reads; `place` decides which representation a
//! newly uploaded file gets. Shared by product images, product videos and
//! both About page images.

use crate::config::MediaConfig;
use crate::error::Result;
use crate::models::UploadedFile;
use crate::services::storage_service;
use crate::services::upload_service::{MediaKind, RemoteUploader};

/// A non-empty remote URL always wins; otherwise a local ref is served from
/// under the media URL base; otherwise there is no asset.
pub fn resolve(
    remote_url: Option<&str>,
    local_ref: Option<&str>,
    media_url_base: &str,
) -> Option<String> {
    if let Some(url) = remote_url {
        if !url.is_empty() {
            return Some(url.to_string());
        }
    }

    match local_ref {
        Some(path) if !path.is_empty() => Some(format!(
            "{}/{}",
            media_url_base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )),
        _ => None,
    }
}

/// Try the remote store first; keep the file locally when that fails or is
/// disabled. Exactly one side of the returned `(remote_url, local_ref)` pair
/// is set, which is what keeps the at-most-one-representation invariant.
pub async fn place(
    uploader: &RemoteUploader,
    media: &MediaConfig,
    file: &UploadedFile,
    kind: MediaKind,
    remote_folder: &str,
    local_subdir: &str,
) -> Result<(Option<String>, Option<String>)> {
    if let Some(url) = uploader
        .upload(&file.data, remote_folder, kind, &file.file_name)
        .await
    {
        return Ok((Some(url), None));
    }

    let local_ref = storage_service::store(media, local_subdir, &file.file_name, &file.data).await?;
    Ok((None, Some(local_ref)))
}
