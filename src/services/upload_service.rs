//! Remote media store boundary. The uploader is built once at startup and
//! injected through `AppState`; callers get a definite outcome and fall back
//! to local storage on `None`, so a missing or failing remote store is never
//! a user-facing error.

use aws_sdk_s3::{primitives::ByteStream, Client as S3Client};
use uuid::Uuid;

pub const PRODUCT_FOLDER: &str = "domemily/products";
pub const ABOUT_FOLDER: &str = "domemily/about";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

pub enum RemoteUploader {
    Disabled,
    S3 {
        client: S3Client,
        bucket: String,
        public_base_url: String,
    },
}

impl RemoteUploader {
    pub fn s3(client: S3Client, bucket: String, public_base_url: String) -> Self {
        Self::S3 {
            client,
            bucket,
            public_base_url,
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::Disabled)
    }

    /// Push a file to the remote store and return its public URL, or `None`
    /// when the store is not configured or the put fails. Failures are
    /// logged for operators only.
    pub async fn upload(
        &self,
        data: &[u8],
        folder: &str,
        kind: MediaKind,
        file_name: &str,
    ) -> Option<String> {
        let Self::S3 {
            client,
            bucket,
            public_base_url,
        } = self
        else {
            return None;
        };

        let extension = extension_for(kind, file_name);
        let key = format!("{}/{}.{}", folder, Uuid::new_v4(), extension);
        let content_type = content_type_for(kind, extension);

        let result = client
            .put_object()
            .bucket(bucket)
            .key(&key)
            .content_type(content_type)
            .body(ByteStream::from(data.to_vec()))
            .send()
            .await;

        match result {
            Ok(_) => Some(format!(
                "{}/{}",
                public_base_url.trim_end_matches('/'),
                key
            )),
            Err(e) => {
                tracing::warn!("Remote media upload failed for {}: {}", key, e);
                None
            }
        }
    }
}

fn extension_for(kind: MediaKind, file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit('.')
        .next()
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match kind {
        MediaKind::Image => match ext.as_str() {
            "png" => "png",
            "webp" => "webp",
            "gif" => "gif",
            _ => "jpg",
        },
        MediaKind::Video => match ext.as_str() {
            "webm" => "webm",
            "mov" => "mov",
            _ => "mp4",
        },
    }
}

fn content_type_for(kind: MediaKind, extension: &str) -> &'static str {
    match kind {
        MediaKind::Image => match extension {
            "png" => "image/png",
            "webp" => "image/webp",
            "gif" => "image/gif",
            _ => "image/jpeg",
        },
        MediaKind::Video => match extension {
            "webm" => "video/webm",
            "mov" => "video/quicktime",
            _ => "video/mp4",
        },
    }
}
