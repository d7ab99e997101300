use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::MediaConfig;
use crate::models::UploadedFile;
use crate::services::media_service;

/// Singleton record backing the About page. The table constrains the id to 1
/// so there is never more than one row.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct AboutContent {
    pub id: i32,
    pub founder_image: Option<String>,
    pub founder_image_url: Option<String>,
    pub studio_image: Option<String>,
    pub studio_image_url: Option<String>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct AboutResponse {
    #[serde(flatten)]
    pub content: AboutContent,
    pub founder_display_url: Option<String>,
    pub studio_display_url: Option<String>,
}

impl AboutResponse {
    pub fn new(content: AboutContent, media: &MediaConfig) -> Self {
        let founder_display_url = media_service::resolve(
            content.founder_image_url.as_deref(),
            content.founder_image.as_deref(),
            &media.url_base,
        );
        let studio_display_url = media_service::resolve(
            content.studio_image_url.as_deref(),
            content.studio_image.as_deref(),
            &media.url_base,
        );

        Self {
            content,
            founder_display_url,
            studio_display_url,
        }
    }
}

/// Parsed About edit form.
#[derive(Debug, Default)]
pub struct AboutForm {
    pub founder_image: Option<UploadedFile>,
    pub studio_image: Option<UploadedFile>,
}
