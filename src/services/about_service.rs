//! Singleton enforcement and the edit pipeline for the About page content.

use sqlx::PgPool;

use crate::{
    config::MediaConfig,
    error::{AppError, Result},
    models::{AboutContent, AboutForm},
    queries::about_queries,
    services::{
        media_service,
        storage_service::ABOUT_IMAGE_DIR,
        upload_service::{MediaKind, RemoteUploader, ABOUT_FOLDER},
    },
};

/// Fetch the single About record, creating it on first access. Two callers
/// racing past an empty fetch both insert-if-absent and re-fetch the same
/// row, so repeated "creates" always land on one identity.
pub async fn get_or_create_about(pool: &PgPool) -> Result<AboutContent> {
    if let Some(content) = about_queries::find_first(pool).await? {
        return Ok(content);
    }

    about_queries::insert_default(pool).await?;

    about_queries::find_first(pool)
        .await?
        .ok_or_else(|| AppError::InternalError("About content row missing after insert".to_string()))
}

/// Apply an About edit: each supplied image replaces its own remote/local
/// pair with the usual remote-first precedence, the other image is left
/// untouched.
pub async fn update_about(
    pool: &PgPool,
    uploader: &RemoteUploader,
    media: &MediaConfig,
    form: AboutForm,
) -> Result<AboutContent> {
    let mut content = get_or_create_about(pool).await?;

    if let Some(file) = &form.founder_image {
        let (url, local) = media_service::place(
            uploader,
            media,
            file,
            MediaKind::Image,
            ABOUT_FOLDER,
            ABOUT_IMAGE_DIR,
        )
        .await?;
        content.founder_image_url = url;
        content.founder_image = local;
    }

    if let Some(file) = &form.studio_image {
        let (url, local) = media_service::place(
            uploader,
            media,
            file,
            MediaKind::Image,
            ABOUT_FOLDER,
            ABOUT_IMAGE_DIR,
        )
        .await?;
        content.studio_image_url = url;
        content.studio_image = local;
    }

    about_queries::update(pool, &content).await
}
