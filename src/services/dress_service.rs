//! Upload/Edit pipeline for dresses: validate the whole form, push supplied
//! media to the remote store with a local-disk fallback, then persist.
//! Nothing is written when validation fails.

use std::str::FromStr;

use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::{
    config::MediaConfig,
    error::{AppError, Result},
    models::{DressForm, Product},
    queries::product_queries::{self, NewDress},
    services::{
        media_service, slug_service,
        storage_service::{PRODUCT_IMAGE_DIR, PRODUCT_VIDEO_DIR},
        upload_service::{MediaKind, RemoteUploader, PRODUCT_FOLDER},
    },
};

/// Check every rule and report all violations together. Media is required on
/// create only; an edit may change nothing but text fields.
pub fn validate_dress_form(form: &DressForm, require_media: bool) -> Vec<String> {
    let mut errors = Vec::new();

    if form.name.trim().is_empty() {
        errors.push("Dress name is required.".to_string());
    }

    let price = form.price.trim();
    if price.is_empty() {
        errors.push("Price is required.".to_string());
    } else {
        match Decimal::from_str(price) {
            Ok(value) => {
                if value < Decimal::ZERO {
                    errors.push("Price must be a positive number.".to_string());
                }
            }
            Err(_) => errors.push("Invalid price format.".to_string()),
        }
    }

    if require_media && form.image.is_none() && form.video.is_none() {
        errors.push("Please upload either an image or a video.".to_string());
    }

    errors
}

pub async fn create_dress(
    pool: &PgPool,
    uploader: &RemoteUploader,
    media: &MediaConfig,
    form: DressForm,
) -> Result<Product> {
    let errors = validate_dress_form(&form, true);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let price = Decimal::from_str(form.price.trim())
        .map_err(|_| AppError::Validation(vec!["Invalid price format.".to_string()]))?;

    let (image_url, image) = match &form.image {
        Some(file) => {
            let (url, local) = media_service::place(
                uploader,
                media,
                file,
                MediaKind::Image,
                PRODUCT_FOLDER,
                PRODUCT_IMAGE_DIR,
            )
            .await?;
            (url, local)
        }
        None => (None, None),
    };

    let (video_url, video) = match &form.video {
        Some(file) => {
            let (url, local) = media_service::place(
                uploader,
                media,
                file,
                MediaKind::Video,
                PRODUCT_FOLDER,
                PRODUCT_VIDEO_DIR,
            )
            .await?;
            (url, local)
        }
        None => (None, None),
    };

    // A new record has no slug yet, so this is the one place one is ever
    // assigned.
    let slug = slug_service::generate_slug(&form.name, |candidate| {
        let pool = pool.clone();
        async move { product_queries::slug_exists(&pool, &candidate, None).await }
    })
    .await?;

    let product = product_queries::insert_dress(
        pool,
        &NewDress {
            name: form.name.trim().to_string(),
            slug,
            dress_type: form.dress_type.trim().to_string(),
            description: form.description.trim().to_string(),
            price,
            image,
            image_url,
            video,
            video_url,
            is_available: form.is_available,
        },
    )
    .await?;

    tracing::info!("Created dress \"{}\" ({})", product.name, product.slug);

    Ok(product)
}

/// Edit an existing dress. Text fields are overwritten from the form; each
/// supplied media file replaces only its own remote/local pair, an asset not
/// resubmitted keeps whatever it had. The slug never changes here, even when
/// the name does, so published URLs stay valid.
pub async fn update_dress(
    pool: &PgPool,
    uploader: &RemoteUploader,
    media: &MediaConfig,
    product: Product,
    form: DressForm,
) -> Result<Product> {
    let errors = validate_dress_form(&form, false);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let price = Decimal::from_str(form.price.trim())
        .map_err(|_| AppError::Validation(vec!["Invalid price format.".to_string()]))?;

    let (image_url, image) = match &form.image {
        Some(file) => media_service::place(
            uploader,
            media,
            file,
            MediaKind::Image,
            PRODUCT_FOLDER,
            PRODUCT_IMAGE_DIR,
        )
        .await?,
        None => (product.image_url.clone(), product.image.clone()),
    };

    let (video_url, video) = match &form.video {
        Some(file) => media_service::place(
            uploader,
            media,
            file,
            MediaKind::Video,
            PRODUCT_FOLDER,
            PRODUCT_VIDEO_DIR,
        )
        .await?,
        None => (product.video_url.clone(), product.video.clone()),
    };

    let updated = product_queries::update_dress(
        pool,
        product.id,
        &NewDress {
            name: form.name.trim().to_string(),
            slug: product.slug.clone(),
            dress_type: form.dress_type.trim().to_string(),
            description: form.description.trim().to_string(),
            price,
            image,
            image_url,
            video,
            video_url,
            is_available: form.is_available,
        },
    )
    .await?;

    Ok(updated)
}
