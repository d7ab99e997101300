//! Store-backed tests for the dress upload/edit pipeline. These run against
//! a real Postgres database provided by `#[sqlx::test]`, with the remote
//! media store disabled so every upload falls back to local disk.

use bytes::Bytes;
use sqlx::PgPool;

use domemily_back::config::MediaConfig;
use domemily_back::error::AppError;
use domemily_back::models::{DressForm, UploadedFile};
use domemily_back::queries::product_queries;
use domemily_back::services::{dress_service, upload_service::RemoteUploader};

fn media_config(dir: &tempfile::TempDir) -> MediaConfig {
    MediaConfig {
        root: dir.path().to_path_buf(),
        url_base: "/media".to_string(),
    }
}

fn image_file() -> UploadedFile {
    UploadedFile {
        file_name: "gown.jpg".to_string(),
        content_type: Some("image/jpeg".to_string()),
        data: Bytes::from_static(b"jpeg-bytes"),
    }
}

fn kente_gown_form() -> DressForm {
    DressForm {
        name: "Kente Gown".to_string(),
        price: "250.00".to_string(),
        description: String::new(),
        dress_type: "kente".to_string(),
        is_available: true,
        image: Some(image_file()),
        video: None,
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn create_with_remote_disabled_stores_file_locally(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let media = media_config(&dir);
    let uploader = RemoteUploader::Disabled;

    let product = dress_service::create_dress(&pool, &uploader, &media, kente_gown_form())
        .await
        .unwrap();

    assert_eq!(product.slug, "kente-gown");
    assert_eq!(product.category, "dresses");
    assert_eq!(product.dress_type, "kente");
    assert!(product.is_available);
    assert_eq!(product.image_url, None);

    let local_ref = product.image.expect("local image ref should be set");
    assert!(local_ref.starts_with("products/"));
    assert!(dir.path().join(&local_ref).exists());

    // Video was not supplied, neither representation exists.
    assert_eq!(product.video, None);
    assert_eq!(product.video_url, None);
}

#[sqlx::test(migrations = "./migrations")]
async fn duplicate_names_get_counter_suffixed_slugs(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let media = media_config(&dir);
    let uploader = RemoteUploader::Disabled;

    let first = dress_service::create_dress(&pool, &uploader, &media, kente_gown_form())
        .await
        .unwrap();
    let second = dress_service::create_dress(&pool, &uploader, &media, kente_gown_form())
        .await
        .unwrap();
    let third = dress_service::create_dress(&pool, &uploader, &media, kente_gown_form())
        .await
        .unwrap();

    assert_eq!(first.slug, "kente-gown");
    assert_eq!(second.slug, "kente-gown-1");
    assert_eq!(third.slug, "kente-gown-2");
}

#[sqlx::test(migrations = "./migrations")]
async fn renaming_a_dress_keeps_its_slug(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let media = media_config(&dir);
    let uploader = RemoteUploader::Disabled;

    let product = dress_service::create_dress(&pool, &uploader, &media, kente_gown_form())
        .await
        .unwrap();

    let mut form = kente_gown_form();
    form.name = "Royal Kente Gown".to_string();
    form.image = None;

    let updated = dress_service::update_dress(&pool, &uploader, &media, product.clone(), form)
        .await
        .unwrap();

    assert_eq!(updated.name, "Royal Kente Gown");
    assert_eq!(updated.slug, "kente-gown");
    assert_eq!(updated.id, product.id);
}

#[sqlx::test(migrations = "./migrations")]
async fn edit_without_media_keeps_existing_assets(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let media = media_config(&dir);
    let uploader = RemoteUploader::Disabled;

    let product = dress_service::create_dress(&pool, &uploader, &media, kente_gown_form())
        .await
        .unwrap();
    let original_image = product.image.clone();

    let mut form = kente_gown_form();
    form.image = None;
    form.price = "300".to_string();

    let updated = dress_service::update_dress(&pool, &uploader, &media, product, form)
        .await
        .unwrap();

    assert_eq!(updated.image, original_image);
    assert_eq!(updated.image_url, None);
}

#[sqlx::test(migrations = "./migrations")]
async fn edit_replaces_only_the_resubmitted_asset(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let media = media_config(&dir);
    let uploader = RemoteUploader::Disabled;

    let mut form = kente_gown_form();
    form.video = Some(UploadedFile {
        file_name: "walkthrough.mp4".to_string(),
        content_type: Some("video/mp4".to_string()),
        data: Bytes::from_static(b"mp4-bytes"),
    });

    let product = dress_service::create_dress(&pool, &uploader, &media, form)
        .await
        .unwrap();
    let original_video = product.video.clone();
    assert!(original_video.is_some());

    let mut edit = kente_gown_form();
    edit.image = Some(UploadedFile {
        file_name: "new-angle.jpg".to_string(),
        content_type: Some("image/jpeg".to_string()),
        data: Bytes::from_static(b"other-jpeg"),
    });
    edit.video = None;

    let updated = dress_service::update_dress(&pool, &uploader, &media, product.clone(), edit)
        .await
        .unwrap();

    assert_ne!(updated.image, product.image);
    assert_eq!(updated.video, original_video);
}

#[sqlx::test(migrations = "./migrations")]
async fn invalid_create_persists_nothing(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let media = media_config(&dir);
    let uploader = RemoteUploader::Disabled;

    let mut form = kente_gown_form();
    form.name = String::new();

    let err = dress_service::create_dress(&pool, &uploader, &media, form)
        .await
        .unwrap_err();

    match err {
        AppError::Validation(errors) => {
            assert!(errors.iter().any(|e| e.contains("Dress name is required")));
        }
        other => panic!("expected validation error, got {:?}", other),
    }

    let counts = product_queries::dress_counts(&pool).await.unwrap();
    assert_eq!(counts.all_count, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn create_without_any_media_is_rejected(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let media = media_config(&dir);
    let uploader = RemoteUploader::Disabled;

    let mut form = kente_gown_form();
    form.image = None;
    form.video = None;

    let err = dress_service::create_dress(&pool, &uploader, &media, form)
        .await
        .unwrap_err();

    match err {
        AppError::Validation(errors) => {
            assert_eq!(
                errors,
                vec!["Please upload either an image or a video.".to_string()]
            );
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}
