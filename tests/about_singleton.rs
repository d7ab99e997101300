//! The About content is a singleton: repeated create-if-absent calls must
//! land on one identity, and edits mutate that same row in place.

use bytes::Bytes;
use sqlx::PgPool;

use domemily_back::config::MediaConfig;
use domemily_back::models::{AboutForm, UploadedFile};
use domemily_back::services::{about_service, upload_service::RemoteUploader};

fn media_config(dir: &tempfile::TempDir) -> MediaConfig {
    MediaConfig {
        root: dir.path().to_path_buf(),
        url_base: "/media".to_string(),
    }
}

fn founder_photo() -> UploadedFile {
    UploadedFile {
        file_name: "founder.jpg".to_string(),
        content_type: Some("image/jpeg".to_string()),
        data: Bytes::from_static(b"jpeg"),
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn get_or_create_twice_yields_one_record(pool: PgPool) {
    let first = about_service::get_or_create_about(&pool).await.unwrap();
    let second = about_service::get_or_create_about(&pool).await.unwrap();

    assert_eq!(first.id, second.id);

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM about_content")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn update_with_remote_disabled_stores_image_locally(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let media = media_config(&dir);

    let form = AboutForm {
        founder_image: Some(founder_photo()),
        studio_image: None,
    };

    let content =
        about_service::update_about(&pool, &RemoteUploader::Disabled, &media, form)
            .await
            .unwrap();

    assert_eq!(content.founder_image_url, None);
    let local_ref = content.founder_image.expect("local founder ref");
    assert!(local_ref.starts_with("about/"));
    assert!(dir.path().join(&local_ref).exists());

    // The studio image was not touched.
    assert_eq!(content.studio_image, None);
    assert_eq!(content.studio_image_url, None);
}

#[sqlx::test(migrations = "./migrations")]
async fn successive_updates_mutate_the_same_row(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let media = media_config(&dir);
    let uploader = RemoteUploader::Disabled;

    let first = about_service::update_about(
        &pool,
        &uploader,
        &media,
        AboutForm {
            founder_image: Some(founder_photo()),
            studio_image: None,
        },
    )
    .await
    .unwrap();

    let second = about_service::update_about(
        &pool,
        &uploader,
        &media,
        AboutForm {
            founder_image: None,
            studio_image: Some(UploadedFile {
                file_name: "studio.jpg".to_string(),
                content_type: Some("image/jpeg".to_string()),
                data: Bytes::from_static(b"jpeg"),
            }),
        },
    )
    .await
    .unwrap();

    assert_eq!(first.id, second.id);
    // The earlier founder image survived the second edit.
    assert_eq!(second.founder_image, first.founder_image);
    assert!(second.studio_image.is_some());

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM about_content")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 1);
}
