//! Catalog query behavior: availability filtering, related products,
//! management filters and the idempotent availability switch.

use bytes::Bytes;
use sqlx::PgPool;

use domemily_back::config::MediaConfig;
use domemily_back::models::{DressForm, Product, UploadedFile};
use domemily_back::queries::{
    contact_queries,
    product_queries::{self, ManageQuery},
};
use domemily_back::services::{dress_service, upload_service::RemoteUploader};

async fn seed_dress(pool: &PgPool, media: &MediaConfig, name: &str, available: bool) -> Product {
    let form = DressForm {
        name: name.to_string(),
        price: "100.00".to_string(),
        description: String::new(),
        dress_type: "maxi".to_string(),
        is_available: available,
        image: Some(UploadedFile {
            file_name: "look.jpg".to_string(),
            content_type: Some("image/jpeg".to_string()),
            data: Bytes::from_static(b"jpeg"),
        }),
        video: None,
    };

    dress_service::create_dress(pool, &RemoteUploader::Disabled, media, form)
        .await
        .unwrap()
}

fn media_config(dir: &tempfile::TempDir) -> MediaConfig {
    MediaConfig {
        root: dir.path().to_path_buf(),
        url_base: "/media".to_string(),
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn list_available_hides_unavailable_products(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let media = media_config(&dir);

    let visible = seed_dress(&pool, &media, "Ankara Wrap", true).await;
    let hidden = seed_dress(&pool, &media, "Shift Dress", false).await;

    let listed = product_queries::list_available(&pool).await.unwrap();
    assert!(listed.iter().any(|p| p.id == visible.id));
    assert!(listed.iter().all(|p| p.id != hidden.id));
    assert!(listed.iter().all(|p| p.is_available));
}

#[sqlx::test(migrations = "./migrations")]
async fn toggling_off_removes_from_listing_and_related(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let media = media_config(&dir);

    let anchor = seed_dress(&pool, &media, "Anchor Gown", true).await;
    let other = seed_dress(&pool, &media, "Peplum Dress", true).await;

    let related = product_queries::related(&pool, &anchor, 4).await.unwrap();
    assert!(related.iter().any(|p| p.id == other.id));
    assert!(related.iter().all(|p| p.id != anchor.id));

    product_queries::set_availability(&pool, other.id, false)
        .await
        .unwrap();

    let listed = product_queries::list_available(&pool).await.unwrap();
    assert!(listed.iter().all(|p| p.id != other.id));

    let related = product_queries::related(&pool, &anchor, 4).await.unwrap();
    assert!(related.iter().all(|p| p.id != other.id));
}

#[sqlx::test(migrations = "./migrations")]
async fn related_caps_at_limit_and_orders_newest_first(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let media = media_config(&dir);

    let anchor = seed_dress(&pool, &media, "Anchor", true).await;
    for i in 0..6 {
        seed_dress(&pool, &media, &format!("Dress {}", i), true).await;
    }

    let related = product_queries::related(&pool, &anchor, 4).await.unwrap();
    assert_eq!(related.len(), 4);
    for pair in related.windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at);
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn set_availability_is_idempotent(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let media = media_config(&dir);

    let product = seed_dress(&pool, &media, "Cocktail Dress", true).await;

    let first = product_queries::set_availability(&pool, product.id, false)
        .await
        .unwrap()
        .unwrap();
    let second = product_queries::set_availability(&pool, product.id, false)
        .await
        .unwrap()
        .unwrap();

    assert!(!first.is_available);
    assert!(!second.is_available);
    assert_eq!(first.id, second.id);
    assert_eq!(first.created_at, second.created_at);
}

#[sqlx::test(migrations = "./migrations")]
async fn manage_list_composes_filters_and_search(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let media = media_config(&dir);

    let kente = seed_dress(&pool, &media, "Kente Gown", true).await;
    let hidden_kente = seed_dress(&pool, &media, "Kente Wrap", false).await;
    seed_dress(&pool, &media, "Office Dress", true).await;

    // No filters: everything, newest first.
    let all = product_queries::manage_list(&pool, &ManageQuery::default())
        .await
        .unwrap();
    assert_eq!(all.len(), 3);

    let available = product_queries::manage_list(
        &pool,
        &ManageQuery {
            filter: Some("available".to_string()),
            search: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(available.len(), 2);
    assert!(available.iter().all(|p| p.is_available));

    let hidden = product_queries::manage_list(
        &pool,
        &ManageQuery {
            filter: Some("hidden".to_string()),
            search: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(hidden.len(), 1);
    assert_eq!(hidden[0].id, hidden_kente.id);

    // Case-insensitive substring search, AND-composed with the filter.
    let searched = product_queries::manage_list(
        &pool,
        &ManageQuery {
            filter: Some("available".to_string()),
            search: Some("kEnTe".to_string()),
        },
    )
    .await
    .unwrap();
    assert_eq!(searched.len(), 1);
    assert_eq!(searched[0].id, kente.id);

    let counts = product_queries::dress_counts(&pool).await.unwrap();
    assert_eq!(counts.all_count, 3);
    assert_eq!(counts.available_count, 2);
    assert_eq!(counts.hidden_count, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn find_by_slug_misses_return_none(pool: PgPool) {
    let found = product_queries::find_by_slug(&pool, "no-such-dress")
        .await
        .unwrap();
    assert!(found.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn delete_removes_the_row(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let media = media_config(&dir);

    let product = seed_dress(&pool, &media, "Bridesmaid Dress", true).await;

    let affected = product_queries::delete_product(&pool, product.id)
        .await
        .unwrap();
    assert_eq!(affected, 1);

    let found = product_queries::find_by_id(&pool, product.id).await.unwrap();
    assert!(found.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn contact_messages_are_persisted_with_trimmed_fields(pool: PgPool) {
    use domemily_back::models::ContactMessageRequest;

    let req = ContactMessageRequest {
        name: "  Ama  ".to_string(),
        email: " ama@example.com ".to_string(),
        message: "Do you ship to Kumasi? ".to_string(),
    };
    assert!(req.validate().is_empty());

    let saved = contact_queries::insert_message(&pool, &req).await.unwrap();
    assert_eq!(saved.name, "Ama");
    assert_eq!(saved.email, "ama@example.com");
    assert_eq!(saved.message, "Do you ship to Kumasi?");
}
