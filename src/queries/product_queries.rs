use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::{
    error::Result,
    models::{Product, CATEGORY_DRESSES},
};

pub const RELATED_LIMIT: i64 = 4;
pub const RECENT_LIMIT: i64 = 4;

pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(product)
}

/// Edit/toggle flows address dresses only.
pub async fn find_dress_by_id(pool: &PgPool, id: i32) -> Result<Option<Product>> {
    let product =
        sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1 AND category = $2")
            .bind(id)
            .bind(CATEGORY_DRESSES)
            .fetch_optional(pool)
            .await?;

    Ok(product)
}

pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE slug = $1")
        .bind(slug)
        .fetch_optional(pool)
        .await?;

    Ok(product)
}

/// Uniqueness probe for slug generation. `exclude_id` keeps a record from
/// colliding with itself on re-save.
pub async fn slug_exists(pool: &PgPool, candidate: &str, exclude_id: Option<i32>) -> Result<bool> {
    let exists: (bool,) = sqlx::query_as(
        "SELECT EXISTS (SELECT 1 FROM products WHERE slug = $1 AND ($2::int4 IS NULL OR id <> $2))",
    )
    .bind(candidate)
    .bind(exclude_id)
    .fetch_one(pool)
    .await?;

    Ok(exists.0)
}

/// Public catalog listing: visible products, newest first.
pub async fn list_available(pool: &PgPool) -> Result<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(
        "SELECT * FROM products WHERE is_available = TRUE ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await?;

    Ok(products)
}

/// Up to `limit` visible products sharing the category, excluding the
/// product itself, newest first.
pub async fn related(pool: &PgPool, product: &Product, limit: i64) -> Result<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(
        r#"
        SELECT * FROM products
        WHERE category = $1 AND is_available = TRUE AND id <> $2
        ORDER BY created_at DESC
        LIMIT $3
        "#,
    )
    .bind(&product.category)
    .bind(product.id)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(products)
}

pub async fn recent_dresses(pool: &PgPool, limit: i64) -> Result<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(
        "SELECT * FROM products WHERE category = $1 ORDER BY created_at DESC LIMIT $2",
    )
    .bind(CATEGORY_DRESSES)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(products)
}

#[derive(Debug, Default, Deserialize)]
pub struct ManageQuery {
    pub filter: Option<String>,
    pub search: Option<String>,
}

/// Management listing over dresses. Availability filter and name search are
/// optional and AND-composed.
pub async fn manage_list(pool: &PgPool, params: &ManageQuery) -> Result<Vec<Product>> {
    let mut query: QueryBuilder<Postgres> =
        QueryBuilder::new("SELECT * FROM products WHERE category = ");
    query.push_bind(CATEGORY_DRESSES);

    match params.filter.as_deref() {
        Some("available") => {
            query.push(" AND is_available = TRUE");
        }
        Some("hidden") => {
            query.push(" AND is_available = FALSE");
        }
        _ => {}
    }

    if let Some(search) = params.search.as_deref() {
        let search = search.trim();
        if !search.is_empty() {
            query.push(" AND name ILIKE ");
            query.push_bind(format!("%{}%", search));
        }
    }

    query.push(" ORDER BY created_at DESC");

    let products = query.build_query_as::<Product>().fetch_all(pool).await?;

    Ok(products)
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct DressCounts {
    pub all_count: i64,
    pub available_count: i64,
    pub hidden_count: i64,
}

/// Tab counts for the manage view, unaffected by the active filter/search.
pub async fn dress_counts(pool: &PgPool) -> Result<DressCounts> {
    let counts = sqlx::query_as::<_, DressCounts>(
        r#"
        SELECT
            COUNT(*) AS all_count,
            COUNT(*) FILTER (WHERE is_available) AS available_count,
            COUNT(*) FILTER (WHERE NOT is_available) AS hidden_count
        FROM products
        WHERE category = $1
        "#,
    )
    .bind(CATEGORY_DRESSES)
    .fetch_one(pool)
    .await?;

    Ok(counts)
}

#[derive(Debug)]
pub struct NewDress {
    pub name: String,
    pub slug: String,
    pub dress_type: String,
    pub description: String,
    pub price: Decimal,
    pub image: Option<String>,
    pub image_url: Option<String>,
    pub video: Option<String>,
    pub video_url: Option<String>,
    pub is_available: bool,
}

pub async fn insert_dress(pool: &PgPool, new: &NewDress) -> Result<Product> {
    let product = sqlx::query_as::<_, Product>(
        r#"
        INSERT INTO products (
            name, slug, category, dress_type, description, price,
            image, image_url, video, video_url, is_available
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING *
        "#,
    )
    .bind(&new.name)
    .bind(&new.slug)
    .bind(CATEGORY_DRESSES)
    .bind(&new.dress_type)
    .bind(&new.description)
    .bind(new.price)
    .bind(&new.image)
    .bind(&new.image_url)
    .bind(&new.video)
    .bind(&new.video_url)
    .bind(new.is_available)
    .fetch_one(pool)
    .await?;

    Ok(product)
}

/// Full-row update with values the edit pipeline already resolved. The slug
/// is deliberately not part of the statement.
pub async fn update_dress(pool: &PgPool, id: i32, changes: &NewDress) -> Result<Product> {
    let product = sqlx::query_as::<_, Product>(
        r#"
        UPDATE products
        SET
            name = $1,
            dress_type = $2,
            description = $3,
            price = $4,
            image = $5,
            image_url = $6,
            video = $7,
            video_url = $8,
            is_available = $9
        WHERE id = $10
        RETURNING *
        "#,
    )
    .bind(&changes.name)
    .bind(&changes.dress_type)
    .bind(&changes.description)
    .bind(changes.price)
    .bind(&changes.image)
    .bind(&changes.image_url)
    .bind(&changes.video)
    .bind(&changes.video_url)
    .bind(changes.is_available)
    .bind(id)
    .fetch_one(pool)
    .await?;

    Ok(product)
}

/// Idempotent by construction: writing the current value changes nothing.
pub async fn set_availability(pool: &PgPool, id: i32, value: bool) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>(
        "UPDATE products SET is_available = $1 WHERE id = $2 RETURNING *",
    )
    .bind(value)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(product)
}

pub async fn delete_product(pool: &PgPool, id: i32) -> Result<u64> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
