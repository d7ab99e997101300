use sqlx::PgPool;

use crate::{error::Result, models::AboutContent};

pub async fn find_first(pool: &PgPool) -> Result<Option<AboutContent>> {
    let content = sqlx::query_as::<_, AboutContent>("SELECT * FROM about_content LIMIT 1")
        .fetch_optional(pool)
        .await?;

    Ok(content)
}

/// Insert the single row if it does not exist yet. Concurrent callers both
/// racing past an empty fetch collapse onto the same identity here; the
/// loser's insert is a no-op.
pub async fn insert_default(pool: &PgPool) -> Result<()> {
    sqlx::query("INSERT INTO about_content (id) VALUES (1) ON CONFLICT (id) DO NOTHING")
        .execute(pool)
        .await?;

    Ok(())
}

pub async fn update(pool: &PgPool, content: &AboutContent) -> Result<AboutContent> {
    let updated = sqlx::query_as::<_, AboutContent>(
        r#"
        UPDATE about_content
        SET
            founder_image = $1,
            founder_image_url = $2,
            studio_image = $3,
            studio_image_url = $4,
            updated_at = NOW()
        WHERE id = $5
        RETURNING *
        "#,
    )
    .bind(&content.founder_image)
    .bind(&content.founder_image_url)
    .bind(&content.studio_image)
    .bind(&content.studio_image_url)
    .bind(content.id)
    .fetch_one(pool)
    .await?;

    Ok(updated)
}
