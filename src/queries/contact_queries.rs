use sqlx::PgPool;

use crate::{
    error::Result,
    models::{ContactMessage, ContactMessageRequest},
};

pub async fn insert_message(pool: &PgPool, req: &ContactMessageRequest) -> Result<ContactMessage> {
    let message = sqlx::query_as::<_, ContactMessage>(
        r#"
        INSERT INTO contact_messages (name, email, message)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(req.name.trim())
    .bind(req.email.trim())
    .bind(req.message.trim())
    .fetch_one(pool)
    .await?;

    Ok(message)
}
