//! Read-only product listing and contact submission, JSON in and out.

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::{AppError, Result},
    models::{ContactMessage, ContactMessageRequest, Product},
    queries::{contact_queries, product_queries},
    AppState,
};

/// Every field of every available product, newest first.
pub async fn product_list(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = product_queries::list_available(&state.db).await?;

    Ok(Json(products))
}

pub async fn contact_create(
    State(state): State<AppState>,
    Json(payload): Json<ContactMessageRequest>,
) -> Result<(StatusCode, Json<ContactMessage>)> {
    let errors = payload.validate();
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let message = contact_queries::insert_message(&state.db, &payload).await?;

    Ok((StatusCode::CREATED, Json(message)))
}
