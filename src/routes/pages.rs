//! Public page endpoints. Markup is a frontend concern; these return the
//! JSON context each page renders from.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};

use crate::{
    error::{AppError, Result},
    models::{AboutResponse, ProductResponse},
    queries::product_queries,
    services::about_service,
    AppState,
};

pub async fn home() -> Json<Value> {
    Json(json!({ "page": "home" }))
}

pub async fn collection(State(state): State<AppState>) -> Result<Json<Vec<ProductResponse>>> {
    let products = product_queries::list_available(&state.db).await?;

    let products = products
        .into_iter()
        .map(|p| ProductResponse::new(p, &state.media))
        .collect();

    Ok(Json(products))
}

pub async fn about(State(state): State<AppState>) -> Result<Json<AboutResponse>> {
    let content = about_service::get_or_create_about(&state.db).await?;

    Ok(Json(AboutResponse::new(content, &state.media)))
}

pub async fn contact() -> Json<Value> {
    Json(json!({ "page": "contact" }))
}

#[derive(Debug, Serialize)]
pub struct ProductDetail {
    pub product: ProductResponse,
    pub related_products: Vec<ProductResponse>,
}

pub async fn product_detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ProductDetail>> {
    let product = product_queries::find_by_slug(&state.db, &slug)
        .await?
        .ok_or(AppError::NotFound("Product not found".to_string()))?;

    let related =
        product_queries::related(&state.db, &product, product_queries::RELATED_LIMIT).await?;

    Ok(Json(ProductDetail {
        product: ProductResponse::new(product, &state.media),
        related_products: related
            .into_iter()
            .map(|p| ProductResponse::new(p, &state.media))
            .collect(),
    }))
}
