//! Staff-facing dress and About management. Admin access is gated upstream;
//! these handlers only carry the flow semantics.

use axum::{
    extract::{multipart::Field, Multipart, Path, Query, State},
    http::StatusCode,
    response::Redirect,
    Json,
};
use serde_json::{json, Value};

use crate::{
    error::{AppError, Result},
    models::{AboutForm, AboutResponse, DressForm, ProductResponse, UploadedFile, DRESS_TYPE_CHOICES},
    queries::product_queries::{self, ManageQuery},
    services::{about_service, dress_service},
    AppState,
};

const MANAGE_DRESSES_PATH: &str = "/dashboard/manage-dresses/";
const EDIT_ABOUT_PATH: &str = "/dashboard/edit-about/";

async fn field_text(field: Field<'_>) -> Result<String> {
    field
        .text()
        .await
        .map(|s| s.trim().to_string())
        .map_err(|e| AppError::BadRequest(e.to_string()))
}

async fn field_file(field: Field<'_>) -> Result<Option<UploadedFile>> {
    let file_name = field.file_name().unwrap_or("upload").to_string();
    let content_type = field.content_type().map(|s| s.to_string());
    let data = field
        .bytes()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    // Browsers submit an empty part for a file input left blank.
    if data.is_empty() {
        return Ok(None);
    }

    Ok(Some(UploadedFile {
        file_name,
        content_type,
        data,
    }))
}

async fn parse_dress_form(mut multipart: Multipart) -> Result<DressForm> {
    let mut form = DressForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "name" => form.name = field_text(field).await?,
            "price" => form.price = field_text(field).await?,
            "description" => form.description = field_text(field).await?,
            "dress_type" => form.dress_type = field_text(field).await?,
            "is_available" => {
                let value = field_text(field).await?;
                form.is_available = value == "on" || value == "true";
            }
            "image" => form.image = field_file(field).await?,
            "video" => form.video = field_file(field).await?,
            _ => {}
        }
    }

    Ok(form)
}

async fn parse_about_form(mut multipart: Multipart) -> Result<AboutForm> {
    let mut form = AboutForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "founder_image" => form.founder_image = field_file(field).await?,
            "studio_image" => form.studio_image = field_file(field).await?,
            _ => {}
        }
    }

    Ok(form)
}

pub async fn upload_dress_page(State(state): State<AppState>) -> Result<Json<Value>> {
    let recent =
        product_queries::recent_dresses(&state.db, product_queries::RECENT_LIMIT).await?;

    let recent: Vec<ProductResponse> = recent
        .into_iter()
        .map(|p| ProductResponse::new(p, &state.media))
        .collect();

    Ok(Json(json!({
        "dress_types": DRESS_TYPE_CHOICES,
        "recent_products": recent,
    })))
}

pub async fn upload_dress(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ProductResponse>)> {
    let form = parse_dress_form(multipart).await?;

    let product =
        dress_service::create_dress(&state.db, &state.uploader, &state.media, form).await?;

    Ok((
        StatusCode::CREATED,
        Json(ProductResponse::new(product, &state.media)),
    ))
}

pub async fn manage_dresses(
    State(state): State<AppState>,
    Query(params): Query<ManageQuery>,
) -> Result<Json<Value>> {
    let products = product_queries::manage_list(&state.db, &params).await?;
    let counts = product_queries::dress_counts(&state.db).await?;

    let products: Vec<ProductResponse> = products
        .into_iter()
        .map(|p| ProductResponse::new(p, &state.media))
        .collect();

    Ok(Json(json!({
        "products": products,
        "current_filter": params.filter.as_deref().unwrap_or(""),
        "search_query": params.search.as_deref().unwrap_or(""),
        "all_count": counts.all_count,
        "available_count": counts.available_count,
        "hidden_count": counts.hidden_count,
    })))
}

pub async fn edit_dress_page(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>> {
    let product = product_queries::find_dress_by_id(&state.db, id)
        .await?
        .ok_or(AppError::NotFound("Dress not found".to_string()))?;

    Ok(Json(json!({
        "product": ProductResponse::new(product, &state.media),
        "dress_types": DRESS_TYPE_CHOICES,
    })))
}

pub async fn edit_dress(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<Json<ProductResponse>> {
    let product = product_queries::find_dress_by_id(&state.db, id)
        .await?
        .ok_or(AppError::NotFound("Dress not found".to_string()))?;

    let form = parse_dress_form(multipart).await?;

    let updated =
        dress_service::update_dress(&state.db, &state.uploader, &state.media, product, form)
            .await?;

    Ok(Json(ProductResponse::new(updated, &state.media)))
}

/// Non-POST hits on toggle/delete land here and bounce back untouched.
pub async fn manage_redirect() -> Redirect {
    Redirect::to(MANAGE_DRESSES_PATH)
}

pub async fn toggle_dress(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Redirect> {
    let product = product_queries::find_by_id(&state.db, id)
        .await?
        .ok_or(AppError::NotFound("Product not found".to_string()))?;

    product_queries::set_availability(&state.db, id, !product.is_available).await?;

    let status = if product.is_available { "hidden" } else { "visible" };
    tracing::info!("\"{}\" is now {}", product.name, status);

    Ok(Redirect::to(MANAGE_DRESSES_PATH))
}

pub async fn delete_dress(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Redirect> {
    let product = product_queries::find_by_id(&state.db, id)
        .await?
        .ok_or(AppError::NotFound("Product not found".to_string()))?;

    product_queries::delete_product(&state.db, id).await?;

    tracing::info!("\"{}\" has been deleted", product.name);

    Ok(Redirect::to(MANAGE_DRESSES_PATH))
}

pub async fn edit_about_page(State(state): State<AppState>) -> Result<Json<AboutResponse>> {
    let content = about_service::get_or_create_about(&state.db).await?;

    Ok(Json(AboutResponse::new(content, &state.media)))
}

pub async fn edit_about(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Redirect> {
    let form = parse_about_form(multipart).await?;

    about_service::update_about(&state.db, &state.uploader, &state.media, form).await?;

    Ok(Redirect::to(EDIT_ABOUT_PATH))
}
