mod api;
mod dashboard;
mod health;
mod pages;

use std::path::Path;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::AppState;

pub fn create_router(media_root: &Path) -> Router<AppState> {
    Router::new()
        // Public pages
        .route("/", get(pages::home))
        .route("/collection/", get(pages::collection))
        .route("/about/", get(pages::about))
        .route("/contact/", get(pages::contact))
        .route("/product/{slug}/", get(pages::product_detail))
        // Dashboard
        .route(
            "/dashboard/upload-dress/",
            get(dashboard::upload_dress_page).post(dashboard::upload_dress),
        )
        .route("/dashboard/manage-dresses/", get(dashboard::manage_dresses))
        .route(
            "/dashboard/edit-dress/{id}/",
            get(dashboard::edit_dress_page).post(dashboard::edit_dress),
        )
        .route(
            "/dashboard/toggle-dress/{id}/",
            get(dashboard::manage_redirect).post(dashboard::toggle_dress),
        )
        .route(
            "/dashboard/delete-dress/{id}/",
            get(dashboard::manage_redirect).post(dashboard::delete_dress),
        )
        .route(
            "/dashboard/edit-about/",
            get(dashboard::edit_about_page).post(dashboard::edit_about),
        )
        // JSON API
        .route("/api/products/", get(api::product_list))
        .route("/api/contact/", post(api::contact_create))
        // Ambient
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .nest_service("/media", ServeDir::new(media_root))
}
