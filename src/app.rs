use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::CorsLayer;

use crate::{
    config::{AppConfig, MediaConfig},
    database,
    error::Result,
    routes,
    services::upload_service::RemoteUploader,
};

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub uploader: Arc<RemoteUploader>,
    pub media: MediaConfig,
}

pub async fn build(config: &AppConfig) -> Result<Router> {
    let pool = database::create_pool(&config.database).await?;

    // Remote upload is a startup-time capability: configured means every
    // media file is pushed to S3 first, absent means every upload call
    // reports failure and files stay on local disk.
    let uploader = match &config.s3 {
        Some(s3) => {
            let client = crate::config::load_s3_client().await?;
            RemoteUploader::s3(client, s3.bucket.clone(), s3.public_base_url.clone())
        }
        None => {
            tracing::info!("S3_BUCKET not set, media uploads will be stored locally");
            RemoteUploader::Disabled
        }
    };

    let state = AppState {
        db: pool,
        uploader: Arc::new(uploader),
        media: config.media.clone(),
    };

    let allowed_origins: Vec<HeaderValue> = config
        .cors
        .allowed_origins
        .iter()
        .map(|origin| {
            origin.parse::<HeaderValue>().map_err(|_| {
                crate::error::AppError::ConfigError(format!("Invalid CORS origin: {}", origin))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([http::header::CONTENT_TYPE, http::header::AUTHORIZATION])
        .allow_origin(allowed_origins);

    let app = routes::create_router(&config.media.root)
        .layer(DefaultBodyLimit::max(config.server.max_body_size))
        .layer(cors)
        .with_state(state);

    Ok(app)
}
