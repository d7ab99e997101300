mod app_config;
mod s3_config;

pub use app_config::{
    AppConfig, CorsConfig, DatabaseConfig, MediaConfig, S3Config, ServerConfig,
};
pub use s3_config::*;
