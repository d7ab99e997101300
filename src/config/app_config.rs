use crate::error::{AppError, Result};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
    pub media: MediaConfig,
    pub s3: Option<S3Config>,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_body_size: usize,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

/// Where locally stored uploads live on disk and the URL prefix they are
/// served under.
#[derive(Debug, Clone)]
pub struct MediaConfig {
    pub root: PathBuf,
    pub url_base: String,
}

/// Remote media store settings. Absent when S3_BUCKET is not set, in which
/// case every remote upload attempt fails immediately and files are kept
/// locally.
#[derive(Debug, Clone)]
pub struct S3Config {
    pub bucket: String,
    pub public_base_url: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()
                    .map_err(|_| AppError::ConfigError("Invalid PORT value".to_string()))?,
                max_body_size: env::var("MAX_BODY_SIZE")
                    .unwrap_or_else(|_| "52428800".to_string())
                    .parse()
                    .map_err(|_| AppError::ConfigError("Invalid MAX_BODY_SIZE value".to_string()))?,
            },
            database: DatabaseConfig {
                url: env::var("DB_URL")?,
                max_connections: env::var("DB_MAX_CONNECTIONS")
                    .unwrap_or_else(|_| "20".to_string())
                    .parse()
                    .map_err(|_| {
                        AppError::ConfigError("Invalid DB_MAX_CONNECTIONS value".to_string())
                    })?,
            },
            cors: CorsConfig {
                allowed_origins: env::var("FRONTEND_URL")?
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .collect(),
            },
            media: MediaConfig {
                root: PathBuf::from(env::var("MEDIA_ROOT").unwrap_or_else(|_| "media".to_string())),
                url_base: env::var("MEDIA_URL").unwrap_or_else(|_| "/media".to_string()),
            },
            s3: match env::var("S3_BUCKET") {
                Ok(bucket) => Some(S3Config {
                    public_base_url: env::var("S3_PUBLIC_URL").map_err(|_| {
                        AppError::ConfigError(
                            "S3_PUBLIC_URL must be set when S3_BUCKET is set".to_string(),
                        )
                    })?,
                    bucket,
                }),
                Err(_) => None,
            },
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
