use bytes::Bytes;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::MediaConfig;
use crate::services::media_service;

pub const CATEGORY_DRESSES: &str = "dresses";

/// Main category choices, value and display label.
pub const CATEGORY_CHOICES: &[(&str, &str)] = &[
    ("dresses", "Dresses"),
    ("tops", "Tops"),
    ("bottoms", "Bottoms"),
    ("outerwear", "Outerwear"),
    ("accessories", "Accessories"),
];

/// Dress type choices (subcategory for dresses). The empty value means
/// "not applicable".
pub const DRESS_TYPE_CHOICES: &[(&str, &str)] = &[
    ("", "Not Applicable"),
    ("kente", "Kente Dress"),
    ("ankara", "Ankara Dress"),
    ("kaba_slit", "Kaba & Slit"),
    ("african_print", "African Print Dress"),
    ("dashiki", "Dashiki Dress"),
    ("maxi", "Maxi Dress"),
    ("midi", "Midi Dress"),
    ("mini", "Mini Dress"),
    ("bodycon", "Bodycon Dress"),
    ("a_line", "A-Line Dress"),
    ("wrap", "Wrap Dress"),
    ("shift", "Shift Dress"),
    ("peplum", "Peplum Dress"),
    ("mermaid", "Mermaid Dress"),
    ("ball_gown", "Ball Gown"),
    ("evening_gown", "Evening Gown"),
    ("cocktail", "Cocktail Dress"),
    ("wedding", "Wedding Dress"),
    ("bridesmaid", "Bridesmaid Dress"),
    ("casual", "Casual Dress"),
    ("office", "Office Dress"),
    ("custom", "Custom Design"),
];

pub fn dress_type_label(value: &str) -> &'static str {
    DRESS_TYPE_CHOICES
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, label)| *label)
        .unwrap_or("")
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub category: String,
    pub dress_type: String,
    pub description: String,
    pub price: Decimal,
    pub image: Option<String>,
    pub image_url: Option<String>,
    pub video: Option<String>,
    pub video_url: Option<String>,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
}

/// A product row plus the single authoritative URL for each media asset.
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    #[serde(flatten)]
    pub product: Product,
    pub image_display_url: Option<String>,
    pub video_display_url: Option<String>,
    pub dress_type_label: &'static str,
}

impl ProductResponse {
    pub fn new(product: Product, media: &MediaConfig) -> Self {
        let image_display_url = media_service::resolve(
            product.image_url.as_deref(),
            product.image.as_deref(),
            &media.url_base,
        );
        let video_display_url = media_service::resolve(
            product.video_url.as_deref(),
            product.video.as_deref(),
            &media.url_base,
        );
        let dress_type_label = dress_type_label(&product.dress_type);

        Self {
            product,
            image_display_url,
            video_display_url,
            dress_type_label,
        }
    }
}

/// A file received in a multipart field.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub data: Bytes,
}

/// Parsed dress upload/edit form. `price` stays raw text until validation.
#[derive(Debug, Default)]
pub struct DressForm {
    pub name: String,
    pub price: String,
    pub description: String,
    pub dress_type: String,
    pub is_available: bool,
    pub image: Option<UploadedFile>,
    pub video: Option<UploadedFile>,
}
