use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ContactMessage {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct ContactMessageRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessageRequest {
    /// Collects every violated rule instead of stopping at the first one.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push("Name is required.".to_string());
        }
        if self.email.trim().is_empty() {
            errors.push("Email is required.".to_string());
        } else if !is_valid_email(self.email.trim()) {
            errors.push("Enter a valid email address.".to_string());
        }
        if self.message.trim().is_empty() {
            errors.push("Message is required.".to_string());
        }

        errors
    }
}

/// Structural email check: one `@`, non-empty local part, dotted domain,
/// no whitespace. Stricter validation is out of scope.
pub fn is_valid_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
