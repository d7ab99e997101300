//! Slug derivation and the uniqueness loop. Slugs are assigned once when a
//! product is first saved and never regenerated on rename, so detail URLs
//! stay stable.

use std::future::Future;

use crate::error::Result;

/// Generate a URL-safe slug from a display name.
///
/// Converts to lowercase, replaces non-alphanumeric runs with single
/// hyphens, and trims leading/trailing hyphens.
pub fn slugify(name: &str) -> String {
    let lowered: String = name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();

    let mut result = String::with_capacity(lowered.len());
    let mut prev_hyphen = false;
    for c in lowered.chars() {
        if c == '-' {
            if !prev_hyphen {
                result.push('-');
            }
            prev_hyphen = true;
        } else {
            result.push(c);
            prev_hyphen = false;
        }
    }

    result.trim_matches('-').to_string()
}

/// Walk `base`, `base-1`, `base-2`, ... until `exists` reports a free
/// candidate. The `exists` check must already exclude the record's own id so
/// a re-save of an unchanged name cannot collide with itself.
pub async fn generate_slug<F, Fut>(name: &str, mut exists: F) -> Result<String>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<bool>>,
{
    let base = slugify(name);
    let mut candidate = base.clone();
    let mut counter = 1u32;

    while exists(candidate.clone()).await? {
        candidate = format!("{}-{}", base, counter);
        counter += 1;
    }

    Ok(candidate)
}
