//! Slug generation and collision disambiguation.

use portal_core::error::AppError;
use portal_core::result::AppResult;
use portal_database::repositories::portal::PortalStore;

/// Maximum length of a generated slug.
const MAX_SLUG_LEN: usize = 50;

/// Derive a URL-safe slug from a client name.
///
/// Lowercases the name, collapses every run of characters outside
/// `[a-z0-9]` into a single hyphen, strips leading/trailing hyphens, and
/// truncates to 50 characters. Idempotent.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }

    // All pushed characters are ASCII, so the byte index is a char
    // boundary. Truncation can expose a trailing hyphen again.
    slug.truncate(MAX_SLUG_LEN);
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Find a free suffixed slug after the bare slug collided.
///
/// Probes `base-1`, `base-2`, ... against the store until a candidate is
/// free, bounded by `max_attempts`. Exhausting the bound is an internal
/// error rather than an unbounded loop.
pub async fn unique_slug(
    name: &str,
    store: &dyn PortalStore,
    max_attempts: u32,
) -> AppResult<String> {
    let base = slugify(name);

    for counter in 1..=max_attempts {
        let candidate = format!("{base}-{counter}");
        if store.find_by_slug(&candidate).await?.is_none() {
            return Ok(candidate);
        }
    }

    Err(AppError::internal(format!(
        "Exhausted {max_attempts} slug candidates for base '{base}'"
    )))
}
