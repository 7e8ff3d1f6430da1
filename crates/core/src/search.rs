//! Text matching and pagination helpers shared by the listing views.
//!
//! This module lives in `core` (zero internal deps) so it can be used by both
//! the API/repository layer and the in-memory listing engine.

// ---------------------------------------------------------------------------
// Pagination defaults
// ---------------------------------------------------------------------------

/// Default number of catalog rows fetched per listing request.
pub const DEFAULT_LIST_LIMIT: i64 = 100;

/// Maximum number of catalog rows fetched per listing request.
pub const MAX_LIST_LIMIT: i64 = 500;

/// Default page size for admin submission listings.
pub const DEFAULT_SUBMISSION_LIMIT: i64 = 50;

/// Maximum page size for admin submission listings.
pub const MAX_SUBMISSION_LIMIT: i64 = 200;

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

// ---------------------------------------------------------------------------
// Text matching
// ---------------------------------------------------------------------------

/// Normalize a search needle: trim surrounding whitespace and lowercase.
///
/// Returns `None` for empty or whitespace-only input, which callers treat as
/// "no constraint".
pub fn normalize_needle(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Case-insensitive substring containment. `needle` must already be lowercase.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Case-insensitive equality.
pub fn eq_ci(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// `true` if any field contains the (lowercase) needle.
pub fn any_field_contains<'a, I>(fields: I, needle: &str) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    fields.into_iter().any(|f| contains_ci(f, needle))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
