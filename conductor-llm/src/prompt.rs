//! Fixed prompt and sampling parameters for the minimal conductor.
//!
//! These are not configurable: every exchange uses the same instruction
//! and the same sampling settings.

/// System instruction attached to every query.
pub const ASSISTANT_SYSTEM: &str =
    "You are a helpful AI assistant. Answer questions clearly and concisely.";

/// Sampling temperature for every request.
pub const TEMPERATURE: f32 = 0.7;

/// Upper bound on generated tokens per answer.
pub const MAX_TOKENS: u32 = 1000;

/// Characters of a query kept in log previews.
pub const PREVIEW_CHARS: usize = 100;

/// First [`PREVIEW_CHARS`] characters of `query`, cut on a char boundary.
#[must_use]
pub fn preview(query: &str) -> &str {
    match query.char_indices().nth(PREVIEW_CHARS) {
        Some((idx, _)) => &query[..idx],
        None => query,
    }
}
