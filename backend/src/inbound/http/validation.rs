//! Shared validation helpers for inbound HTTP adapters.
//!
//! Path segments arrive as strings so malformed identifiers produce the
//! standard error body instead of Actix's plain-text extractor error.

use crate::domain::Error;

/// Parse an integer identifier from a path segment.
pub(crate) fn parse_id<T>(raw: &str, field: &'static str) -> Result<T, Error>
where
    T: From<i64>,
{
    raw.trim()
        .parse::<i64>()
        .map(T::from)
        .map_err(|_| Error::invalid_request(format!("{field} must be an integer")))
}
