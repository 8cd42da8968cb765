//! Shared OpenAPI schemas for the HTTP adapter.
//!
//! Domain types do not derive serde or `ToSchema`; response bodies live next
//! to their handlers and convert from domain values with `From`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned by every endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorSchema {
    /// HTTP status code repeated in the body.
    #[schema(example = 404)]
    pub code: u16,
    /// Human-readable message returned to clients.
    #[schema(example = "The product does not exist")]
    pub message: String,
}
