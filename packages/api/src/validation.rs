// ABOUTME: Identifier validation for API request handlers
// ABOUTME: Parses path and body UUIDs into typed ids or fixed 400 errors

use tracing::warn;
use uuid::Uuid;

use worktrack_core::Field;

use crate::error::ApiError;

/// Parses a path identifier. `missing` answers an empty segment, `invalid` a malformed one.
pub fn parse_path_id(
    raw: &str,
    missing: &'static str,
    invalid: &'static str,
) -> Result<Uuid, ApiError> {
    if raw.is_empty() {
        return Err(ApiError::BadRequest(missing));
    }
    Uuid::parse_str(raw).map_err(|e| {
        warn!(id = %raw, error = %e, "Invalid path identifier");
        ApiError::BadRequest(invalid)
    })
}

/// Parses an optional UUID body field; absent stays absent.
pub fn parse_uuid_field(
    field: Field<String>,
    name: &'static str,
    invalid: &'static str,
) -> Result<Field<Uuid>, ApiError> {
    field.try_map(|raw| {
        Uuid::parse_str(&raw).map_err(|e| {
            warn!(field = name, value = %raw, error = %e, "Invalid UUID in request body");
            ApiError::BadRequest(invalid)
        })
    })
}
