//! DTOs exposed by the directory API endpoints.

use serde::Serialize;

use crate::dto::advocate::AdvocateDto;

/// Response payload of `GET /api/advocates`: every record, wrapped in a
/// single `data` field.
#[derive(Debug, Serialize)]
pub struct AdvocatesResponse {
    pub data: Vec<AdvocateDto>,
}
