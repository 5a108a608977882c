//! Chat message DTOs for the v1 API.

use serde::{Deserialize, Serialize};

/// Request body for `POST /v1/messages`.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct MessageRequest {
    /// Raw message text, e.g. `/dead steve jobs` or `steve jobs`.
    pub text: String,
}

/// Response body for `POST /v1/messages`.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct MessageResponse {
    /// Absent when the message is not addressed to this service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply: Option<String>,
}
