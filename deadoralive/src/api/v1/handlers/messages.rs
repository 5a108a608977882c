//! v1 Chat message handler.
//!
//! Accepts the text of a chat message and returns the reply a bot should
//! send, if any.

use axum::extract::State;

use crate::api::v1::dto::{MessageRequest, MessageResponse};
use crate::api::v1::response::{ApiError, ApiResponse};
use crate::api::AppState;
use crate::commands::{parse_message, MessageIntent};

/// `POST /api/v1/messages`
#[utoipa::path(
    post,
    path = "/api/v1/messages",
    tag = "messages",
    operation_id = "messages.reply",
    request_body = MessageRequest,
    responses(
        (status = 200, description = "Reply to send, if any", body = MessageResponse),
        (status = 400, description = "Invalid request", body = ApiError),
    )
)]
pub async fn reply_to_message(
    State(state): State<AppState>,
    axum::Json(req): axum::Json<MessageRequest>,
) -> ApiResponse<MessageResponse> {
    let term = match parse_message(&req.text) {
        MessageIntent::Lookup(term) if !term.trim().is_empty() => term,
        MessageIntent::Lookup(_) | MessageIntent::Ignore => {
            return ApiResponse::success(MessageResponse { reply: None });
        }
    };

    let outcome = state.lookup.resolve_single(&term).await;
    let reply = state.renderer.reply(&term, &outcome);

    ApiResponse::success(MessageResponse { reply: Some(reply) })
}
