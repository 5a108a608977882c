//! v1 Lookup handlers.
//!
//! `GET /api/v1/lookup` answers a direct question with a single sentence.
//! `GET /api/v1/suggestions` lists every matching person for inline pickers.

use axum::extract::{Query, State};

use crate::api::v1::dto::{LookupQuery, LookupResponse, Suggestion, SuggestionsResponse};
use crate::api::v1::response::{ApiError, ApiResponse};
use crate::api::AppState;
use crate::error::{DeadOrAliveError, Result};
use crate::render::Renderer;

fn require_term(q: &str) -> Result<&str> {
    if q.trim().is_empty() {
        return Err(DeadOrAliveError::Validation(
            "Query cannot be empty".to_string(),
        ));
    }
    Ok(q)
}

/// `GET /api/v1/lookup?q=`
///
/// Lookup failures are rendered into `message` and still return 200.
#[utoipa::path(
    get,
    path = "/api/v1/lookup",
    tag = "lookup",
    operation_id = "lookup.single",
    params(LookupQuery),
    responses(
        (status = 200, description = "Rendered answer", body = LookupResponse),
        (status = 400, description = "Empty query", body = ApiError),
    )
)]
pub async fn lookup(
    State(state): State<AppState>,
    Query(query): Query<LookupQuery>,
) -> ApiResponse<LookupResponse> {
    let term = match require_term(&query.q) {
        Ok(term) => term,
        Err(e) => return ApiResponse::from(e),
    };

    let outcome = state.lookup.resolve_single(term).await;
    let message = state.renderer.reply(term, &outcome);

    ApiResponse::success(LookupResponse {
        message,
        result: outcome.ok().map(Into::into),
    })
}

/// `GET /api/v1/suggestions?q=`
///
/// Never fails for a lookup problem: an empty query or any upstream failure
/// yields an empty list.
#[utoipa::path(
    get,
    path = "/api/v1/suggestions",
    tag = "lookup",
    operation_id = "lookup.suggestions",
    params(LookupQuery),
    responses(
        (status = 200, description = "Matching people, most relevant first", body = SuggestionsResponse),
    )
)]
pub async fn suggestions(
    State(state): State<AppState>,
    Query(query): Query<LookupQuery>,
) -> ApiResponse<SuggestionsResponse> {
    if query.q.is_empty() {
        return ApiResponse::success(SuggestionsResponse {
            suggestions: Vec::new(),
        });
    }

    let results = state.lookup.resolve_suggestions(&query.q).await;
    let suggestions: Vec<Suggestion> = Renderer::suggestions(&results)
        .into_iter()
        .map(Suggestion::from)
        .collect();

    ApiResponse::success(SuggestionsResponse { suggestions })
}
