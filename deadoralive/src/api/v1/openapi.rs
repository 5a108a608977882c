use axum::Json;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use super::dto;
use super::handlers;
use super::response;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Dead or Alive API",
        version = "1.0.0",
        description = "Answers whether a person is dead or alive, using Wikidata.",
    ),
    paths(
        handlers::health::health_check,
        handlers::lookup::lookup,
        handlers::lookup::suggestions,
        handlers::messages::reply_to_message,
    ),
    components(schemas(
        // Response envelope
        response::ErrorCode,
        response::ApiError,
        // Lookup
        dto::lookup::PersonResult,
        dto::lookup::LookupResponse,
        dto::lookup::Suggestion,
        dto::lookup::SuggestionsResponse,
        // Messages
        dto::messages::MessageRequest,
        dto::messages::MessageResponse,
        // Health (handler-local types)
        handlers::health::HealthData,
        handlers::health::WikidataStatus,
        handlers::health::OverridesStatus,
    )),
    tags(
        (name = "health", description = "Health check"),
        (name = "lookup", description = "Single answers and suggestion lists"),
        (name = "messages", description = "Chat message replies"),
    ),
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn redoc_router<S: Clone + Send + Sync + 'static>() -> axum::Router<S> {
    Redoc::with_url("/docs", ApiDoc::openapi()).into()
}
