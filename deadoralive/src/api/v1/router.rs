use axum::{
    routing::{get, post},
    Router,
};

use crate::api::state::AppState;

use super::handlers;

pub fn v1_router() -> Router<AppState> {
    let lookup = Router::new()
        .route("/lookup", get(handlers::lookup::lookup))
        .route("/suggestions", get(handlers::lookup::suggestions))
        .route("/messages", post(handlers::messages::reply_to_message));

    let meta = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/openapi.json", get(super::openapi::openapi_json))
        .merge(super::openapi::redoc_router());

    Router::new().merge(meta).merge(lookup)
}
