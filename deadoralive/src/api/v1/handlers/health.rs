use axum::extract::State;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::v1::response::ApiResponse;

/// Health data returned inside the v1 envelope.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct HealthData {
    pub status: String,
    pub version: String,
    pub wikidata: WikidataStatus,
    pub overrides: OverridesStatus,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WikidataStatus {
    pub base_url: String,
    pub max_candidates: usize,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct OverridesStatus {
    pub entries: usize,
    /// `file` when loaded from `DOA_OVERRIDES_PATH`, otherwise `builtin`.
    pub source: String,
}

/// `GET /api/v1/health`
///
/// Reports configuration only; it does not call Wikidata.
#[utoipa::path(
    get,
    path = "/api/v1/health",
    tag = "health",
    responses(
        (status = 200, description = "Service health status", body = HealthData),
    )
)]
pub async fn health_check(State(state): State<AppState>) -> ApiResponse<HealthData> {
    let overrides = OverridesStatus {
        entries: state.lookup.overrides().len(),
        source: if state.config.lookup.overrides_path.is_some() {
            "file".to_string()
        } else {
            "builtin".to_string()
        },
    };

    ApiResponse::success(HealthData {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        wikidata: WikidataStatus {
            base_url: state.config.wikidata.base_url.clone(),
            max_candidates: state.config.wikidata.max_candidates,
        },
        overrides,
    })
}
