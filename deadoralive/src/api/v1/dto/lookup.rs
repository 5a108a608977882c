//! Lookup and suggestion DTOs for the v1 API.

use serde::{Deserialize, Serialize};

use crate::models::ResultModel;
use crate::render::SuggestionArticle;

/// Query parameters shared by `GET /v1/lookup` and `GET /v1/suggestions`.
#[derive(Debug, Clone, Deserialize, utoipa::IntoParams)]
pub struct LookupQuery {
    /// Name to look up, e.g. `steve jobs`.
    #[serde(default)]
    pub q: String,
}

/// Computed facts about the person a lookup settled on.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonResult {
    pub name: String,
    /// Current age, or age at death. Absent when the birth date is unknown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    pub has_dob: bool,
    pub is_dead: bool,
    /// e.g. `October 5th 2011`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_death: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_message: Option<String>,
}

impl From<ResultModel> for PersonResult {
    fn from(result: ResultModel) -> Self {
        Self {
            name: result.name,
            age: result.age,
            has_dob: result.has_dob,
            is_dead: result.is_dead,
            date_of_death: result.date_of_death,
            url: result.url,
            custom_message: result.custom_message,
        }
    }
}

/// Response body for `GET /v1/lookup`.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct LookupResponse {
    /// Reply text: the rendered sentence, or the rendered failure.
    pub message: String,
    /// Present only when the lookup succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<PersonResult>,
}

/// One selectable suggestion.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub id: String,
    pub title: String,
    pub description: String,
    pub message_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl From<SuggestionArticle> for Suggestion {
    fn from(article: SuggestionArticle) -> Self {
        Self {
            id: article.id,
            title: article.title,
            description: article.description,
            message_text: article.message_text,
            url: article.url,
        }
    }
}

/// Response body for `GET /v1/suggestions`.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<Suggestion>,
}
