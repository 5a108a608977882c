use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Normalized facts about one person, either extracted from an entity or
/// supplied by an override entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonModel {
    pub name: String,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub date_of_death: Option<NaiveDate>,
    #[serde(default)]
    pub url: Option<String>,
    /// Replaces every computed sentence when set.
    #[serde(default)]
    pub custom_message: Option<String>,
}

impl PersonModel {
    pub fn has_dob(&self) -> bool {
        self.date_of_birth.is_some()
    }

    pub fn is_dead(&self) -> bool {
        self.date_of_death.is_some()
    }
}

/// Presentation-ready record for a single response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultModel {
    pub name: String,
    /// Absent when the birth date is unknown.
    pub age: Option<u32>,
    pub has_dob: bool,
    pub is_dead: bool,
    /// Death date rendered as e.g. `April 1st 1976`.
    pub date_of_death: Option<String>,
    pub url: Option<String>,
    pub custom_message: Option<String>,
}
