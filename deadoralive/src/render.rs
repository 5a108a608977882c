//! User-facing text for lookup outcomes.
//!
//! Sentences use Markdown links so chat clients render the person's name as a
//! link to their article.

use serde::Serialize;

use crate::config::LookupConfig;
use crate::error::{DeadOrAliveError, Result};
use crate::models::ResultModel;

/// One selectable entry of an inline suggestion list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionArticle {
    pub id: String,
    pub title: String,
    pub description: String,
    pub message_text: String,
    pub url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Renderer {
    issue_tracker_url: String,
}

impl Renderer {
    pub fn new(issue_tracker_url: impl Into<String>) -> Self {
        Self {
            issue_tracker_url: issue_tracker_url.into(),
        }
    }

    pub fn from_config(config: &LookupConfig) -> Self {
        Self::new(config.issue_tracker_url.clone())
    }

    /// Sentence for a successful lookup.
    pub fn sentence(result: &ResultModel) -> String {
        if let Some(message) = &result.custom_message {
            return message.clone();
        }

        let subject = match &result.url {
            Some(url) => format!("[{}]({})", result.name, url),
            None => result.name.clone(),
        };

        let age = result.age.filter(|_| result.has_dob);

        match (result.is_dead, age) {
            (true, Some(age)) => format!(
                "{subject} died aged {age} on {}.",
                result.date_of_death.as_deref().unwrap_or_default()
            ),
            (true, None) => format!(
                "{subject} died on {}.",
                result.date_of_death.as_deref().unwrap_or_default()
            ),
            (false, Some(age)) => format!("{subject} is alive and kicking at {age} years old."),
            (false, None) => format!("{subject} is alive."),
        }
    }

    /// Message shown when a single lookup fails.
    pub fn error_message(&self, search_term: &str, error: &DeadOrAliveError) -> String {
        match error {
            DeadOrAliveError::NotFound(_) => {
                format!("Couldn't find a person named {search_term}.")
            }
            DeadOrAliveError::Upstream(_) => format!(
                "Oops! The bot seems to be having issues - please open an issue at {} (include your search term) and I'll take a look 👀😁",
                self.issue_tracker_url
            ),
            other => other.to_string(),
        }
    }

    /// Final reply for a single lookup, whatever its outcome.
    pub fn reply(&self, search_term: &str, outcome: &Result<ResultModel>) -> String {
        match outcome {
            Ok(result) => Self::sentence(result),
            Err(error) => {
                if !(error.is_not_found() || error.is_upstream()) {
                    tracing::error!(search_term, error = %error, "Lookup failed");
                }
                self.error_message(search_term, error)
            }
        }
    }

    pub fn suggestions(results: &[ResultModel]) -> Vec<SuggestionArticle> {
        results
            .iter()
            .enumerate()
            .map(|(idx, result)| {
                let sentence = Self::sentence(result);
                SuggestionArticle {
                    id: idx.to_string(),
                    title: result.name.clone(),
                    description: sentence.clone(),
                    message_text: sentence,
                    url: result.url.clone(),
                }
            })
            .collect()
    }
}
