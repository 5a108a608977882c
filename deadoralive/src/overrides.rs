//! Fixed answers for search terms that should never reach Wikidata.
//!
//! The table is built once at startup and shared read-only. Lookups fold the
//! search term to lowercase and compare it exactly against each alias as
//! written, so aliases are expected to be stored in lowercase. Entries are
//! tried in order and the first match wins.

use chrono::NaiveDate;
use serde::Deserialize;
use std::path::Path;

use crate::config::LookupConfig;
use crate::error::{DeadOrAliveError, Result};
use crate::models::PersonModel;

/// One alias or a set of aliases, as written in the override file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Aliases {
    One(String),
    Many(Vec<String>),
}

impl Aliases {
    fn matches(&self, folded_term: &str) -> bool {
        match self {
            Aliases::One(alias) => alias == folded_term,
            Aliases::Many(aliases) => aliases.iter().any(|alias| alias == folded_term),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OverrideEntry {
    pub aliases: Aliases,
    #[serde(flatten)]
    pub person: PersonModel,
}

#[derive(Debug, Clone, Default)]
pub struct OverrideTable {
    entries: Vec<OverrideEntry>,
}

impl OverrideTable {
    pub fn new(entries: Vec<OverrideEntry>) -> Self {
        Self { entries }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Table shipped with the binary, used when no override file is configured.
    pub fn builtin() -> Self {
        Self::new(vec![
            OverrideEntry {
                aliases: Aliases::One("god".to_string()),
                person: PersonModel {
                    name: "God".to_string(),
                    date_of_birth: None,
                    date_of_death: None,
                    url: Some("https://en.wikipedia.org/wiki/God_is_dead".to_string()),
                    custom_message: Some(
                        "[God](https://en.wikipedia.org/wiki/God_is_dead) is dead, according to Nietzsche."
                            .to_string(),
                    ),
                },
            },
            OverrideEntry {
                aliases: Aliases::Many(vec![
                    "the queen".to_string(),
                    "queen elizabeth".to_string(),
                    "queen elizabeth ii".to_string(),
                ]),
                person: PersonModel {
                    name: "Elizabeth II".to_string(),
                    date_of_birth: NaiveDate::from_ymd_opt(1926, 4, 21),
                    date_of_death: NaiveDate::from_ymd_opt(2022, 9, 8),
                    url: Some("https://en.wikipedia.org/wiki/Elizabeth_II".to_string()),
                    custom_message: None,
                },
            },
        ])
    }

    /// Parse a JSON array of override entries.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<OverrideEntry> = serde_json::from_str(json)
            .map_err(|e| DeadOrAliveError::Config(format!("Invalid override table: {e}")))?;
        Ok(Self::new(entries))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            DeadOrAliveError::Config(format!(
                "Failed to read override file {}: {e}",
                path.display()
            ))
        })?;
        Self::from_json(&json)
    }

    /// The configured override file, or the built-in table when none is set.
    pub fn from_config(config: &LookupConfig) -> Result<Self> {
        match &config.overrides_path {
            Some(path) => {
                let table = Self::load(path)?;
                tracing::info!(path = %path, entries = table.len(), "Loaded override table");
                Ok(table)
            }
            None => Ok(Self::builtin()),
        }
    }

    pub fn match_override(&self, search_term: &str) -> Option<&OverrideEntry> {
        let folded = search_term.to_lowercase();
        self.entries.iter().find(|entry| entry.aliases.matches(&folded))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
