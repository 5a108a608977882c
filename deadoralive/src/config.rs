use serde::Deserialize;
use std::env;

pub const DEFAULT_WIKIDATA_API_URL: &str = "https://www.wikidata.org/w/api.php";
pub const DEFAULT_ISSUE_TRACKER_URL: &str = "https://github.com/weiran/dead-or-alive-bot/issues";

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

/// Reads an optional string variable, treating an empty value as unset.
fn env_non_empty(var: &str) -> Option<String> {
    env::var(var).ok().filter(|value| !value.trim().is_empty())
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub wikidata: WikidataConfig,
    pub lookup: LookupConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Connection settings for the Wikidata action API.
#[derive(Debug, Clone, Deserialize)]
pub struct WikidataConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    /// Number of search hits kept as candidates, in upstream relevance order.
    pub max_candidates: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LookupConfig {
    /// Upper bound for the whole entity fan-out of one request. `0` disables it.
    pub timeout_secs: u64,
    pub overrides_path: Option<String>,
    pub issue_tracker_url: String,
}

impl Default for WikidataConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_WIKIDATA_API_URL.to_string(),
            user_agent: format!("deadoralive/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: 10,
            max_candidates: 5,
        }
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 15,
            overrides_path: None,
            issue_tracker_url: DEFAULT_ISSUE_TRACKER_URL.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let wikidata_defaults = WikidataConfig::default();
        let lookup_defaults = LookupConfig::default();

        Self {
            server: ServerConfig {
                host: env::var("DOA_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env_or("DOA_PORT", 3000),
            },
            wikidata: WikidataConfig {
                base_url: env_non_empty("WIKIDATA_API_URL").unwrap_or(wikidata_defaults.base_url),
                user_agent: env_non_empty("WIKIDATA_USER_AGENT")
                    .unwrap_or(wikidata_defaults.user_agent),
                timeout_secs: parse_env_or("WIKIDATA_TIMEOUT", wikidata_defaults.timeout_secs),
                max_candidates: parse_env_or(
                    "WIKIDATA_MAX_CANDIDATES",
                    wikidata_defaults.max_candidates,
                ),
            },
            lookup: LookupConfig {
                timeout_secs: parse_env_or("DOA_LOOKUP_TIMEOUT_SECS", lookup_defaults.timeout_secs),
                overrides_path: env_non_empty("DOA_OVERRIDES_PATH"),
                issue_tracker_url: env_non_empty("DOA_ISSUE_TRACKER_URL")
                    .unwrap_or(lookup_defaults.issue_tracker_url),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }
}
