use std::env::{self, VarError};
use std::num::ParseIntError;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://opentdb.com/api.php";

const BASE_URL_VAR: &str = "TRIVIA_BASE_URL";
const TIMEOUT_VAR: &str = "TRIVIA_TIMEOUT_SECS";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("TRIVIA_TIMEOUT_SECS must be a whole number of seconds: {0}")]
    InvalidTimeout(#[from] ParseIntError),
    #[error("{0} is not valid unicode")]
    NotUnicode(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriviaConfig {
    pub base_url: String,
    /// Applies to the whole request, connect through body. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for TriviaConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
        }
    }
}

impl TriviaConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(e) = dotenv::dotenv() {
            tracing::debug!(".env file not loaded ({}), using env variables", e);
        }

        Self::from_lookup(|key| env::var(key))
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let mut config = Self::default();

        if let Some(base_url) = read_var(&lookup, BASE_URL_VAR)? {
            config.base_url = base_url;
        }

        if let Some(secs) = read_var(&lookup, TIMEOUT_VAR)? {
            config.timeout = match secs.trim().parse::<u64>()? {
                0 => None,
                secs => Some(Duration::from_secs(secs)),
            };
        }

        Ok(config)
    }
}

fn read_var<F>(lookup: &F, key: &'static str) -> Result<Option<String>, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    match lookup(key) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(key)),
    }
}
