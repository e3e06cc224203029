use http::StatusCode;
use std::fmt;

/// Why a fetch produced no questions. Callers of `TriviaClient::fetch` only see
/// absence; the variant is carried into the logs.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    InvalidUrl(String),
    Transport(#[from] reqwest::Error),
    UnexpectedStatus(StatusCode),
    MissingBody,
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::InvalidUrl(_) => "invalid-url",
            FetchError::Transport(_) => "transport-error",
            FetchError::UnexpectedStatus(_) => "bad-status-code",
            FetchError::MissingBody => "missing-body",
            FetchError::Decode(_) => "decode-error",
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&match self {
            FetchError::InvalidUrl(e) => format!("invalid request url: {}", e),
            FetchError::Transport(e) => format!("request failed: {}", e),
            FetchError::UnexpectedStatus(status) => {
                format!("unexpected response status {}", status)
            }
            FetchError::MissingBody => "response body is empty".to_string(),
            FetchError::Decode(e) => format!("could not decode questions: {}", e),
        })
    }
}
