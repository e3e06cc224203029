use super::error::FetchError;
use super::model::{Question, QuestionBatch};
use crate::config::TriviaConfig;

use http::StatusCode;
use reqwest::{Client, Url};
use std::sync::Arc;
use tracing::instrument;

const QUESTION_AMOUNT: &str = "10";

/// Fetches batches of trivia questions. Cloning is cheap and clones share the
/// underlying connection pool.
#[derive(Clone, Debug)]
pub struct TriviaClient {
    client: Client,
    base_url: Arc<String>,
}

impl TriviaClient {
    pub fn init(config: &TriviaConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: Arc::new(config.base_url.clone()),
        })
    }

    pub fn request_url(&self, category: &str, difficulty: &str) -> Result<Url, FetchError> {
        Url::parse_with_params(
            &self.base_url,
            &[
                ("amount", QUESTION_AMOUNT),
                ("category", category),
                ("difficulty", difficulty),
            ],
        )
        .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", self.base_url, e)))
    }

    /// Returns the questions in server order, or `None` if anything went wrong.
    /// The reason is logged but not returned; use `try_fetch` to get it.
    #[instrument(skip(self))]
    pub async fn fetch(&self, category: &str, difficulty: &str) -> Option<Vec<Question>> {
        match self.try_fetch(category, difficulty).await {
            Ok(batch) => {
                tracing::debug!("received {} questions", batch.len());
                Some(batch.into_questions())
            }
            Err(e) => {
                tracing::warn!(kind = e.kind(), "failed to fetch questions: {}", e);
                None
            }
        }
    }

    pub async fn try_fetch(
        &self,
        category: &str,
        difficulty: &str,
    ) -> Result<QuestionBatch, FetchError> {
        let url = self.request_url(category, difficulty)?;

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_builder() {
                FetchError::InvalidUrl(e.to_string())
            } else {
                FetchError::Transport(e)
            }
        })?;

        tracing::info!("GET {}: {}", response.url(), response.status());

        match response.status() {
            StatusCode::OK => {
                let body = response.bytes().await?;

                if body.is_empty() {
                    return Err(FetchError::MissingBody);
                }

                Ok(serde_json::from_slice(&body)?)
            }
            status => Err(FetchError::UnexpectedStatus(status)),
        }
    }
}
