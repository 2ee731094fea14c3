//! HTTP client for the follow-up question endpoint
//!
//! The endpoint is a read-only collaborator: `GET {base}/questions?topic=X`
//! returning an ordered JSON list of `{id, title}` records.

use super::traits::QuestionSource;
use crate::config::SurveyTuiConfig;
use crate::state::{Question, Topic};
use anyhow::Result;
use async_trait::async_trait;
use thiserror::Error;

/// Default endpoint base
const DEFAULT_BASE_URL: &str = "https://api.example.com";

/// Failure modes of a question fetch
#[derive(Debug, Error)]
pub enum QuestionError {
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("endpoint returned {0}")]
    Status(reqwest::StatusCode),
    #[error("invalid question payload: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Client for the question endpoint
pub struct QuestionClient {
    http: reqwest::Client,
    base_url: String,
}

impl QuestionClient {
    /// Resolution order: env override, config file, built-in default
    pub fn new(config: &SurveyTuiConfig) -> Self {
        let base_url = std::env::var("SURVEY_QUESTIONS_URL")
            .ok()
            .or_else(|| config.questions_url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    async fn get_questions(&self, topic: Topic) -> Result<Vec<Question>, QuestionError> {
        let url = format!("{}/questions", self.base_url.trim_end_matches('/'));

        let response = self
            .http
            .get(&url)
            .query(&[("topic", topic.label())])
            .send()
            .await
            .map_err(QuestionError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(QuestionError::Status(status));
        }

        response.json().await.map_err(QuestionError::Decode)
    }
}

#[async_trait]
impl QuestionSource for QuestionClient {
    async fn fetch_questions(&self, topic: Topic) -> Result<Vec<Question>> {
        Ok(self.get_questions(topic).await?)
    }
}
