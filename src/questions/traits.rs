//! Trait abstraction for the question endpoint to enable mocking in tests

use crate::state::{Question, Topic};
use anyhow::Result;
use async_trait::async_trait;

/// Trait for the follow-up question source, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Fetch the follow-up questions for a topic, in display order
    async fn fetch_questions(&self, topic: Topic) -> Result<Vec<Question>>;
}
