//! Survey domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Survey topic, the discriminator for the conditional field groups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Technology,
    Health,
    Education,
}

impl Topic {
    pub const ALL: [Topic; 3] = [Topic::Technology, Topic::Health, Topic::Education];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Technology => "Technology",
            Self::Health => "Health",
            Self::Education => "Education",
        }
    }

    /// Parse the stored select value. `None` for the empty string or
    /// anything outside the enumerated set.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|topic| topic.label() == value)
    }
}

/// A follow-up question fetched for the selected topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u64,
    pub title: String,
}

/// The record handed off when a submission passes validation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveySubmission {
    pub submitted_at: DateTime<Utc>,
    pub values: super::SurveyValues,
}
