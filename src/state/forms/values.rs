//! The survey value map

use super::field::Field;
use crate::state::{Question, Topic};
use serde::{Deserialize, Serialize};

/// Every value the form collects. Scalar slots hold raw text exactly as
/// entered; `additional_questions` is populated only by the topic fetch.
/// All slots exist for the lifetime of the form, hidden or not.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SurveyValues {
    pub full_name: String,
    pub email: String,
    pub survey_topic: String,
    pub favorite_language: String,
    pub years_experience: String,
    pub exercise_frequency: String,
    pub diet_preference: String,
    pub highest_qualification: String,
    pub field_of_study: String,
    pub feedback: String,
    pub additional_questions: Vec<Question>,
}

impl SurveyValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Email => &self.email,
            Field::SurveyTopic => &self.survey_topic,
            Field::FavoriteLanguage => &self.favorite_language,
            Field::YearsExperience => &self.years_experience,
            Field::ExerciseFrequency => &self.exercise_frequency,
            Field::DietPreference => &self.diet_preference,
            Field::HighestQualification => &self.highest_qualification,
            Field::FieldOfStudy => &self.field_of_study,
            Field::Feedback => &self.feedback,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::FullName => &mut self.full_name,
            Field::Email => &mut self.email,
            Field::SurveyTopic => &mut self.survey_topic,
            Field::FavoriteLanguage => &mut self.favorite_language,
            Field::YearsExperience => &mut self.years_experience,
            Field::ExerciseFrequency => &mut self.exercise_frequency,
            Field::DietPreference => &mut self.diet_preference,
            Field::HighestQualification => &mut self.highest_qualification,
            Field::FieldOfStudy => &mut self.field_of_study,
            Field::Feedback => &mut self.feedback,
        };
        *slot = value;
    }

    /// Parsed topic selection; `None` while unset or outside the
    /// enumerated set.
    pub fn topic(&self) -> Option<Topic> {
        Topic::parse(&self.survey_topic)
    }
}
