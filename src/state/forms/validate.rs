//! Topic-conditional validation rules

use super::field::Field;
use super::values::SurveyValues;
use crate::state::Topic;
use std::collections::HashMap;

/// Field-keyed validation messages; absence means the field is valid
pub type ErrorMap = HashMap<Field, String>;

/// Validate the whole value map. Pure; re-run in full on every change.
/// Fields outside the selected topic group are never checked, so stale
/// values in hidden fields cannot block submission.
pub fn validate(values: &SurveyValues) -> ErrorMap {
    let mut errors = ErrorMap::new();

    if values.full_name.is_empty() {
        errors.insert(Field::FullName, "Full Name is required".to_string());
    }

    // Emptiness first so the required message wins over the shape check
    if values.email.is_empty() {
        errors.insert(Field::Email, "Email is required".to_string());
    } else if !email_has_shape(&values.email) {
        errors.insert(Field::Email, "Email is invalid".to_string());
    }

    if values.survey_topic.is_empty() {
        errors.insert(Field::SurveyTopic, "Survey Topic is required".to_string());
    } else if values.topic().is_none() {
        errors.insert(Field::SurveyTopic, "Survey Topic is invalid".to_string());
    }

    match values.topic() {
        Some(Topic::Technology) => {
            if values.favorite_language.is_empty() {
                errors.insert(
                    Field::FavoriteLanguage,
                    "Favorite Language is required".to_string(),
                );
            }
            if !is_positive_number(&values.years_experience) {
                errors.insert(
                    Field::YearsExperience,
                    "Years of Experience must be greater than 0".to_string(),
                );
            }
        }
        Some(Topic::Health) => {
            if values.exercise_frequency.is_empty() {
                errors.insert(
                    Field::ExerciseFrequency,
                    "Exercise Frequency is required".to_string(),
                );
            }
            if values.diet_preference.is_empty() {
                errors.insert(
                    Field::DietPreference,
                    "Diet Preference is required".to_string(),
                );
            }
        }
        Some(Topic::Education) => {
            if values.highest_qualification.is_empty() {
                errors.insert(
                    Field::HighestQualification,
                    "Highest Qualification is required".to_string(),
                );
            }
            if values.field_of_study.is_empty() {
                errors.insert(Field::FieldOfStudy, "Field of Study is required".to_string());
            }
        }
        None => {}
    }

    if values.feedback.chars().count() < 50 {
        errors.insert(
            Field::Feedback,
            "Feedback must be at least 50 characters".to_string(),
        );
    }

    errors
}

/// `local@domain.tld` shape: a non-whitespace character before an `@`,
/// followed by a contiguous non-whitespace run with an interior dot.
fn email_has_shape(email: &str) -> bool {
    email.char_indices().any(|(i, c)| {
        c == '@'
            && email[..i]
                .chars()
                .next_back()
                .is_some_and(|prev| !prev.is_whitespace())
            && domain_has_shape(&email[i + 1..])
    })
}

fn domain_has_shape(rest: &str) -> bool {
    let run: Vec<char> = rest.chars().take_while(|c| !c.is_whitespace()).collect();
    run.len() >= 3 && run[1..run.len() - 1].contains(&'.')
}

fn is_positive_number(raw: &str) -> bool {
    raw.trim().parse::<f64>().is_ok_and(|n| n > 0.0)
}
