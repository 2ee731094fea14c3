//! Survey field definitions

use crate::state::Topic;

/// How a field collects its value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free-form single-line text
    Text,
    /// Free-form multi-line text
    Multiline,
    /// Numeric text (digits, sign, decimal point)
    Number,
    /// One of a fixed option set
    Select(&'static [&'static str]),
}

const TOPIC_OPTIONS: &[&str] = &["Technology", "Health", "Education"];
const LANGUAGE_OPTIONS: &[&str] = &["JavaScript", "Python", "Java", "C#"];
const EXERCISE_OPTIONS: &[&str] = &["Daily", "Weekly", "Monthly", "Rarely"];
const DIET_OPTIONS: &[&str] = &["Vegetarian", "Vegan", "Non-Vegetarian"];
const QUALIFICATION_OPTIONS: &[&str] = &["High School", "Bachelor's", "Master's", "PhD"];

/// Every scalar field the survey collects, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FullName,
    Email,
    SurveyTopic,
    FavoriteLanguage,
    YearsExperience,
    ExerciseFrequency,
    DietPreference,
    HighestQualification,
    FieldOfStudy,
    Feedback,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::FullName,
        Field::Email,
        Field::SurveyTopic,
        Field::FavoriteLanguage,
        Field::YearsExperience,
        Field::ExerciseFrequency,
        Field::DietPreference,
        Field::HighestQualification,
        Field::FieldOfStudy,
        Field::Feedback,
    ];

    /// Wire name, used in the submission payload
    pub fn name(&self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::SurveyTopic => "surveyTopic",
            Self::FavoriteLanguage => "favoriteLanguage",
            Self::YearsExperience => "yearsExperience",
            Self::ExerciseFrequency => "exerciseFrequency",
            Self::DietPreference => "dietPreference",
            Self::HighestQualification => "highestQualification",
            Self::FieldOfStudy => "fieldOfStudy",
            Self::Feedback => "feedback",
        }
    }

    /// Label shown on the field block
    pub fn label(&self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Email => "Email",
            Self::SurveyTopic => "Survey Topic",
            Self::FavoriteLanguage => "Favorite Programming Language",
            Self::YearsExperience => "Years of Experience",
            Self::ExerciseFrequency => "Exercise Frequency",
            Self::DietPreference => "Diet Preference",
            Self::HighestQualification => "Highest Qualification",
            Self::FieldOfStudy => "Field of Study",
            Self::Feedback => "Feedback",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::FullName | Self::Email | Self::FieldOfStudy => FieldKind::Text,
            Self::SurveyTopic => FieldKind::Select(TOPIC_OPTIONS),
            Self::FavoriteLanguage => FieldKind::Select(LANGUAGE_OPTIONS),
            Self::YearsExperience => FieldKind::Number,
            Self::ExerciseFrequency => FieldKind::Select(EXERCISE_OPTIONS),
            Self::DietPreference => FieldKind::Select(DIET_OPTIONS),
            Self::HighestQualification => FieldKind::Select(QUALIFICATION_OPTIONS),
            Self::Feedback => FieldKind::Multiline,
        }
    }

    /// Fields rendered and navigated for the given topic selection.
    /// Hidden fields keep their values; they are only skipped here.
    pub fn visible_for(topic: Option<Topic>) -> Vec<Field> {
        let mut fields = vec![Field::FullName, Field::Email, Field::SurveyTopic];
        match topic {
            Some(Topic::Technology) => {
                fields.extend([Field::FavoriteLanguage, Field::YearsExperience]);
            }
            Some(Topic::Health) => {
                fields.extend([Field::ExerciseFrequency, Field::DietPreference]);
            }
            Some(Topic::Education) => {
                fields.extend([Field::HighestQualification, Field::FieldOfStudy]);
            }
            None => {}
        }
        fields.push(Field::Feedback);
        fields
    }
}
