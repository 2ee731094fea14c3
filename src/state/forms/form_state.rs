//! The form-state engine: value tracking, error derivation, submission gating

use super::field::Field;
use super::validate::{validate, ErrorMap};
use super::values::SurveyValues;

/// Validation function injected into the engine
pub type Validator = fn(&SurveyValues) -> ErrorMap;

/// Result of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every rule passed; the caller performs the success handoff
    Accepted,
    /// The error map is non-empty; nothing leaves the form
    Rejected,
}

/// Single source of truth for form values, derived errors, and submission
/// gating. Also tracks which visible field (or the trailing submit row)
/// holds the cursor.
#[derive(Debug, Clone)]
pub struct SurveyForm {
    pub values: SurveyValues,
    pub errors: ErrorMap,
    pub is_submitting: bool,
    validator: Validator,
    active_field_index: usize,
}

impl SurveyForm {
    pub fn new() -> Self {
        Self::with_validator(validate)
    }

    /// Build an engine around an arbitrary rule set
    pub fn with_validator(validator: Validator) -> Self {
        Self {
            values: SurveyValues::default(),
            errors: ErrorMap::new(),
            is_submitting: false,
            validator,
            active_field_index: 0,
        }
    }

    /// Set a field's raw value and recompute the full error map.
    /// Validation is always total; there is no per-field shortcut.
    pub fn handle_change(&mut self, field: Field, raw_value: String) {
        self.values.set(field, raw_value);
        self.errors = (self.validator)(&self.values);
        // A topic change can shrink the visible list out from under the cursor
        self.active_field_index = self.active_field_index.min(self.field_count() - 1);
    }

    /// Merge a programmatic update without re-validating. Used by the
    /// question fetch to splice in its results.
    pub fn set_values(&mut self, update: impl FnOnce(&mut SurveyValues)) {
        update(&mut self.values);
    }

    /// Run a submit attempt over the current values
    pub fn handle_submit(&mut self) -> SubmitOutcome {
        self.is_submitting = true;
        self.errors = (self.validator)(&self.values);
        let outcome = if self.errors.is_empty() {
            SubmitOutcome::Accepted
        } else {
            SubmitOutcome::Rejected
        };
        self.is_submitting = false;
        outcome
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Fields currently rendered, in display order
    pub fn visible_fields(&self) -> Vec<Field> {
        Field::visible_for(self.values.topic())
    }

    /// Visible fields plus the submit row
    pub fn field_count(&self) -> usize {
        self.visible_fields().len() + 1
    }

    /// The field under the cursor; `None` on the submit row
    pub fn active_field(&self) -> Option<Field> {
        self.visible_fields().get(self.active_field_index).copied()
    }

    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == self.field_count() - 1
    }

    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % self.field_count();
    }

    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = self.field_count() - 1;
        } else {
            self.active_field_index -= 1;
        }
    }
}

impl Default for SurveyForm {
    fn default() -> Self {
        Self::new()
    }
}
