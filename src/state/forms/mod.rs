//! Form state management

mod field;
mod form_state;
mod validate;
mod values;

pub use field::{Field, FieldKind};
pub use form_state::{SubmitOutcome, SurveyForm};
pub use validate::{validate, ErrorMap};
pub use values::SurveyValues;
