//! Form domain layer
//!
//! Field validation state, the sign-up payload, and the aggregator that
//! reports the complete form to its observers.

mod field;
mod form_state;
mod sign_up_data;

pub use field::{is_non_empty, InputStatus, InputType, ValidatedField};
pub use form_state::{SignUpForm, SignUpObserver};
pub use sign_up_data::{FieldId, SignUpData};
