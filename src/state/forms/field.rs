//! Form field value objects

use std::fmt;

/// Visual indicator derived from a field's touched/valid flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputStatus {
    Correct,
    Error,
}

/// Input-type hint carried by a field. Hints are displayed only, never enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Text,
    Email,
    Tel,
}

impl InputType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Tel => "tel",
        }
    }
}

/// A value paired with its touched and validity flags.
///
/// Validity is recomputed by the predicate on every [`ValidatedField::update`],
/// and an update always marks the field as touched. There is no way back to
/// the untouched state.
#[derive(Clone)]
pub struct ValidatedField<T> {
    value: T,
    touched: bool,
    valid: bool,
    validate: fn(&T) -> bool,
}

impl<T> ValidatedField<T> {
    /// Create an untouched field, evaluating the initial value right away
    pub fn new(initial: T, validate: fn(&T) -> bool) -> Self {
        let valid = validate(&initial);
        Self {
            value: initial,
            touched: false,
            valid,
            validate,
        }
    }

    /// Replace the value, recompute validity and mark the field touched
    pub fn update(&mut self, value: T) {
        self.valid = (self.validate)(&value);
        self.value = value;
        self.touched = true;
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Status indicator for rendering.
    ///
    /// An untouched invalid field shows nothing; only a touched invalid one is
    /// flagged. A valid field that was never touched also maps to `Error`.
    pub fn status(&self) -> Option<InputStatus> {
        if self.valid && self.touched {
            return Some(InputStatus::Correct);
        }
        if !self.valid && !self.touched {
            return None;
        }
        Some(InputStatus::Error)
    }
}

impl ValidatedField<String> {
    /// Append a character to the value
    pub fn push_char(&mut self, c: char) {
        let mut value = self.value.clone();
        value.push(c);
        self.update(value);
    }

    /// Remove the last character from the value
    pub fn pop_char(&mut self) {
        let mut value = self.value.clone();
        value.pop();
        self.update(value);
    }
}

impl<T: fmt::Debug> fmt::Debug for ValidatedField<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedField")
            .field("value", &self.value)
            .field("touched", &self.touched)
            .field("valid", &self.valid)
            .finish()
    }
}

/// The only rule the sign-up form applies
#[allow(clippy::ptr_arg)]
pub fn is_non_empty(value: &String) -> bool {
    !value.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn empty_field() -> ValidatedField<String> {
        ValidatedField::new(String::new(), is_non_empty)
    }

    mod construction {
        use super::*;

        #[test]
        fn test_new_is_untouched() {
            let field = empty_field();
            assert!(!field.is_touched());
        }

        #[test]
        fn test_new_evaluates_initial_value() {
            assert!(!empty_field().is_valid());

            let field = ValidatedField::new("prefilled".to_string(), is_non_empty);
            assert!(field.is_valid());
            assert!(!field.is_touched());
        }
    }

    mod update {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_update_replaces_value_and_revalidates() {
            let mut field = empty_field();
            field.update("123".to_string());
            assert_eq!(field.value(), "123");
            assert!(field.is_valid());
            assert!(field.is_touched());
        }

        #[test]
        fn test_update_to_empty_is_touched_and_invalid() {
            let mut field = empty_field();
            field.update("1".to_string());
            field.update(String::new());
            assert!(field.is_touched());
            assert!(!field.is_valid());
        }

        #[test]
        fn test_update_with_same_value_still_touches() {
            let mut field = empty_field();
            field.update(String::new());
            assert!(field.is_touched());
            field.update(String::new());
            assert!(field.is_touched());
            assert_eq!(field.value(), "");
        }

        #[test]
        fn test_works_for_non_string_values() {
            let mut field = ValidatedField::new(0u32, |v| *v > 0);
            assert_eq!(field.status(), None);
            field.update(3);
            assert_eq!(field.status(), Some(InputStatus::Correct));
        }
    }

    mod status {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_untouched_invalid_has_no_indicator() {
            assert_eq!(empty_field().status(), None);
        }

        #[test]
        fn test_touched_valid_is_correct() {
            let mut field = empty_field();
            field.update("a".to_string());
            assert_eq!(field.status(), Some(InputStatus::Correct));
        }

        #[test]
        fn test_touched_invalid_is_error() {
            let mut field = empty_field();
            field.update(String::new());
            assert_eq!(field.status(), Some(InputStatus::Error));
        }

        #[test]
        fn test_untouched_valid_is_error() {
            let field = ValidatedField::new("x".to_string(), is_non_empty);
            assert_eq!(field.status(), Some(InputStatus::Error));
        }

        #[test]
        fn test_type_then_clear_is_error() {
            let mut field = empty_field();
            field.push_char('7');
            field.pop_char();
            assert_eq!(field.value(), "");
            assert_eq!(field.status(), Some(InputStatus::Error));
        }
    }

    mod keystrokes {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_push_char_appends() {
            let mut field = empty_field();
            field.push_char('4');
            field.push_char('2');
            assert_eq!(field.value(), "42");
        }

        #[test]
        fn test_pop_char_on_empty_touches() {
            let mut field = empty_field();
            field.pop_char();
            assert!(field.is_touched());
            assert_eq!(field.status(), Some(InputStatus::Error));
        }
    }

    #[test]
    fn test_is_non_empty() {
        assert!(is_non_empty(&"x".to_string()));
        assert!(is_non_empty(&" ".to_string()));
        assert!(!is_non_empty(&String::new()));
    }

    #[test]
    fn test_input_type_labels() {
        assert_eq!(InputType::Text.label(), "text");
        assert_eq!(InputType::Email.label(), "email");
        assert_eq!(InputType::Tel.label(), "tel");
    }
}
