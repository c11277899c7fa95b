//! Sign-up form aggregation

use super::field::{is_non_empty, ValidatedField};
use super::sign_up_data::{FieldId, SignUpData};
use std::fmt;

/// Receives the aggregate whenever the form is complete.
///
/// Any `FnMut(&SignUpData)` closure is an observer.
#[cfg_attr(test, mockall::automock)]
pub trait SignUpObserver {
    fn on_complete(&mut self, data: &SignUpData);
}

impl<F> SignUpObserver for F
where
    F: FnMut(&SignUpData),
{
    fn on_complete(&mut self, data: &SignUpData) {
        self(data)
    }
}

/// The four sign-up fields plus the observers interested in the complete form.
///
/// Every update re-evaluates completeness. When all four fields are valid the
/// freshly built [`SignUpData`] goes to every observer, on each update, with no
/// memory of earlier emissions. Observers are never told about an incomplete
/// form.
pub struct SignUpForm {
    organisational_number: ValidatedField<String>,
    personal_identity_number: ValidatedField<String>,
    email: ValidatedField<String>,
    phone_number: ValidatedField<String>,
    observers: Vec<Box<dyn SignUpObserver>>,
}

impl SignUpForm {
    pub fn new() -> Self {
        Self {
            organisational_number: ValidatedField::new(String::new(), is_non_empty),
            personal_identity_number: ValidatedField::new(String::new(), is_non_empty),
            email: ValidatedField::new(String::new(), is_non_empty),
            phone_number: ValidatedField::new(String::new(), is_non_empty),
            observers: Vec::new(),
        }
    }

    /// Register an observer. A form that is already complete notifies it
    /// immediately.
    pub fn subscribe(&mut self, observer: impl SignUpObserver + 'static) {
        let mut observer = Box::new(observer);
        if let Some(data) = self.data() {
            observer.on_complete(&data);
        }
        self.observers.push(observer);
    }

    pub fn field(&self, id: FieldId) -> &ValidatedField<String> {
        match id {
            FieldId::OrganisationalNumber => &self.organisational_number,
            FieldId::PersonalIdentityNumber => &self.personal_identity_number,
            FieldId::Email => &self.email,
            FieldId::PhoneNumber => &self.phone_number,
        }
    }

    fn field_mut(&mut self, id: FieldId) -> &mut ValidatedField<String> {
        match id {
            FieldId::OrganisationalNumber => &mut self.organisational_number,
            FieldId::PersonalIdentityNumber => &mut self.personal_identity_number,
            FieldId::Email => &mut self.email,
            FieldId::PhoneNumber => &mut self.phone_number,
        }
    }

    /// Replace a field's value
    pub fn update(&mut self, id: FieldId, value: String) {
        self.field_mut(id).update(value);
        self.notify_if_complete();
    }

    pub fn push_char(&mut self, id: FieldId, c: char) {
        self.field_mut(id).push_char(c);
        self.notify_if_complete();
    }

    pub fn pop_char(&mut self, id: FieldId) {
        self.field_mut(id).pop_char();
        self.notify_if_complete();
    }

    pub fn is_complete(&self) -> bool {
        FieldId::ALL.iter().all(|id| self.field(*id).is_valid())
    }

    /// The aggregate, present only while every field is valid
    pub fn data(&self) -> Option<SignUpData> {
        if !self.is_complete() {
            return None;
        }
        Some(SignUpData {
            organisational_number: self.organisational_number.value().clone(),
            personal_identity_number: self.personal_identity_number.value().clone(),
            email: self.email.value().clone(),
            phone_number: self.phone_number.value().clone(),
        })
    }

    fn notify_if_complete(&mut self) {
        let Some(data) = self.data() else {
            return;
        };
        tracing::debug!(
            "Sign-up form complete, notifying {} observer(s)",
            self.observers.len()
        );
        for observer in &mut self.observers {
            observer.on_complete(&data);
        }
    }
}

impl Default for SignUpForm {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SignUpForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignUpForm")
            .field("organisational_number", &self.organisational_number)
            .field("personal_identity_number", &self.personal_identity_number)
            .field("email", &self.email)
            .field("phone_number", &self.phone_number)
            .field("observers", &self.observers.len())
            .finish()
    }
}
