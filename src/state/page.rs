//! Page-level state for the sign-up screen

use super::forms::{FieldId, SignUpData, SignUpForm};
use crate::config::SignUpConfig;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;

/// Header language selector options. Selection is local and changes nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "US")]
    Us,
    #[serde(rename = "CH")]
    Ch,
}

impl Language {
    pub fn next(&self) -> Self {
        match self {
            Self::Us => Self::Ch,
            Self::Ch => Self::Us,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Us => "US",
            Self::Ch => "CH",
        }
    }
}

/// Focusable controls, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    LanguageSelector,
    Contact,
    Field(FieldId),
    SignButton,
}

impl Default for Focus {
    fn default() -> Self {
        Focus::Field(FieldId::OrganisationalNumber)
    }
}

impl Focus {
    const ORDER: [Focus; 7] = [
        Focus::LanguageSelector,
        Focus::Contact,
        Focus::Field(FieldId::OrganisationalNumber),
        Focus::Field(FieldId::PersonalIdentityNumber),
        Focus::Field(FieldId::Email),
        Focus::Field(FieldId::PhoneNumber),
        Focus::SignButton,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let pos = self.position();
        if pos == 0 {
            Self::ORDER[Self::ORDER.len() - 1]
        } else {
            Self::ORDER[pos - 1]
        }
    }

    /// The form field under focus, if any
    pub fn field(self) -> Option<FieldId> {
        match self {
            Focus::Field(id) => Some(id),
            _ => None,
        }
    }
}

/// Reasons the sign action can be refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignError {
    #[error("please check form again; maybe some of fields is invalid or clear")]
    IncompleteForm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Failure,
}

/// Modal message shown after the sign action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    fn signed(data: &SignUpData) -> Self {
        // Serializing a struct of plain strings cannot fail
        let payload = serde_json::to_string(data).unwrap_or_default();
        Self {
            kind: NotificationKind::Success,
            message: format!("signed{payload}"),
        }
    }

    fn failed(error: &SignError) -> Self {
        Self {
            kind: NotificationKind::Failure,
            message: error.to_string(),
        }
    }
}

/// State of the whole sign-up page: the form, the header controls, and the
/// last complete submission reported by the form.
#[derive(Debug)]
pub struct SignUpPage {
    pub config: SignUpConfig,
    pub form: SignUpForm,
    pub language: Language,
    pub focus: Focus,
    latest: Rc<RefCell<Option<SignUpData>>>,
    notification: Option<Notification>,
}

impl SignUpPage {
    pub fn new(config: SignUpConfig) -> Self {
        let latest = Rc::new(RefCell::new(None));
        let mut form = SignUpForm::new();
        let sink = Rc::clone(&latest);
        form.subscribe(move |data: &SignUpData| {
            *sink.borrow_mut() = Some(data.clone());
        });

        Self {
            language: config.default_language,
            config,
            form,
            focus: Focus::default(),
            latest,
            notification: None,
        }
    }

    /// Most recently reported complete form, if the form ever became complete
    pub fn latest_submission(&self) -> Option<SignUpData> {
        self.latest.borrow().clone()
    }

    /// What the sign action would submit right now
    pub fn submission(&self) -> Result<SignUpData, SignError> {
        self.latest_submission().ok_or(SignError::IncompleteForm)
    }

    /// Attempt to sign and raise the resulting notification
    pub fn sign(&mut self) -> &Notification {
        let notification = match self.submission() {
            Ok(data) => {
                tracing::debug!(
                    "Agreement signed for organisation {}",
                    data.organisational_number
                );
                Notification::signed(&data)
            }
            Err(error) => {
                tracing::debug!("Sign attempted with incomplete form");
                Notification::failed(&error)
            }
        };
        self.notification.insert(notification)
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn has_notification(&self) -> bool {
        self.notification.is_some()
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    pub fn cycle_language(&mut self) {
        self.language = self.language.next();
        tracing::debug!("Language selector set to {}", self.language.label());
    }

    /// Placeholder for the messenger contact control
    pub fn contact(&self) {
        tracing::debug!("Contact control activated; no contact channel is wired up");
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Type a character into the focused field
    pub fn input_char(&mut self, c: char) {
        if let Some(id) = self.focus.field() {
            self.form.push_char(id, c);
        }
    }

    /// Remove the last character of the focused field
    pub fn backspace(&mut self) {
        if let Some(id) = self.focus.field() {
            self.form.pop_char(id);
        }
    }

    /// Clear the focused field
    pub fn clear_field(&mut self) {
        if let Some(id) = self.focus.field() {
            self.form.update(id, String::new());
        }
    }
}

impl Default for SignUpPage {
    fn default() -> Self {
        Self::new(SignUpConfig::default())
    }
}
