//! Sign-up payload and field identifiers

use super::field::InputType;
use serde::{Deserialize, Serialize};

/// Identifies one of the four sign-up inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    OrganisationalNumber,
    PersonalIdentityNumber,
    Email,
    PhoneNumber,
}

impl FieldId {
    /// All fields in display order
    pub const ALL: [FieldId; 4] = [
        FieldId::OrganisationalNumber,
        FieldId::PersonalIdentityNumber,
        FieldId::Email,
        FieldId::PhoneNumber,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::OrganisationalNumber => "ORGANISATIONAL NUMBER",
            Self::PersonalIdentityNumber => "PERSONAL IDENTITY NUMBER - AUTHORISED TO SIGN:",
            Self::Email => "EMAIL ADDRESS",
            Self::PhoneNumber => "PHONE NUMBER",
        }
    }

    pub fn input_type(&self) -> InputType {
        match self {
            Self::OrganisationalNumber | Self::PersonalIdentityNumber => InputType::Text,
            Self::Email => InputType::Email,
            Self::PhoneNumber => InputType::Tel,
        }
    }
}

/// Complete sign-up submission. Only built when every field is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpData {
    pub organisational_number: String,
    pub personal_identity_number: String,
    pub email: String,
    pub phone_number: String,
}
