//! Strongly-typed value objects used by the client registry.
//!
//! Records themselves stay plain data so that a store can be pre-seeded
//! verbatim; the wrappers here are the gate every value must pass before the
//! service layer admits it through create or update.
use std::fmt::{Display, Formatter};
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Length of a South African identity number.
pub const SA_ID_NUMBER_LEN: usize = 13;

/// Zero-based position of the citizenship digit.
const CITIZENSHIP_DIGIT_POS: usize = 11;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Identity number is not 13 ASCII digits.
    #[error("id number must be 13 decimal digits")]
    MalformedIdNumber,
    /// Twelfth digit of the identity number is neither `8` nor `9`.
    #[error("invalid citizenship digit `{0}`")]
    InvalidCitizenshipDigit(char),
}

/// South African identity number that passed the format check.
///
/// The check is structural only: 13 decimal digits with the digit at
/// position 11 equal to `8` or `9`. The Luhn checksum is not verified.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct SaIdNumber(String);

impl SaIdNumber {
    /// Validates the raw value without trimming or normalizing it.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let value = value.into();
        let bytes = value.as_bytes();

        if bytes.len() != SA_ID_NUMBER_LEN || !bytes.iter().all(u8::is_ascii_digit) {
            return Err(TypeConstraintError::MalformedIdNumber);
        }

        match bytes[CITIZENSHIP_DIGIT_POS] {
            b'8' | b'9' => Ok(Self(value)),
            other => Err(TypeConstraintError::InvalidCitizenshipDigit(char::from(other))),
        }
    }

    /// Returns `true` when `value` would be accepted by [`SaIdNumber::new`].
    pub fn is_valid(value: &str) -> bool {
        Self::new(value).is_ok()
    }

    /// Borrow the identity number as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the owned inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Deref for SaIdNumber {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for SaIdNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for SaIdNumber {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for SaIdNumber {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SaIdNumber> for String {
    fn from(value: SaIdNumber) -> Self {
        value.0
    }
}

/// Wrapper for strings that carry at least one non-whitespace character.
///
/// Unlike [`SaIdNumber`] the original value is kept untouched; only the
/// blank check looks at the trimmed form.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NonBlankString(String);

impl NonBlankString {
    /// Rejects empty or whitespace-only inputs.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(value))
    }

    /// Borrow the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper returning the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for NonBlankString {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for NonBlankString {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
