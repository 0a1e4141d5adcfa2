use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const PHONE_DIGITS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        validate_phone(raw)?;
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Accepts exactly ten ASCII decimal digits, with no formatting characters.
pub fn validate_phone(phone: &str) -> Result<(), CoreError> {
    if phone.len() != PHONE_DIGITS || !phone.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoreError::InvalidPhone(phone.to_string()));
    }
    Ok(())
}
