use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactName(String);

impl ContactName {
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        validate_name(raw)?;
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Accepts non-empty names made only of alphabetic characters.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.is_empty() || !name.chars().all(char::is_alphabetic) {
        return Err(CoreError::InvalidName(name.to_string()));
    }
    Ok(())
}
