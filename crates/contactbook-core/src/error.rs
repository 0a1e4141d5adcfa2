use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid name: {0:?}")]
    InvalidName(String),
    #[error("invalid phone number: {0:?}")]
    InvalidPhone(String),
    #[error("invalid birthday: {0:?} (expected DD.MM.YYYY)")]
    InvalidBirthday(String),
    #[error("invalid birthday window days: {0}")]
    InvalidWindowDays(i64),
}
