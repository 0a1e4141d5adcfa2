use crate::error::CoreError;
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// Calendar date of birth, entered and shown as `DD.MM.YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parses `DD.MM.YYYY`. Day and month may drop their leading zero; the
    /// year must be exactly four digits.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let invalid = || CoreError::InvalidBirthday(raw.to_string());
        let date = NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT).map_err(|_| invalid())?;

        // chrono's %Y takes any number of year digits.
        let year = raw.rsplit('.').next().unwrap_or_default();
        if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        Ok(Self(date))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl FromStr for Birthday {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::parse(raw)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
