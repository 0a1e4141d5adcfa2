use anyhow::Result;
use chrono::{Local, NaiveDate};

use crate::error::invalid_input;

pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_reference_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| invalid_input("invalid date format: expected YYYY-MM-DD"))
}
