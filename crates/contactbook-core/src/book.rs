use crate::domain::Record;
use crate::error::CoreError;
use crate::rules::birthdays::{
    upcoming_birthdays, validate_window_days, UpcomingBirthdays, DEFAULT_WINDOW_DAYS,
};
use chrono::NaiveDate;

/// In-memory contacts keyed by name, iterated in insertion order.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `record` under its name. An existing record with the same name
    /// is replaced and keeps its position.
    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name().as_str()) {
            Some(index) => self.records[index] = record,
            None => self.records.push(record),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records
            .iter()
            .find(|record| record.name().as_str() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records
            .iter_mut()
            .find(|record| record.name().as_str() == name)
    }

    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.position(name).map(|index| self.records.remove(index))
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Birthdays in the seven days starting at `today`, grouped by weekday.
    pub fn get_upcoming_birthdays(&self, today: NaiveDate) -> UpcomingBirthdays {
        upcoming_birthdays(self.records(), today, DEFAULT_WINDOW_DAYS)
    }

    pub fn get_upcoming_birthdays_within(
        &self,
        today: NaiveDate,
        window_days: i64,
    ) -> Result<UpcomingBirthdays, CoreError> {
        let days = validate_window_days(window_days)?;
        Ok(upcoming_birthdays(self.records(), today, days))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|record| record.name().as_str() == name)
    }
}
