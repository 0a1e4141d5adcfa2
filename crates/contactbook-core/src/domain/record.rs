use crate::domain::birthday::Birthday;
use crate::domain::name::ContactName;
use crate::domain::phone::Phone;
use crate::error::CoreError;
use std::fmt;

/// One contact: a fixed name, its phone numbers in entry order and an
/// optional birthday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: ContactName,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: &str) -> Result<Self, CoreError> {
        Ok(Self {
            name: ContactName::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn primary_phone(&self) -> Option<&Phone> {
        self.phones.first()
    }

    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    /// Appends a phone number. Duplicates are kept.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), CoreError> {
        self.phones.push(Phone::new(phone)?);
        Ok(())
    }

    /// Drops every entry equal to `phone`.
    pub fn remove_phone(&mut self, phone: &str) {
        self.phones.retain(|existing| existing.as_str() != phone);
    }

    /// Replaces the first entry equal to `old` with `new`.
    ///
    /// `new` is validated even when `old` is absent. Returns `false` and
    /// leaves the list untouched when no entry matches `old`.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<bool, CoreError> {
        let replacement = Phone::new(new)?;
        match self.phones.iter_mut().find(|existing| existing.as_str() == old) {
            Some(slot) => {
                *slot = replacement;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|existing| existing.as_str() == phone)
    }

    /// Sets the birthday from `DD.MM.YYYY`, replacing any previous value.
    pub fn add_birthday(&mut self, raw: &str) -> Result<(), CoreError> {
        self.birthday = Some(raw.parse::<Birthday>()?);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = self.birthday {
            write!(f, ", Birthday: {}", birthday)?;
        }
        Ok(())
    }
}
