use crate::domain::{Phone, Record};
use crate::rules::{weekday_name, UpcomingBirthdays};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDto {
    pub name: String,
    pub phones: Vec<String>,
    pub birthday: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthdayBucketDto {
    pub weekday: String,
    pub names: Vec<String>,
}

impl From<&Record> for ContactDto {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name().to_string(),
            phones: record.phones().iter().map(Phone::to_string).collect(),
            birthday: record.birthday().map(|birthday| birthday.to_string()),
        }
    }
}

pub fn birthday_buckets_to_dto(upcoming: &UpcomingBirthdays) -> Vec<BirthdayBucketDto> {
    upcoming
        .buckets()
        .iter()
        .map(|bucket| BirthdayBucketDto {
            weekday: weekday_name(bucket.weekday).to_string(),
            names: bucket.names.clone(),
        })
        .collect()
}
