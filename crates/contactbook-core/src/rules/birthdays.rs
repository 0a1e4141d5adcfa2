use crate::domain::Record;
use crate::error::CoreError;
use crate::rules::dates::next_occurrence;
use chrono::{Datelike, NaiveDate, Weekday};
use std::fmt;

pub const DEFAULT_WINDOW_DAYS: i64 = 7;
pub const MAX_WINDOW_DAYS: i64 = 7;

pub fn validate_window_days(days: i64) -> Result<i64, CoreError> {
    if !(1..=MAX_WINDOW_DAYS).contains(&days) {
        return Err(CoreError::InvalidWindowDays(days));
    }
    Ok(days)
}

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekdayBucket {
    pub weekday: Weekday,
    pub names: Vec<String>,
}

/// Contact names grouped by the weekday their birthday is reported on.
///
/// Buckets keep the order in which their first contact was seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpcomingBirthdays {
    buckets: Vec<WeekdayBucket>,
}

impl UpcomingBirthdays {
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn buckets(&self) -> &[WeekdayBucket] {
        &self.buckets
    }

    pub fn names_on(&self, weekday: Weekday) -> Option<&[String]> {
        self.buckets
            .iter()
            .find(|bucket| bucket.weekday == weekday)
            .map(|bucket| bucket.names.as_slice())
    }

    fn push(&mut self, weekday: Weekday, name: &str) {
        match self.buckets.iter_mut().find(|bucket| bucket.weekday == weekday) {
            Some(bucket) => bucket.names.push(name.to_string()),
            None => self.buckets.push(WeekdayBucket {
                weekday,
                names: vec![name.to_string()],
            }),
        }
    }
}

impl fmt::Display for UpcomingBirthdays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, bucket) in self.buckets.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "{}: {}",
                weekday_name(bucket.weekday),
                bucket.names.join(", ")
            )?;
        }
        Ok(())
    }
}

/// Weekend days are reported on the following Monday.
fn reporting_day(weekday: Weekday) -> Weekday {
    match weekday {
        Weekday::Sat | Weekday::Sun => Weekday::Mon,
        other => other,
    }
}

/// Groups the birthdays falling within `window_days` of `today` (today
/// included) by reporting weekday.
pub fn upcoming_birthdays<'a>(
    records: impl IntoIterator<Item = &'a Record>,
    today: NaiveDate,
    window_days: i64,
) -> UpcomingBirthdays {
    let mut upcoming = UpcomingBirthdays::default();

    for record in records {
        let Some(birthday) = record.birthday() else {
            continue;
        };
        let Some(occurrence) = next_occurrence(birthday.month(), birthday.day(), today) else {
            continue;
        };

        let delta_days = (occurrence - today).num_days();
        if !(0..window_days).contains(&delta_days) {
            continue;
        }

        upcoming.push(reporting_day(occurrence.weekday()), record.name().as_str());
    }

    upcoming
}

#[cfg(test)]
mod tests {
    use super::{upcoming_birthdays, validate_window_days, DEFAULT_WINDOW_DAYS};
    use crate::domain::Record;
    use chrono::{NaiveDate, Weekday};

    // Wednesday.
    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
    }

    fn person(name: &str, birthday: Option<&str>) -> Record {
        let mut record = Record::new(name).unwrap();
        if let Some(raw) = birthday {
            record.add_birthday(raw).unwrap();
        }
        record
    }

    fn run(records: &[Record]) -> super::UpcomingBirthdays {
        upcoming_birthdays(records, today(), DEFAULT_WINDOW_DAYS)
    }

    #[test]
    fn weekday_birthday_keeps_its_day() {
        let result = run(&[person("John", Some("12.01.1990"))]);
        assert_eq!(result.names_on(Weekday::Fri), Some(&["John".to_string()][..]));
        assert_eq!(result.buckets().len(), 1);
    }

    #[test]
    fn weekend_birthdays_roll_to_monday() {
        let result = run(&[
            person("Sat", Some("13.01.1990")),
            person("Sun", Some("14.01.1985")),
        ]);
        assert_eq!(
            result.names_on(Weekday::Mon),
            Some(&["Sat".to_string(), "Sun".to_string()][..])
        );
        assert!(result.names_on(Weekday::Sat).is_none());
        assert!(result.names_on(Weekday::Sun).is_none());
    }

    #[test]
    fn window_includes_today_and_excludes_day_seven() {
        let result = run(&[
            person("Today", Some("10.01.2000")),
            person("Six", Some("16.01.2000")),
            person("Seven", Some("17.01.2000")),
            person("Eight", Some("18.01.2000")),
        ]);
        assert_eq!(result.names_on(Weekday::Wed), Some(&["Today".to_string()][..]));
        assert_eq!(result.names_on(Weekday::Tue), Some(&["Six".to_string()][..]));
        assert_eq!(result.buckets().len(), 2);
    }

    #[test]
    fn passed_birthdays_and_missing_birthdays_are_excluded() {
        let result = run(&[person("Yesterday", Some("09.01.1990")), person("None", None)]);
        assert!(result.is_empty());
    }

    #[test]
    fn year_end_wraps_into_january() {
        // Monday 2024-12-30; 2025-01-03 is a Friday.
        let today = NaiveDate::from_ymd_opt(2024, 12, 30).unwrap();
        let records = [person("Wrap", Some("03.01.1970"))];
        let result = upcoming_birthdays(&records, today, DEFAULT_WINDOW_DAYS);
        assert_eq!(result.names_on(Weekday::Fri), Some(&["Wrap".to_string()][..]));
    }

    #[test]
    fn leap_day_birthday_observed_on_feb_28() {
        // 2023-02-28 is a Tuesday.
        let today = NaiveDate::from_ymd_opt(2023, 2, 27).unwrap();
        let records = [person("Leap", Some("29.02.2000"))];
        let result = upcoming_birthdays(&records, today, DEFAULT_WINDOW_DAYS);
        assert_eq!(result.names_on(Weekday::Tue), Some(&["Leap".to_string()][..]));
    }

    #[test]
    fn buckets_follow_first_encounter_order() {
        let result = run(&[
            person("Ann", Some("13.01.1990")),
            person("Bob", Some("12.01.1990")),
            person("Cid", Some("15.01.1990")),
        ]);
        let days: Vec<Weekday> = result.buckets().iter().map(|b| b.weekday).collect();
        assert_eq!(days, vec![Weekday::Mon, Weekday::Fri]);
        assert_eq!(result.to_string(), "Monday: Ann, Cid\nFriday: Bob");
    }

    #[test]
    fn narrower_window_drops_later_days() {
        let records = [
            person("Thu", Some("11.01.1990")),
            person("Fri", Some("12.01.1990")),
        ];
        let result = upcoming_birthdays(&records, today(), 2);
        assert_eq!(result.buckets().len(), 1);
        assert!(result.names_on(Weekday::Thu).is_some());
    }

    #[test]
    fn window_days_bounds() {
        assert!(validate_window_days(0).is_err());
        assert!(validate_window_days(8).is_err());
        assert_eq!(validate_window_days(7), Ok(7));
        assert_eq!(validate_window_days(1), Ok(1));
    }
}
