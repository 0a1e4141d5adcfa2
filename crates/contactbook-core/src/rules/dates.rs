use chrono::{Datelike, NaiveDate};

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// The date a yearly `month`/`day` anniversary falls on in `year`.
///
/// 29 February is observed on 28 February in non-leap years.
pub fn occurrence_in_year(month: u32, day: u32, year: i32) -> Option<NaiveDate> {
    if month == 2 && day == 29 && !is_leap_year(year) {
        return NaiveDate::from_ymd_opt(year, 2, 28);
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// First occurrence of the anniversary on or after `today`.
pub fn next_occurrence(month: u32, day: u32, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = occurrence_in_year(month, day, today.year())?;
    if this_year >= today {
        return Some(this_year);
    }
    occurrence_in_year(month, day, today.year() + 1)
}

#[cfg(test)]
mod tests {
    use super::{is_leap_year, next_occurrence, occurrence_in_year};
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn leap_year_logic() {
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
    }

    #[test]
    fn occurrence_in_year_leap_day_fallback() {
        assert_eq!(occurrence_in_year(2, 29, 2023), Some(date(2023, 2, 28)));
        assert_eq!(occurrence_in_year(2, 29, 2024), Some(date(2024, 2, 29)));
        assert_eq!(occurrence_in_year(7, 4, 2023), Some(date(2023, 7, 4)));
    }

    #[test]
    fn next_occurrence_today_counts() {
        let today = date(2024, 1, 10);
        assert_eq!(next_occurrence(1, 10, today), Some(today));
    }

    #[test]
    fn next_occurrence_rolls_to_next_year() {
        let today = date(2024, 12, 30);
        assert_eq!(next_occurrence(1, 2, today), Some(date(2025, 1, 2)));
        assert_eq!(next_occurrence(12, 29, today), Some(date(2025, 12, 29)));
    }

    #[test]
    fn next_occurrence_leap_day_after_fallback_date() {
        let today = date(2023, 3, 1);
        assert_eq!(next_occurrence(2, 29, today), Some(date(2024, 2, 29)));
    }
}
