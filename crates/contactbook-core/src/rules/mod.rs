pub mod birthdays;
pub mod dates;

pub use birthdays::{
    upcoming_birthdays, validate_window_days, weekday_name, UpcomingBirthdays, WeekdayBucket,
    DEFAULT_WINDOW_DAYS, MAX_WINDOW_DAYS,
};
pub use dates::{is_leap_year, next_occurrence, occurrence_in_year};
