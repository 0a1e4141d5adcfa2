use crate::commands::{
    name_arg, pair_args, to_json, CommandError, CommandResult, Context, Usage,
};
use contactbook_core::{birthday_buckets_to_dto, AddressBook};

pub fn add_birthday(args: &[&str], book: &mut AddressBook) -> CommandResult {
    let (name, raw) = pair_args(args, Usage::NameAndBirthday)?;
    let record = book
        .find_mut(name)
        .ok_or_else(|| CommandError::NotFound(name.to_string()))?;
    record.add_birthday(raw)?;
    Ok("Birthday added.".to_string())
}

pub fn show_birthday(args: &[&str], book: &AddressBook) -> CommandResult {
    let name = name_arg(args)?;
    let record = book
        .find(name)
        .ok_or_else(|| CommandError::NotFound(name.to_string()))?;
    Ok(match record.birthday() {
        Some(birthday) => birthday.to_string(),
        None => "Birthday not set for this contact.".to_string(),
    })
}

/// Weekly report: one `Weekday: name, name` line per bucket.
pub fn birthdays(book: &AddressBook, ctx: &Context) -> CommandResult {
    let upcoming = book.get_upcoming_birthdays_within(ctx.today, ctx.birthday_window_days)?;

    if ctx.json {
        return to_json(&birthday_buckets_to_dto(&upcoming));
    }
    if upcoming.is_empty() {
        return Ok("No upcoming birthdays.".to_string());
    }
    Ok(upcoming.to_string())
}
