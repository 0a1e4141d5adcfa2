use chrono::NaiveDate;
use contactbook_core::{AddressBook, CoreError};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

pub mod birthdays;
pub mod contacts;


pub const FAREWELL: &str = "Good bye!";

const HELP: &str = "\
Commands:
  hello
  add <name> <phone>
  change <name> <phone>
  phone <name>
  add-phone <name> <phone>
  remove-phone <name> <phone>
  delete <name>
  all
  add-birthday <name> <DD.MM.YYYY>
  show-birthday <name>
  birthdays
  help
  close | exit";

pub struct Context {
    pub json: bool,
    pub today: NaiveDate,
    pub birthday_window_days: i64,
}

/// Argument shape a command expected when too few tokens were given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Usage {
    Name,
    NameAndPhone,
    NameAndBirthday,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("contact not found: {0}")]
    NotFound(String),
    #[error("missing arguments ({0:?})")]
    MissingArgument(Usage),
    #[error("contact already exists: {0}")]
    AlreadyExists(String),
    #[error("contact has no phone numbers: {0}")]
    NoPhones(String),
    #[error("phone not found: {0}")]
    PhoneNotFound(String),
    #[error("failed to encode json: {0}")]
    Json(#[from] serde_json::Error),
}

impl CommandError {
    /// The fixed text shown to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            CommandError::Core(CoreError::InvalidName(_)) => {
                "Invalid name. Please enter a name containing only letters.".to_string()
            }
            CommandError::Core(CoreError::InvalidPhone(_)) => {
                "Your phone number is incorrect. Please enter a valid 10-digit phone number."
                    .to_string()
            }
            CommandError::Core(CoreError::InvalidBirthday(_)) => {
                "Invalid date format. Please use DD.MM.YYYY format.".to_string()
            }
            CommandError::Core(CoreError::InvalidWindowDays(days)) => {
                format!("Birthday window must be between 1 and 7 days, got {days}.")
            }
            CommandError::NotFound(_) => "Contact not found.".to_string(),
            CommandError::MissingArgument(Usage::Name) => "Enter user name.".to_string(),
            CommandError::MissingArgument(Usage::NameAndPhone) => {
                "Give me name and phone please.".to_string()
            }
            CommandError::MissingArgument(Usage::NameAndBirthday) => {
                "Give me name and birthday please.".to_string()
            }
            CommandError::AlreadyExists(_) => {
                "Contact already exists. Use 'change' command to update the phone number."
                    .to_string()
            }
            CommandError::NoPhones(_) => "No phone numbers for this contact.".to_string(),
            CommandError::PhoneNotFound(_) => "Phone not found.".to_string(),
            CommandError::Json(_) => "Could not render JSON output.".to_string(),
        }
    }
}

pub type CommandResult = Result<String, CommandError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Message(String),
    Exit(String),
    Silent,
}

/// Splits a line into a lowercased command name and its arguments.
pub fn parse_input(line: &str) -> Option<(String, Vec<&str>)> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.to_lowercase();
    Some((command, tokens.collect()))
}

pub fn dispatch(line: &str, book: &mut AddressBook, ctx: &Context) -> Reply {
    let Some((command, args)) = parse_input(line) else {
        return Reply::Silent;
    };
    debug!(command = %command, args = args.len(), "dispatch");

    let result = match command.as_str() {
        "close" | "exit" => return Reply::Exit(FAREWELL.to_string()),
        "hello" => Ok("How can I help you?".to_string()),
        "help" => Ok(HELP.to_string()),
        "add" => contacts::add_contact(&args, book),
        "change" => contacts::change_contact(&args, book),
        "phone" => contacts::show_phone(&args, book),
        "add-phone" => contacts::add_phone(&args, book),
        "remove-phone" => contacts::remove_phone(&args, book),
        "delete" => contacts::delete_contact(&args, book),
        "all" => contacts::show_all(book, ctx),
        "add-birthday" => birthdays::add_birthday(&args, book),
        "show-birthday" => birthdays::show_birthday(&args, book),
        "birthdays" => birthdays::birthdays(book, ctx),
        _ => Ok("Invalid command.".to_string()),
    };

    match result {
        Ok(text) => Reply::Message(text),
        Err(err) => {
            debug!(command = %command, error = %err, "command failed");
            Reply::Message(err.user_message())
        }
    }
}

pub(crate) fn name_arg<'a>(args: &[&'a str]) -> Result<&'a str, CommandError> {
    args.first()
        .copied()
        .ok_or(CommandError::MissingArgument(Usage::Name))
}

pub(crate) fn pair_args<'a>(
    args: &[&'a str],
    usage: Usage,
) -> Result<(&'a str, &'a str), CommandError> {
    match args {
        &[first, second] => Ok((first, second)),
        _ => Err(CommandError::MissingArgument(usage)),
    }
}

pub(crate) fn to_json<T: Serialize>(value: &T) -> CommandResult {
    Ok(serde_json::to_string_pretty(value)?)
}
