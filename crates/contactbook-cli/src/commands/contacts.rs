use crate::commands::{
    name_arg, pair_args, to_json, CommandError, CommandResult, Context, Usage,
};
use contactbook_core::{validate_name, validate_phone, AddressBook, ContactDto, Record};

pub fn add_contact(args: &[&str], book: &mut AddressBook) -> CommandResult {
    let (name, phone) = pair_args(args, Usage::NameAndPhone)?;
    validate_name(name)?;
    validate_phone(phone)?;
    if book.contains(name) {
        return Err(CommandError::AlreadyExists(name.to_string()));
    }

    let mut record = Record::new(name)?;
    record.add_phone(phone)?;
    book.add_record(record);
    Ok("Contact added.".to_string())
}

/// Replaces the contact's first phone number. A contact without phones gets
/// `phone` as its first entry.
pub fn change_contact(args: &[&str], book: &mut AddressBook) -> CommandResult {
    let (name, phone) = pair_args(args, Usage::NameAndPhone)?;
    let record = book
        .find_mut(name)
        .ok_or_else(|| CommandError::NotFound(name.to_string()))?;
    validate_phone(phone)?;

    match record.primary_phone().cloned() {
        Some(current) => {
            record.edit_phone(current.as_str(), phone)?;
        }
        None => record.add_phone(phone)?,
    }
    Ok("Contact updated.".to_string())
}

pub fn show_phone(args: &[&str], book: &AddressBook) -> CommandResult {
    let name = name_arg(args)?;
    let record = book
        .find(name)
        .ok_or_else(|| CommandError::NotFound(name.to_string()))?;
    record
        .primary_phone()
        .map(|phone| phone.to_string())
        .ok_or_else(|| CommandError::NoPhones(name.to_string()))
}

pub fn add_phone(args: &[&str], book: &mut AddressBook) -> CommandResult {
    let (name, phone) = pair_args(args, Usage::NameAndPhone)?;
    let record = book
        .find_mut(name)
        .ok_or_else(|| CommandError::NotFound(name.to_string()))?;
    record.add_phone(phone)?;
    Ok("Phone added.".to_string())
}

pub fn remove_phone(args: &[&str], book: &mut AddressBook) -> CommandResult {
    let (name, phone) = pair_args(args, Usage::NameAndPhone)?;
    let record = book
        .find_mut(name)
        .ok_or_else(|| CommandError::NotFound(name.to_string()))?;
    if record.find_phone(phone).is_none() {
        return Err(CommandError::PhoneNotFound(phone.to_string()));
    }
    record.remove_phone(phone);
    Ok("Phone removed.".to_string())
}

pub fn delete_contact(args: &[&str], book: &mut AddressBook) -> CommandResult {
    let name = name_arg(args)?;
    book.delete(name)
        .ok_or_else(|| CommandError::NotFound(name.to_string()))?;
    Ok("Contact deleted.".to_string())
}

pub fn show_all(book: &AddressBook, ctx: &Context) -> CommandResult {
    if ctx.json {
        let dtos: Vec<ContactDto> = book.records().map(ContactDto::from).collect();
        return to_json(&dtos);
    }

    if book.is_empty() {
        return Ok("No contacts".to_string());
    }

    Ok(book
        .records()
        .map(|record| record.to_string())
        .collect::<Vec<_>>()
        .join("\n"))
}
