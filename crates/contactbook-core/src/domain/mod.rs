pub mod birthday;
pub mod name;
pub mod phone;
pub mod record;

pub use birthday::{Birthday, BIRTHDAY_FORMAT};
pub use name::{validate_name, ContactName};
pub use phone::{validate_phone, Phone, PHONE_DIGITS};
pub use record::Record;
