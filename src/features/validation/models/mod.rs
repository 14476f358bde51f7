mod field_check;

pub use field_check::{check_contact, check_email, check_password, FieldCheck};
