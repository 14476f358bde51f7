pub mod field_check_handler;

pub use field_check_handler::{__path_check_fields, check_fields};
