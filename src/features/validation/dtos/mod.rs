mod field_check_dto;

pub use field_check_dto::{FieldCheckDto, FieldChecksResponseDto, FieldStatus, ValidateFieldsDto};
