mod form_dto;

pub use form_dto::{FormOptionsDto, FormStateDto, SelectionUpdateDto};
