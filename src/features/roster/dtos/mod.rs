mod roster_dto;

pub use roster_dto::{RosterCardDto, RosterResponseDto, RosterStatus};
