mod registration_dto;

pub use registration_dto::{
    PersonalDetailsDto, RedirectDto, RegisterUserDto, RegisteredUserDto, RegistrationResponseDto,
};
