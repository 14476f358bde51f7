pub mod forms;
pub mod locations;
pub mod registrations;
pub mod roster;
pub mod validation;
