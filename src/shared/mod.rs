pub mod constants;
pub mod submission_guard;
pub mod types;
pub mod validation;

#[cfg(test)]
pub mod test_helpers;
