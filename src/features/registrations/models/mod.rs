mod submission;
mod user_record;

pub use submission::{DuplicateFields, SubmissionPhase};
pub use user_record::UserRecord;
