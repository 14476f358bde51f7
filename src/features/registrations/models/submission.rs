use std::fmt;

use super::user_record::UserRecord;

/// Steps of one submission, traced as it moves through them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    ValidatingChain,
    CheckingDuplicates,
    Persisting,
    Done,
    Failed,
}

impl SubmissionPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            SubmissionPhase::Idle => "idle",
            SubmissionPhase::ValidatingChain => "validating_chain",
            SubmissionPhase::CheckingDuplicates => "checking_duplicates",
            SubmissionPhase::Persisting => "persisting",
            SubmissionPhase::Done => "done",
            SubmissionPhase::Failed => "failed",
        }
    }
}

impl fmt::Display for SubmissionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which identity fields of a candidate are already taken
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DuplicateFields {
    pub email: bool,
    pub contact: bool,
}

impl DuplicateFields {
    pub fn find(existing: &[UserRecord], email: &str, contact: &str) -> Self {
        Self {
            email: existing.iter().any(|u| u.email == email),
            contact: existing.iter().any(|u| u.contact == contact),
        }
    }

    /// From the column a unique constraint reported, if it named one
    pub fn from_column(column: Option<&str>) -> Self {
        match column {
            Some("email") => Self {
                email: true,
                contact: false,
            },
            Some("contact") => Self {
                email: false,
                contact: true,
            },
            _ => Self::default(),
        }
    }

    pub fn any(&self) -> bool {
        self.email || self.contact
    }

    /// Falls back to naming the contact number when neither flag is known
    pub fn message(&self) -> String {
        let what = match (self.email, self.contact) {
            (true, true) => "email and contact number",
            (true, false) => "email",
            _ => "contact number",
        };
        format!("This {} is already registered! Please use a different one.", what)
    }
}
