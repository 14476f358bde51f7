use serde::Serialize;

use crate::features::registrations::models::UserRecord;

pub const EMPTY_PLACEHOLDER: &str = "No registered users yet";
pub const ERROR_PLACEHOLDER: &str = "Error loading users";

/// Read-only summary of one registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterCard {
    pub name: String,
    pub gender: String,
    pub course: String,
    pub year: String,
    pub barangay: String,
    pub city: String,
    pub province: String,
    pub region: String,
    pub country: String,
    pub email: String,
    pub contact: String,
}

impl From<UserRecord> for RosterCard {
    fn from(record: UserRecord) -> Self {
        Self {
            name: record.name,
            gender: record.gender,
            course: record.course,
            year: record.year,
            barangay: record.barangay,
            city: record.city,
            province: record.province,
            region: record.region,
            country: record.country,
            email: record.email,
            contact: record.contact,
        }
    }
}

/// What the roster shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterView {
    Cards(Vec<RosterCard>),
    Empty,
    /// The store could not be read
    Unavailable,
}

impl RosterView {
    pub fn from_records(records: Vec<UserRecord>) -> Self {
        if records.is_empty() {
            RosterView::Empty
        } else {
            RosterView::Cards(records.into_iter().map(Into::into).collect())
        }
    }

    pub fn cards(&self) -> &[RosterCard] {
        match self {
            RosterView::Cards(cards) => cards,
            RosterView::Empty | RosterView::Unavailable => &[],
        }
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            RosterView::Cards(_) => None,
            RosterView::Empty => Some(EMPTY_PLACEHOLDER),
            RosterView::Unavailable => Some(ERROR_PLACEHOLDER),
        }
    }
}
