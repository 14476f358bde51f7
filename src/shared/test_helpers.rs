use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use uuid::Uuid;

use crate::features::locations::models::GeoDirectory;
use crate::features::registrations::dtos::PersonalDetailsDto;
use crate::features::registrations::models::UserRecord;
use crate::modules::remote_store::{InMemoryRemoteStore, RemoteStore, StoreError, UserFilter};

const COURSES: [&str; 4] = [
    "BS Computer Science",
    "BS Information Technology",
    "BS Nursing",
    "BS Civil Engineering",
];

/// A stored user in Lahug, Cebu City
pub fn sample_user(email: &str, contact: &str) -> UserRecord {
    UserRecord {
        name: "Juan Dela Cruz".to_string(),
        course: "BS Computer Science".to_string(),
        year: "2".to_string(),
        gender: "Male".to_string(),
        region: "REGION VII (CENTRAL VISAYAS)".to_string(),
        province: "CEBU".to_string(),
        city: "CEBU CITY".to_string(),
        barangay: "LAHUG".to_string(),
        country: "Philippines".to_string(),
        email: email.to_string(),
        contact: contact.to_string(),
        password: "Secret123!".to_string(),
    }
}

/// Personal fields with a unique email and contact number
pub fn fake_personal_details() -> PersonalDetailsDto {
    let email: String = SafeEmail().fake();
    let tag = &Uuid::new_v4().simple().to_string()[..8];
    let digits: u64 = (0..1_000_000_000u64).fake();
    let course = COURSES[(0..COURSES.len()).fake::<usize>()];
    let year: u8 = (1..=5u8).fake();

    PersonalDetailsDto {
        name: Name().fake(),
        course: course.to_string(),
        year: year.to_string(),
        gender: ["Male", "Female"][(0..2usize).fake::<usize>()].to_string(),
        email: format!("{}.{}", tag, email),
        contact: format!("09{:09}", digits),
        password: format!("Pass{}!", (100..1000u32).fake::<u32>()),
    }
}

/// The bundled sample tables under `data/`
pub fn sample_directory() -> GeoDirectory {
    GeoDirectory::from_records(
        serde_json::from_str(include_str!("../../data/region.json")).unwrap(),
        serde_json::from_str(include_str!("../../data/province.json")).unwrap(),
        serde_json::from_str(include_str!("../../data/city.json")).unwrap(),
        serde_json::from_str(include_str!("../../data/barangay.json")).unwrap(),
    )
}

/// Fresh path under the system temp dir; the file does not exist yet
pub fn temp_state_path() -> PathBuf {
    std::env::temp_dir()
        .join("rehistro-tests")
        .join(format!("{}.json", Uuid::new_v4()))
}

/// Remote store that fails with "connection refused"
#[derive(Default)]
pub struct FailingRemoteStore {
    select_succeeds: bool,
}

impl FailingRemoteStore {
    /// Reads return no rows, writes fail
    pub fn on_insert() -> Self {
        Self {
            select_succeeds: true,
        }
    }
}

#[async_trait]
impl RemoteStore for FailingRemoteStore {
    async fn select(&self, _filter: &UserFilter) -> Result<Vec<UserRecord>, StoreError> {
        if self.select_succeeds {
            Ok(Vec::new())
        } else {
            Err(StoreError::Query("connection refused".to_string()))
        }
    }

    async fn insert(&self, _records: &[UserRecord]) -> Result<Vec<UserRecord>, StoreError> {
        Err(StoreError::Query("connection refused".to_string()))
    }

    fn backend(&self) -> &'static str {
        "failing"
    }
}

/// In-memory store that counts every call
#[derive(Default)]
pub struct CountingRemoteStore {
    inner: InMemoryRemoteStore,
    calls: AtomicUsize,
}

impl CountingRemoteStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RemoteStore for CountingRemoteStore {
    async fn select(&self, filter: &UserFilter) -> Result<Vec<UserRecord>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.select(filter).await
    }

    async fn insert(&self, records: &[UserRecord]) -> Result<Vec<UserRecord>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.insert(records).await
    }

    fn backend(&self) -> &'static str {
        "counting"
    }
}
