use async_trait::async_trait;
use sqlx::PgPool;

use super::{unique_column_from, RemoteStore, StoreError, UserFilter};
use crate::features::registrations::models::UserRecord;

const SELECT_ALL: &str = r#"
    SELECT name, course, year, gender, region, province, city, barangay,
           country, email, contact, password
    FROM users
    ORDER BY created_at ASC
"#;

const SELECT_BY_EMAIL_OR_CONTACT: &str = r#"
    SELECT name, course, year, gender, region, province, city, barangay,
           country, email, contact, password
    FROM users
    WHERE email = $1 OR contact = $2
    ORDER BY created_at ASC
"#;

const INSERT_USER: &str = r#"
    INSERT INTO users (
        name, course, year, gender,
        region, province, city, barangay, country,
        email, contact, password
    ) VALUES (
        $1, $2, $3, $4,
        $5, $6, $7, $8, $9,
        $10, $11, $12
    )
    RETURNING name, course, year, gender, region, province, city, barangay,
              country, email, contact, password
"#;

/// `users` table in Postgres
pub struct PgRemoteStore {
    pool: PgPool,
}

impl PgRemoteStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Convert a sqlx error, recognising unique constraint violations (code 23505)
fn handle_db_error(e: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.code() == Some(std::borrow::Cow::Borrowed("23505")) {
            let column = db_err
                .constraint()
                .and_then(unique_column_from)
                .or_else(|| unique_column_from(db_err.message()));
            return StoreError::UniqueViolation { column };
        }
    }

    StoreError::Query(e.to_string())
}

#[async_trait]
impl RemoteStore for PgRemoteStore {
    async fn select(&self, filter: &UserFilter) -> Result<Vec<UserRecord>, StoreError> {
        let rows = match filter {
            UserFilter::All => {
                sqlx::query_as::<_, UserRecord>(SELECT_ALL)
                    .fetch_all(&self.pool)
                    .await
            }
            UserFilter::EmailOrContact { email, contact } => {
                sqlx::query_as::<_, UserRecord>(SELECT_BY_EMAIL_OR_CONTACT)
                    .bind(email)
                    .bind(contact)
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(|e| {
            tracing::error!("Failed to select users: {:?}", e);
            handle_db_error(e)
        })?;

        Ok(rows)
    }

    async fn insert(&self, records: &[UserRecord]) -> Result<Vec<UserRecord>, StoreError> {
        let mut tx = self.pool.begin().await.map_err(handle_db_error)?;
        let mut stored = Vec::with_capacity(records.len());

        for record in records {
            let row = sqlx::query_as::<_, UserRecord>(INSERT_USER)
                .bind(&record.name)
                .bind(&record.course)
                .bind(&record.year)
                .bind(&record.gender)
                .bind(&record.region)
                .bind(&record.province)
                .bind(&record.city)
                .bind(&record.barangay)
                .bind(&record.country)
                .bind(&record.email)
                .bind(&record.contact)
                .bind(&record.password)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to insert user: {:?}", e);
                    handle_db_error(e)
                })?;
            stored.push(row);
        }

        tx.commit().await.map_err(handle_db_error)?;

        Ok(stored)
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
