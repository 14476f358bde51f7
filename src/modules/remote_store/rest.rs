use async_trait::async_trait;
use reqwest::{header, Client, Response};
use serde::Deserialize;

use super::{unique_column_from, RemoteStore, StoreError, UserFilter};
use crate::core::config::RestStoreConfig;
use crate::features::registrations::models::UserRecord;

/// Error body returned by PostgREST
#[derive(Debug, Deserialize)]
struct PostgrestError {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    details: Option<String>,
}

/// `users` table behind a PostgREST-compatible HTTP API (e.g. Supabase)
pub struct RestRemoteStore {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl RestRemoteStore {
    pub fn new(config: &RestStoreConfig) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent("RehistroCore/1.0")
            .build()
            .map_err(|e| StoreError::Query(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: format!("{}/rest/v1/{}", config.base_url, config.table),
            api_key: config.api_key.clone(),
        })
    }

    fn request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("apikey", &self.api_key)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.api_key))
    }

    /// Turn a non-2xx response into a `StoreError`
    async fn error_from(response: Response) -> StoreError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        match serde_json::from_str::<PostgrestError>(&body) {
            Ok(err) if err.code.as_deref() == Some("23505") => {
                let column = err
                    .details
                    .as_deref()
                    .and_then(unique_column_from)
                    .or_else(|| err.message.as_deref().and_then(unique_column_from));
                StoreError::UniqueViolation { column }
            }
            Ok(PostgrestError {
                message: Some(message),
                ..
            }) => StoreError::Query(message),
            _ => StoreError::Query(format!("Remote store returned {}", status)),
        }
    }
}

/// Quote a value for use inside a PostgREST logical filter
fn postgrest_literal(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}

/// Oldest first, same as the Postgres backend
const ORDER_BY_INSERTION: &str = "order=created_at.asc";

/// Query string selecting rows for `filter`
fn filter_query(filter: &UserFilter) -> String {
    match filter {
        UserFilter::All => format!("select=*&{}", ORDER_BY_INSERTION),
        UserFilter::EmailOrContact { email, contact } => {
            let expression = format!(
                "(email.eq.{},contact.eq.{})",
                postgrest_literal(email),
                postgrest_literal(contact)
            );
            format!(
                "select=*&or={}&{}",
                urlencoding::encode(&expression),
                ORDER_BY_INSERTION
            )
        }
    }
}

#[async_trait]
impl RemoteStore for RestRemoteStore {
    async fn select(&self, filter: &UserFilter) -> Result<Vec<UserRecord>, StoreError> {
        let url = format!("{}?{}", self.endpoint, filter_query(filter));
        tracing::debug!("Remote store select: {}", url);

        let response = self
            .request(self.client.get(&url))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Remote store request failed: {:?}", e);
                StoreError::Query(e.to_string())
            })?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        response.json::<Vec<UserRecord>>().await.map_err(|e| {
            tracing::error!("Failed to parse remote store response: {:?}", e);
            StoreError::Query(format!("Failed to parse remote store response: {}", e))
        })
    }

    async fn insert(&self, records: &[UserRecord]) -> Result<Vec<UserRecord>, StoreError> {
        let response = self
            .request(self.client.post(&self.endpoint))
            .header("Prefer", "return=representation")
            .json(records)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Remote store request failed: {:?}", e);
                StoreError::Query(e.to_string())
            })?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        response.json::<Vec<UserRecord>>().await.map_err(|e| {
            tracing::error!("Failed to parse remote store response: {:?}", e);
            StoreError::Query(format!("Failed to parse remote store response: {}", e))
        })
    }

    fn backend(&self) -> &'static str {
        "rest"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_postgrest_literal_escapes_quotes() {
        assert_eq!(postgrest_literal("a@b.c"), "\"a@b.c\"");
        assert_eq!(postgrest_literal(r#"x"y\z"#), r#""x\"y\\z""#);
    }

    #[test]
    fn test_filter_query() {
        assert_eq!(
            filter_query(&UserFilter::All),
            "select=*&order=created_at.asc"
        );

        let query = filter_query(&UserFilter::EmailOrContact {
            email: "a@b.c".to_string(),
            contact: "09171234567".to_string(),
        });
        let decoded = urlencoding::decode(&query).unwrap();
        assert_eq!(
            decoded,
            r#"select=*&or=(email.eq."a@b.c",contact.eq."09171234567")&order=created_at.asc"#
        );
    }

    #[test]
    fn test_endpoint_from_config() {
        let store = RestRemoteStore::new(&RestStoreConfig {
            base_url: "https://project.supabase.co".to_string(),
            api_key: "anon".to_string(),
            table: "users".to_string(),
            timeout: std::time::Duration::from_secs(5),
        })
        .unwrap();
        assert_eq!(store.endpoint, "https://project.supabase.co/rest/v1/users");
        assert_eq!(store.backend(), "rest");
    }
}
