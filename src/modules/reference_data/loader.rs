use std::time::Duration;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::core::config::ReferenceDataConfig;
use crate::features::locations::models::{
    BarangayRecord, CityRecord, GeoDirectory, ProvinceRecord, RegionRecord,
};

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    #[error("Reference data source '{location}' is unreachable: {reason}")]
    Unreachable { location: String, reason: String },

    #[error("Reference data source '{location}' is not valid: {reason}")]
    Parse { location: String, reason: String },
}

pub struct ReferenceDataLoader {
    client: reqwest::Client,
    config: ReferenceDataConfig,
}

fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

impl ReferenceDataLoader {
    pub fn new(config: ReferenceDataConfig) -> Result<Self, LoadError> {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .user_agent("RehistroCore/1.0")
            .build()
            .map_err(|e| LoadError::Client(e.to_string()))?;

        Ok(Self { client, config })
    }

    async fn read_bytes(&self, location: &str) -> Result<Vec<u8>, LoadError> {
        let unreachable = |reason: String| LoadError::Unreachable {
            location: location.to_string(),
            reason,
        };

        if !is_remote(location) {
            return tokio::fs::read(location)
                .await
                .map_err(|e| unreachable(e.to_string()));
        }

        let response = self
            .client
            .get(location)
            .send()
            .await
            .map_err(|e| unreachable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(unreachable(format!("HTTP {}", response.status())));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| unreachable(e.to_string()))?;
        Ok(bytes.to_vec())
    }

    /// Fetch one table as an ordered list of records
    pub async fn fetch<T: DeserializeOwned>(&self, location: &str) -> Result<Vec<T>, LoadError> {
        let bytes = self.read_bytes(location).await?;

        let records: Vec<T> = serde_json::from_slice(&bytes).map_err(|e| LoadError::Parse {
            location: location.to_string(),
            reason: e.to_string(),
        })?;

        tracing::debug!("Loaded {} records from {}", records.len(), location);
        Ok(records)
    }

    /// Fetch all four tables concurrently and build the directory
    pub async fn load(&self) -> Result<GeoDirectory, LoadError> {
        let (regions, provinces, cities, barangays) = tokio::try_join!(
            self.fetch::<RegionRecord>(&self.config.regions),
            self.fetch::<ProvinceRecord>(&self.config.provinces),
            self.fetch::<CityRecord>(&self.config.cities),
            self.fetch::<BarangayRecord>(&self.config.barangays),
        )?;

        Ok(GeoDirectory::from_records(
            regions, provinces, cities, barangays,
        ))
    }

    /// Load the directory, degrading to an empty one on failure.
    ///
    /// A failure is logged once here and handed back for the status report.
    pub async fn load_or_empty(&self) -> (GeoDirectory, Option<LoadError>) {
        match self.load().await {
            Ok(directory) => {
                let counts = directory.counts();
                tracing::info!(
                    "Reference data loaded: {} regions, {} provinces, {} cities, {} barangays",
                    counts.regions,
                    counts.provinces,
                    counts.cities,
                    counts.barangays
                );

                let orphans = directory.orphans();
                if !orphans.is_empty() {
                    tracing::warn!(
                        "{} location units reference a missing parent code",
                        orphans.len()
                    );
                    for unit in orphans.iter().take(10) {
                        tracing::warn!(
                            "Orphan {} '{}' ({}) -> parent {:?}",
                            unit.level,
                            unit.name,
                            unit.code,
                            unit.parent_code
                        );
                    }
                }

                (directory, None)
            }
            Err(e) => {
                tracing::error!("Failed to load reference data, continuing without locations: {}", e);
                (GeoDirectory::empty(), Some(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::locations::models::GeoLevel;

    fn data_path(file: &str) -> String {
        format!("{}/data/{}", env!("CARGO_MANIFEST_DIR"), file)
    }

    fn bundled_config() -> ReferenceDataConfig {
        ReferenceDataConfig {
            regions: data_path("region.json"),
            provinces: data_path("province.json"),
            cities: data_path("city.json"),
            barangays: data_path("barangay.json"),
        }
    }

    #[tokio::test]
    async fn test_load_bundled_data() {
        let loader = ReferenceDataLoader::new(bundled_config()).unwrap();
        let directory = loader.load().await.unwrap();

        assert!(directory.contains(GeoLevel::Region, "REGION VII (CENTRAL VISAYAS)"));
        assert!(directory.contains(GeoLevel::Barangay, "LAHUG"));
        assert!(directory.orphans().is_empty());
    }

    #[tokio::test]
    async fn test_missing_file_degrades_to_empty() {
        let config = ReferenceDataConfig {
            barangays: data_path("does-not-exist.json"),
            ..bundled_config()
        };
        let loader = ReferenceDataLoader::new(config).unwrap();

        let (directory, error) = loader.load_or_empty().await;
        assert!(directory.is_empty());
        assert!(matches!(error, Some(LoadError::Unreachable { .. })));
    }

    #[tokio::test]
    async fn test_unparseable_file_is_parse_error() {
        let path = crate::shared::test_helpers::temp_state_path();
        tokio::fs::create_dir_all(path.parent().unwrap()).await.unwrap();
        tokio::fs::write(&path, br#"{"not": "an array"}"#).await.unwrap();

        let loader = ReferenceDataLoader::new(bundled_config()).unwrap();
        let result = loader
            .fetch::<RegionRecord>(path.to_str().unwrap())
            .await;
        assert!(matches!(result, Err(LoadError::Parse { .. })));
    }

    #[tokio::test]
    async fn test_extra_fields_are_ignored() {
        let path = crate::shared::test_helpers::temp_state_path();
        tokio::fs::create_dir_all(path.parent().unwrap()).await.unwrap();
        tokio::fs::write(
            &path,
            br#"[{"id": 1, "psgc_code": "010000000", "region_name": "ILOCOS", "region_code": "01"}]"#,
        )
        .await
        .unwrap();

        let loader = ReferenceDataLoader::new(bundled_config()).unwrap();
        let records = loader
            .fetch::<RegionRecord>(path.to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(records[0].region_name, "ILOCOS");
    }
}
