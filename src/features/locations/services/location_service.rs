use std::sync::Arc;

use crate::features::locations::models::{DirectoryCounts, GeoDirectory, GeoLevel, GeoUnit};

/// Stateless cascade lookups over the shared directory.
///
/// A parent name is looked up across its whole table; the first match in
/// table order wins. Unknown names yield an empty list.
pub struct LocationService {
    directory: Arc<GeoDirectory>,
    load_error: Option<String>,
}

/// Outcome of the startup load
#[derive(Debug, Clone)]
pub struct DirectoryStatus {
    pub loaded: bool,
    pub error: Option<String>,
    pub counts: DirectoryCounts,
    pub orphans: usize,
}

impl LocationService {
    pub fn new(directory: Arc<GeoDirectory>, load_error: Option<String>) -> Self {
        Self {
            directory,
            load_error,
        }
    }

    pub fn directory(&self) -> &Arc<GeoDirectory> {
        &self.directory
    }

    pub fn list_regions(&self) -> Vec<GeoUnit> {
        self.directory.units(GeoLevel::Region).to_vec()
    }

    fn children_of(&self, level: GeoLevel, name: &str) -> Vec<GeoUnit> {
        match self.directory.find(level, name) {
            Some(parent) => self.directory.children(parent).into_iter().cloned().collect(),
            None => {
                tracing::debug!("No {} named '{}', returning no options", level, name);
                Vec::new()
            }
        }
    }

    pub fn provinces_of(&self, region_name: &str) -> Vec<GeoUnit> {
        self.children_of(GeoLevel::Region, region_name)
    }

    pub fn cities_of(&self, province_name: &str) -> Vec<GeoUnit> {
        self.children_of(GeoLevel::Province, province_name)
    }

    pub fn barangays_of(&self, city_name: &str) -> Vec<GeoUnit> {
        self.children_of(GeoLevel::City, city_name)
    }

    pub fn status(&self) -> DirectoryStatus {
        DirectoryStatus {
            loaded: self.load_error.is_none(),
            error: self.load_error.clone(),
            counts: self.directory.counts(),
            orphans: self.directory.orphans().len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::sample_directory;

    fn service() -> LocationService {
        LocationService::new(Arc::new(sample_directory()), None)
    }

    fn names(units: Vec<GeoUnit>) -> Vec<String> {
        units.into_iter().map(|u| u.name).collect()
    }

    #[test]
    fn test_provinces_of_known_region() {
        let provinces = service().provinces_of("REGION VII (CENTRAL VISAYAS)");
        assert_eq!(names(provinces), vec!["BOHOL", "CEBU"]);
    }

    #[test]
    fn test_unknown_parent_yields_empty() {
        let svc = service();
        assert!(svc.provinces_of("ATLANTIS").is_empty());
        assert!(svc.cities_of("").is_empty());
        assert!(svc.barangays_of("cebu city").is_empty());
    }

    #[test]
    fn test_barangays_of_first_matching_city() {
        let barangays = service().barangays_of("CEBU CITY");
        assert!(barangays
            .iter()
            .all(|b| b.parent_code.as_deref() == Some("072217")));
        assert!(names(barangays).contains(&"LAHUG".to_string()));
    }

    #[test]
    fn test_status_reports_load_error() {
        let svc = LocationService::new(
            Arc::new(GeoDirectory::empty()),
            Some("Reference data unreachable".to_string()),
        );
        let status = svc.status();

        assert!(!status.loaded);
        assert_eq!(status.error.as_deref(), Some("Reference data unreachable"));
        assert_eq!(status.counts.regions, 0);
        assert!(svc.list_regions().is_empty());
    }
}
