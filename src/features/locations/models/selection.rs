use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::geo_unit::GeoLevel;

/// Names currently chosen for the four location fields of one form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SelectionState {
    pub region: Option<String>,
    pub province: Option<String>,
    pub city: Option<String>,
    pub barangay: Option<String>,
}

impl SelectionState {
    /// Selection with all four levels filled in
    pub fn complete(
        region: impl Into<String>,
        province: impl Into<String>,
        city: impl Into<String>,
        barangay: impl Into<String>,
    ) -> Self {
        Self {
            region: Some(region.into()),
            province: Some(province.into()),
            city: Some(city.into()),
            barangay: Some(barangay.into()),
        }
    }

    fn slot(&mut self, level: GeoLevel) -> &mut Option<String> {
        match level {
            GeoLevel::Region => &mut self.region,
            GeoLevel::Province => &mut self.province,
            GeoLevel::City => &mut self.city,
            GeoLevel::Barangay => &mut self.barangay,
        }
    }

    pub fn get(&self, level: GeoLevel) -> Option<&str> {
        match level {
            GeoLevel::Region => self.region.as_deref(),
            GeoLevel::Province => self.province.as_deref(),
            GeoLevel::City => self.city.as_deref(),
            GeoLevel::Barangay => self.barangay.as_deref(),
        }
    }

    /// Set the value at `level` and clear every level below it.
    ///
    /// An empty string is stored as "nothing selected".
    pub fn set(&mut self, level: GeoLevel, value: Option<String>) {
        *self.slot(level) = value.filter(|v| !v.is_empty());
        for descendant in level.descendants() {
            *self.slot(descendant) = None;
        }
    }

    #[cfg(test)]
    pub fn is_complete(&self) -> bool {
        GeoLevel::ALL.iter().all(|level| self.get(*level).is_some())
    }
}
