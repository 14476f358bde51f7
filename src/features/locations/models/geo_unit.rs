use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Tier of the Philippine administrative hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum GeoLevel {
    Region,
    Province,
    City,
    Barangay,
}

impl GeoLevel {
    pub const ALL: [GeoLevel; 4] = [
        GeoLevel::Region,
        GeoLevel::Province,
        GeoLevel::City,
        GeoLevel::Barangay,
    ];

    pub fn parent(self) -> Option<GeoLevel> {
        match self {
            GeoLevel::Region => None,
            GeoLevel::Province => Some(GeoLevel::Region),
            GeoLevel::City => Some(GeoLevel::Province),
            GeoLevel::Barangay => Some(GeoLevel::City),
        }
    }

    pub fn child(self) -> Option<GeoLevel> {
        match self {
            GeoLevel::Region => Some(GeoLevel::Province),
            GeoLevel::Province => Some(GeoLevel::City),
            GeoLevel::City => Some(GeoLevel::Barangay),
            GeoLevel::Barangay => None,
        }
    }

    /// Levels strictly below this one, nearest first
    pub fn descendants(self) -> impl Iterator<Item = GeoLevel> {
        std::iter::successors(self.child(), |level| level.child())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GeoLevel::Region => "region",
            GeoLevel::Province => "province",
            GeoLevel::City => "city",
            GeoLevel::Barangay => "barangay",
        }
    }
}

impl fmt::Display for GeoLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One administrative unit (region, province, city/municipality or barangay)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeoUnit {
    pub level: GeoLevel,
    pub name: String,
    pub code: String,
    /// Code of the enclosing unit, `None` for regions
    pub parent_code: Option<String>,
}

// Raw rows of the static reference files. Extra fields in the files are ignored.

#[derive(Debug, Clone, Deserialize)]
pub struct RegionRecord {
    pub region_name: String,
    pub region_code: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProvinceRecord {
    pub province_name: String,
    pub province_code: String,
    pub region_code: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CityRecord {
    pub city_name: String,
    pub city_code: String,
    pub province_code: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BarangayRecord {
    pub brgy_name: String,
    pub brgy_code: String,
    pub city_code: String,
}

impl From<RegionRecord> for GeoUnit {
    fn from(r: RegionRecord) -> Self {
        Self {
            level: GeoLevel::Region,
            name: r.region_name,
            code: r.region_code,
            parent_code: None,
        }
    }
}

impl From<ProvinceRecord> for GeoUnit {
    fn from(p: ProvinceRecord) -> Self {
        Self {
            level: GeoLevel::Province,
            name: p.province_name,
            code: p.province_code,
            parent_code: Some(p.region_code),
        }
    }
}

impl From<CityRecord> for GeoUnit {
    fn from(c: CityRecord) -> Self {
        Self {
            level: GeoLevel::City,
            name: c.city_name,
            code: c.city_code,
            parent_code: Some(c.province_code),
        }
    }
}

impl From<BarangayRecord> for GeoUnit {
    fn from(b: BarangayRecord) -> Self {
        Self {
            level: GeoLevel::Barangay,
            name: b.brgy_name,
            code: b.brgy_code,
            parent_code: Some(b.city_code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_navigation() {
        assert_eq!(GeoLevel::Region.parent(), None);
        assert_eq!(GeoLevel::Barangay.child(), None);
        assert_eq!(GeoLevel::City.parent(), Some(GeoLevel::Province));

        let below_region: Vec<_> = GeoLevel::Region.descendants().collect();
        assert_eq!(
            below_region,
            vec![GeoLevel::Province, GeoLevel::City, GeoLevel::Barangay]
        );
        assert_eq!(GeoLevel::Barangay.descendants().count(), 0);
    }

    #[test]
    fn test_barangay_record_deserializes_with_extra_fields() {
        let json = r#"{"id": 7, "brgy_code": "072217055", "brgy_name": "LAHUG",
                       "city_code": "072217", "province_code": "0722", "region_code": "07"}"#;
        let unit: GeoUnit = serde_json::from_str::<BarangayRecord>(json).unwrap().into();

        assert_eq!(unit.level, GeoLevel::Barangay);
        assert_eq!(unit.name, "LAHUG");
        assert_eq!(unit.parent_code.as_deref(), Some("072217"));
    }
}
