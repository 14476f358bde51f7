use std::collections::{HashMap, HashSet};

use super::geo_unit::{BarangayRecord, CityRecord, GeoLevel, GeoUnit, ProvinceRecord, RegionRecord};
use super::selection::SelectionState;

/// Immutable lookup structure over the four reference tables.
///
/// Built once at startup and shared behind an `Arc`. Table order is kept as
/// loaded; every listing comes back in that order.
#[derive(Debug, Default)]
pub struct GeoDirectory {
    regions: Vec<GeoUnit>,
    provinces: Vec<GeoUnit>,
    cities: Vec<GeoUnit>,
    barangays: Vec<GeoUnit>,
    /// Per child level: parent code -> indexes into that level's table
    children: HashMap<GeoLevel, HashMap<String, Vec<usize>>>,
}

/// The four units named by a valid selection chain
#[derive(Debug, Clone, Copy)]
pub struct ResolvedChain<'a> {
    pub region: &'a GeoUnit,
    pub province: &'a GeoUnit,
    pub city: &'a GeoUnit,
    pub barangay: &'a GeoUnit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirectoryCounts {
    pub regions: usize,
    pub provinces: usize,
    pub cities: usize,
    pub barangays: usize,
}

impl GeoDirectory {
    pub fn new(
        regions: Vec<GeoUnit>,
        provinces: Vec<GeoUnit>,
        cities: Vec<GeoUnit>,
        barangays: Vec<GeoUnit>,
    ) -> Self {
        let mut directory = Self {
            regions,
            provinces,
            cities,
            barangays,
            children: HashMap::new(),
        };

        for level in [GeoLevel::Province, GeoLevel::City, GeoLevel::Barangay] {
            let mut index: HashMap<String, Vec<usize>> = HashMap::new();
            for (position, unit) in directory.units(level).iter().enumerate() {
                if let Some(parent_code) = &unit.parent_code {
                    index.entry(parent_code.clone()).or_default().push(position);
                }
            }
            directory.children.insert(level, index);
        }

        directory
    }

    pub fn from_records(
        regions: Vec<RegionRecord>,
        provinces: Vec<ProvinceRecord>,
        cities: Vec<CityRecord>,
        barangays: Vec<BarangayRecord>,
    ) -> Self {
        Self::new(
            regions.into_iter().map(Into::into).collect(),
            provinces.into_iter().map(Into::into).collect(),
            cities.into_iter().map(Into::into).collect(),
            barangays.into_iter().map(Into::into).collect(),
        )
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn units(&self, level: GeoLevel) -> &[GeoUnit] {
        match level {
            GeoLevel::Region => &self.regions,
            GeoLevel::Province => &self.provinces,
            GeoLevel::City => &self.cities,
            GeoLevel::Barangay => &self.barangays,
        }
    }

    pub fn is_empty(&self) -> bool {
        GeoLevel::ALL.iter().all(|level| self.units(*level).is_empty())
    }

    pub fn counts(&self) -> DirectoryCounts {
        DirectoryCounts {
            regions: self.regions.len(),
            provinces: self.provinces.len(),
            cities: self.cities.len(),
            barangays: self.barangays.len(),
        }
    }

    /// First unit of `level` whose name equals `name` exactly
    pub fn find(&self, level: GeoLevel, name: &str) -> Option<&GeoUnit> {
        self.units(level).iter().find(|unit| unit.name == name)
    }

    #[cfg(test)]
    pub fn contains(&self, level: GeoLevel, name: &str) -> bool {
        self.find(level, name).is_some()
    }

    /// Units one level below `parent` whose parent code is `parent.code`
    pub fn children(&self, parent: &GeoUnit) -> Vec<&GeoUnit> {
        let Some(child_level) = parent.level.child() else {
            return Vec::new();
        };
        let table = self.units(child_level);

        self.children
            .get(&child_level)
            .and_then(|index| index.get(&parent.code))
            .map(|positions| positions.iter().map(|&i| &table[i]).collect())
            .unwrap_or_default()
    }

    /// Look up `name` at `level`, restricted to children of `parent` when given
    fn resolve(&self, level: GeoLevel, name: &str, parent: Option<&GeoUnit>) -> Option<&GeoUnit> {
        match parent {
            None => self.find(level, name),
            Some(parent) => self
                .children(parent)
                .into_iter()
                .find(|unit| unit.name == name),
        }
    }

    /// Validate a full selection chain against the tables.
    ///
    /// Every level must name an existing unit that belongs to the unit chosen
    /// one level up. Returns the first level that fails.
    pub fn resolve_chain(&self, selection: &SelectionState) -> Result<ResolvedChain<'_>, GeoLevel> {
        let mut resolved: Vec<&GeoUnit> = Vec::with_capacity(4);

        for level in GeoLevel::ALL {
            let name = selection.get(level).ok_or(level)?;
            let unit = self
                .resolve(level, name, resolved.last().copied())
                .ok_or(level)?;
            resolved.push(unit);
        }

        Ok(ResolvedChain {
            region: resolved[0],
            province: resolved[1],
            city: resolved[2],
            barangay: resolved[3],
        })
    }

    /// Non-root units whose parent code matches no unit one level up
    pub fn orphans(&self) -> Vec<&GeoUnit> {
        let mut orphans = Vec::new();

        for level in [GeoLevel::Province, GeoLevel::City, GeoLevel::Barangay] {
            let Some(parent_level) = level.parent() else {
                continue;
            };
            let parent_codes: HashSet<&str> = self
                .units(parent_level)
                .iter()
                .map(|unit| unit.code.as_str())
                .collect();

            orphans.extend(self.units(level).iter().filter(|unit| {
                unit.parent_code
                    .as_deref()
                    .map_or(true, |code| !parent_codes.contains(code))
            }));
        }

        orphans
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::sample_directory;

    fn names(units: &[&GeoUnit]) -> Vec<String> {
        units.iter().map(|u| u.name.clone()).collect()
    }

    #[test]
    fn test_find_is_exact_match() {
        let dir = sample_directory();
        assert!(dir.find(GeoLevel::Region, "REGION VII (CENTRAL VISAYAS)").is_some());
        assert!(dir.find(GeoLevel::Region, "REGION VII").is_none());
        assert!(dir.find(GeoLevel::Region, "region vii (central visayas)").is_none());
    }

    #[test]
    fn test_children_in_table_order() {
        let dir = sample_directory();
        let region = dir.find(GeoLevel::Region, "REGION VII (CENTRAL VISAYAS)").unwrap();

        let provinces = dir.children(region);
        assert_eq!(names(&provinces), vec!["BOHOL", "CEBU"]);
        assert!(provinces
            .iter()
            .all(|p| p.parent_code.as_deref() == Some(region.code.as_str())));
    }

    #[test]
    fn test_barangay_has_no_children() {
        let dir = sample_directory();
        let lahug = dir.find(GeoLevel::Barangay, "LAHUG").unwrap();
        assert!(dir.children(lahug).is_empty());
    }

    #[test]
    fn test_resolve_chain_valid() {
        let dir = sample_directory();
        let selection = SelectionState::complete(
            "REGION VII (CENTRAL VISAYAS)",
            "CEBU",
            "CEBU CITY",
            "LAHUG",
        );

        let chain = dir.resolve_chain(&selection).unwrap();
        assert_eq!(chain.barangay.code, "072217055");
        assert_eq!(chain.city.parent_code.as_deref(), Some(chain.province.code.as_str()));
    }

    #[test]
    fn test_resolve_chain_duplicate_barangay_name_resolves_within_city() {
        let dir = sample_directory();
        // BANILAD exists in both Cebu City and Mandaue City
        let selection = SelectionState::complete(
            "REGION VII (CENTRAL VISAYAS)",
            "CEBU",
            "MANDAUE CITY",
            "BANILAD",
        );

        let chain = dir.resolve_chain(&selection).unwrap();
        assert_eq!(chain.barangay.parent_code.as_deref(), Some("072230"));
    }

    #[test]
    fn test_resolve_chain_reports_first_invalid_level() {
        let dir = sample_directory();

        let unknown_region = SelectionState::complete("NOWHERE", "CEBU", "CEBU CITY", "LAHUG");
        assert_eq!(dir.resolve_chain(&unknown_region).unwrap_err(), GeoLevel::Region);

        let wrong_branch = SelectionState::complete(
            "REGION I (ILOCOS REGION)",
            "CEBU",
            "CEBU CITY",
            "LAHUG",
        );
        assert_eq!(dir.resolve_chain(&wrong_branch).unwrap_err(), GeoLevel::Province);

        let missing_barangay = SelectionState {
            barangay: None,
            ..SelectionState::complete("REGION VII (CENTRAL VISAYAS)", "CEBU", "CEBU CITY", "")
        };
        assert_eq!(dir.resolve_chain(&missing_barangay).unwrap_err(), GeoLevel::Barangay);
    }

    #[test]
    fn test_orphans_detected() {
        let dir = GeoDirectory::new(
            vec![GeoUnit {
                level: GeoLevel::Region,
                name: "R".to_string(),
                code: "01".to_string(),
                parent_code: None,
            }],
            vec![
                GeoUnit {
                    level: GeoLevel::Province,
                    name: "P".to_string(),
                    code: "0101".to_string(),
                    parent_code: Some("01".to_string()),
                },
                GeoUnit {
                    level: GeoLevel::Province,
                    name: "Lost".to_string(),
                    code: "9901".to_string(),
                    parent_code: Some("99".to_string()),
                },
            ],
            Vec::new(),
            Vec::new(),
        );

        assert_eq!(names(&dir.orphans()), vec!["Lost"]);
        assert!(sample_directory().orphans().is_empty());
    }

    #[test]
    fn test_empty_directory() {
        let dir = GeoDirectory::empty();
        assert!(dir.is_empty());
        assert_eq!(dir.counts(), DirectoryCounts::default());
        assert!(dir.find(GeoLevel::Region, "anything").is_none());
    }
}
