use super::directory::GeoDirectory;
use super::geo_unit::{GeoLevel, GeoUnit};
use super::selection::SelectionState;

/// Selection plus the option list currently offered at each level.
///
/// Parent names are looked up among the options of their own level, so a
/// name shared by two branches resolves to the branch already chosen above.
#[derive(Debug, Clone, Default)]
pub struct CascadeState {
    selection: SelectionState,
    regions: Vec<GeoUnit>,
    provinces: Vec<GeoUnit>,
    cities: Vec<GeoUnit>,
    barangays: Vec<GeoUnit>,
}

impl CascadeState {
    /// Fresh form: every region offered, nothing selected
    pub fn new(directory: &GeoDirectory) -> Self {
        Self {
            regions: directory.units(GeoLevel::Region).to_vec(),
            ..Self::default()
        }
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn options(&self, level: GeoLevel) -> &[GeoUnit] {
        match level {
            GeoLevel::Region => &self.regions,
            GeoLevel::Province => &self.provinces,
            GeoLevel::City => &self.cities,
            GeoLevel::Barangay => &self.barangays,
        }
    }

    fn options_mut(&mut self, level: GeoLevel) -> &mut Vec<GeoUnit> {
        match level {
            GeoLevel::Region => &mut self.regions,
            GeoLevel::Province => &mut self.provinces,
            GeoLevel::City => &mut self.cities,
            GeoLevel::Barangay => &mut self.barangays,
        }
    }

    /// Apply a typed or chosen value at `level`.
    ///
    /// Descendant values and option lists are cleared on every call. When the
    /// value matches one of the current options exactly, the next level's
    /// options are filled with that unit's children in table order. A value
    /// with no match is kept as typed and leaves the dependent lists empty.
    ///
    /// Returns the matched unit, if any.
    pub fn select(
        &mut self,
        directory: &GeoDirectory,
        level: GeoLevel,
        value: Option<String>,
    ) -> Option<GeoUnit> {
        self.selection.set(level, value);
        for descendant in level.descendants() {
            self.options_mut(descendant).clear();
        }

        let name = self.selection.get(level)?;
        let matched = self
            .options(level)
            .iter()
            .find(|unit| unit.name == name)
            .cloned()?;

        if let Some(child_level) = level.child() {
            let children = directory.children(&matched).into_iter().cloned().collect();
            *self.options_mut(child_level) = children;
        }

        Some(matched)
    }

    /// Back to the state of a fresh form
    pub fn reset(&mut self, directory: &GeoDirectory) {
        *self = Self::new(directory);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::sample_directory;

    fn option_names(state: &CascadeState, level: GeoLevel) -> Vec<&str> {
        state.options(level).iter().map(|u| u.name.as_str()).collect()
    }

    fn walk_to_lahug(dir: &GeoDirectory) -> CascadeState {
        let mut state = CascadeState::new(dir);
        state.select(dir, GeoLevel::Region, Some("REGION VII (CENTRAL VISAYAS)".into()));
        state.select(dir, GeoLevel::Province, Some("CEBU".into()));
        state.select(dir, GeoLevel::City, Some("CEBU CITY".into()));
        state.select(dir, GeoLevel::Barangay, Some("LAHUG".into()));
        state
    }

    #[test]
    fn test_new_offers_all_regions_only() {
        let dir = sample_directory();
        let state = CascadeState::new(&dir);

        assert_eq!(state.options(GeoLevel::Region).len(), dir.units(GeoLevel::Region).len());
        assert!(state.options(GeoLevel::Province).is_empty());
        assert_eq!(state.selection(), &SelectionState::default());
    }

    #[test]
    fn test_valid_region_offers_its_provinces_in_table_order() {
        let dir = sample_directory();
        let mut state = CascadeState::new(&dir);

        let region = state
            .select(&dir, GeoLevel::Region, Some("REGION VII (CENTRAL VISAYAS)".into()))
            .unwrap();

        assert_eq!(option_names(&state, GeoLevel::Province), vec!["BOHOL", "CEBU"]);
        assert!(state
            .options(GeoLevel::Province)
            .iter()
            .all(|p| p.parent_code.as_deref() == Some(region.code.as_str())));
    }

    #[test]
    fn test_unknown_region_clears_everything_below() {
        let dir = sample_directory();
        let mut state = walk_to_lahug(&dir);

        let matched = state.select(&dir, GeoLevel::Region, Some("ATLANTIS".into()));

        assert!(matched.is_none());
        assert_eq!(state.selection().region.as_deref(), Some("ATLANTIS"));
        for level in GeoLevel::Region.descendants() {
            assert!(state.options(level).is_empty());
            assert_eq!(state.selection().get(level), None);
        }
    }

    #[test]
    fn test_successful_walk_satisfies_chain() {
        let dir = sample_directory();
        let state = walk_to_lahug(&dir);

        let chain = dir.resolve_chain(state.selection()).unwrap();
        assert_eq!(chain.barangay.name, "LAHUG");
        assert_eq!(chain.barangay.parent_code.as_deref(), Some(chain.city.code.as_str()));
        assert_eq!(chain.city.parent_code.as_deref(), Some(chain.province.code.as_str()));
        assert_eq!(chain.province.parent_code.as_deref(), Some(chain.region.code.as_str()));
    }

    #[test]
    fn test_reselecting_province_clears_city_and_barangay() {
        let dir = sample_directory();
        let mut state = walk_to_lahug(&dir);

        state.select(&dir, GeoLevel::Province, Some("BOHOL".into()));

        assert_eq!(state.selection().city, None);
        assert_eq!(state.selection().barangay, None);
        assert!(state.options(GeoLevel::Barangay).is_empty());
        assert_eq!(option_names(&state, GeoLevel::City), vec!["TAGBILARAN CITY"]);
    }

    #[test]
    fn test_duplicate_barangay_name_stays_in_branch() {
        let dir = sample_directory();
        let mut state = CascadeState::new(&dir);
        state.select(&dir, GeoLevel::Region, Some("REGION VII (CENTRAL VISAYAS)".into()));
        state.select(&dir, GeoLevel::Province, Some("CEBU".into()));
        state.select(&dir, GeoLevel::City, Some("MANDAUE CITY".into()));

        let banilad = state
            .select(&dir, GeoLevel::Barangay, Some("BANILAD".into()))
            .unwrap();
        assert_eq!(banilad.parent_code.as_deref(), Some("072230"));
    }

    #[test]
    fn test_name_outside_current_options_does_not_match() {
        let dir = sample_directory();
        let mut state = CascadeState::new(&dir);
        state.select(&dir, GeoLevel::Region, Some("REGION I (ILOCOS REGION)".into()));

        // CEBU exists, but not under Ilocos
        assert!(state
            .select(&dir, GeoLevel::Province, Some("CEBU".into()))
            .is_none());
        assert!(state.options(GeoLevel::City).is_empty());
    }

    #[test]
    fn test_reset() {
        let dir = sample_directory();
        let mut state = walk_to_lahug(&dir);
        state.reset(&dir);

        assert_eq!(state.selection(), &SelectionState::default());
        assert!(!state.options(GeoLevel::Region).is_empty());
        assert!(state.options(GeoLevel::City).is_empty());
    }
}
