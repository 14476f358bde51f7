mod cascade;
mod directory;
mod geo_unit;
mod selection;

pub use cascade::CascadeState;
pub use directory::{DirectoryCounts, GeoDirectory, ResolvedChain};
pub use geo_unit::{BarangayRecord, CityRecord, GeoLevel, GeoUnit, ProvinceRecord, RegionRecord};
pub use selection::SelectionState;
