mod location_dto;

pub use location_dto::{
    BarangaysQuery, CitiesQuery, DirectoryStatusDto, GeoUnitResponseDto, ProvincesQuery,
};
