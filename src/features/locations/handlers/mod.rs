pub mod location_handler;

pub use location_handler::{
    __path_get_status, __path_list_barangays, __path_list_cities, __path_list_provinces,
    __path_list_regions, get_status, list_barangays, list_cities, list_provinces, list_regions,
};
