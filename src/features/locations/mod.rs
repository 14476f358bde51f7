//! Philippine location reference data and cascading selection.
//!
//! Four-level hierarchy loaded once at startup from static JSON tables:
//!
//! - Level 1: Regions
//! - Level 2: Provinces
//! - Level 3: Cities and municipalities
//! - Level 4: Barangays
//!
//! Each listing takes the exact name of the parent unit and returns its
//! children in table order. Unknown names yield an empty list.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/locations/regions` | List all regions |
//! | GET | `/api/locations/provinces?region=` | Provinces of a region |
//! | GET | `/api/locations/cities?province=` | Cities of a province |
//! | GET | `/api/locations/barangays?city=` | Barangays of a city |
//! | GET | `/api/locations/status` | Reference data load report |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::LocationService;
