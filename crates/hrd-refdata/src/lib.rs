#![deny(unsafe_code)]

pub mod csv;
pub mod error;
pub mod hash;
pub mod manifest;
pub mod registry;

pub use crate::csv::cities::parse_cities_csv;
pub use crate::csv::countries::parse_countries_csv;
pub use crate::csv::states::parse_states_csv;
pub use crate::error::RefdataError;
pub use crate::hash::sha256_hex;
pub use crate::manifest::{Manifest, ManifestFile, Pins};
pub use crate::registry::{GeoRegistry, MANIFEST_SCHEMA, Orphan, VerifySummary};
