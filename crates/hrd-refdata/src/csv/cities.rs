#![deny(unsafe_code)]

use std::path::Path;

use hrd_model::{City, CityId, StateId};

use crate::csv::{field, id_field, read_records};
use crate::error::RefdataError;

/// Parse a cities seed file with columns `id,name,state_id`.
pub fn parse_cities_csv(path: &Path) -> Result<Vec<City>, RefdataError> {
    let (headers, rows) = read_records(path)?;

    let mut results = Vec::new();
    for row in &rows {
        let id = id_field(&headers, row, "id", path)?;
        let name = field(&headers, row, "name")
            .ok_or_else(|| RefdataError::csv(path, format!("missing name for city {id}")))?;
        let state_id = id_field(&headers, row, "state_id", path)?;

        results.push(City {
            id: CityId::new(id),
            name,
            state_id: StateId::new(state_id),
        });
    }
    Ok(results)
}
