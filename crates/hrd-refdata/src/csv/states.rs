#![deny(unsafe_code)]

use std::path::Path;

use hrd_model::{CountryId, State, StateId};

use crate::csv::{field, id_field, read_records};
use crate::error::RefdataError;

/// Parse a states seed file with columns `id,name,country_id`.
pub fn parse_states_csv(path: &Path) -> Result<Vec<State>, RefdataError> {
    let (headers, rows) = read_records(path)?;

    let mut results = Vec::new();
    for row in &rows {
        let id = id_field(&headers, row, "id", path)?;
        let name = field(&headers, row, "name")
            .ok_or_else(|| RefdataError::csv(path, format!("missing name for state {id}")))?;
        let country_id = id_field(&headers, row, "country_id", path)?;

        results.push(State {
            id: StateId::new(id),
            name,
            country_id: CountryId::new(country_id),
        });
    }
    Ok(results)
}
