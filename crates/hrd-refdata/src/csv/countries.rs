#![deny(unsafe_code)]

use std::path::Path;

use hrd_model::{Country, CountryId};

use crate::csv::{field, id_field, read_records};
use crate::error::RefdataError;

/// Parse a countries seed file with columns `id,name,iso_code,phone_code`.
pub fn parse_countries_csv(path: &Path) -> Result<Vec<Country>, RefdataError> {
    let (headers, rows) = read_records(path)?;

    let mut results = Vec::new();
    for row in &rows {
        let id = id_field(&headers, row, "id", path)?;
        let name = field(&headers, row, "name")
            .ok_or_else(|| RefdataError::csv(path, format!("missing name for country {id}")))?;
        let iso_code = field(&headers, row, "iso_code")
            .ok_or_else(|| RefdataError::csv(path, format!("missing iso_code for country {id}")))?;
        let phone_code = field(&headers, row, "phone_code").ok_or_else(|| {
            RefdataError::csv(path, format!("missing phone_code for country {id}"))
        })?;

        let country = Country::new(CountryId::new(id), name, iso_code, phone_code)
            .map_err(|e| RefdataError::csv(path, format!("country {id}: {e}")))?;
        results.push(country);
    }
    Ok(results)
}
