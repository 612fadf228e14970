use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::ids::{CityId, CountryId, StateId};

/// Maximum length of an ISO country code as stored by the admin forms.
pub const MAX_ISO_CODE_LEN: usize = 3;

/// Maximum length of an international dialling prefix.
pub const MAX_PHONE_CODE_LEN: usize = 5;

/// Top level of the geographic hierarchy. Owns zero or more states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub id: CountryId,
    pub name: String,
    /// ISO 3166-1 alpha code (two or three letters).
    pub iso_code: String,
    /// International dialling prefix, digits only.
    pub phone_code: String,
}

impl Country {
    /// Build a country record, enforcing the field constraints the admin
    /// form applies on entry: non-empty name, alphabetic ISO code of at
    /// most three characters, numeric phone code of at most five digits.
    pub fn new(
        id: CountryId,
        name: impl Into<String>,
        iso_code: impl Into<String>,
        phone_code: impl Into<String>,
    ) -> Result<Self, ModelError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ModelError::EmptyField { field: "name" });
        }
        let iso_code = iso_code.into().trim().to_ascii_uppercase();
        if iso_code.is_empty()
            || iso_code.len() > MAX_ISO_CODE_LEN
            || !iso_code.bytes().all(|b| b.is_ascii_alphabetic())
        {
            return Err(ModelError::InvalidIsoCode(iso_code));
        }
        let phone_code = phone_code.into().trim().to_string();
        if phone_code.is_empty()
            || phone_code.len() > MAX_PHONE_CODE_LEN
            || !phone_code.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(ModelError::InvalidPhoneCode(phone_code));
        }
        Ok(Self {
            id,
            name,
            iso_code,
            phone_code,
        })
    }
}

/// Second level of the hierarchy. Belongs to exactly one country and owns
/// zero or more cities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    pub id: StateId,
    pub name: String,
    pub country_id: CountryId,
}

/// Leaf of the hierarchy. Belongs to exactly one state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: CityId,
    pub name: String,
    pub state_id: StateId,
}
