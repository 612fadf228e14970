use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::ids::{CityId, CountryId, DepartmentId, EmployeeId, StateId, TeamId};

/// An employee record.
///
/// The geographic references are denormalized: `state_id` and `city_id` are
/// stored directly rather than derived from `country_id`, so agreement
/// between them is maintained by the selection cascade at edit time and
/// audited out-of-band, not enforced by this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub date_hired: NaiveDate,
    pub address: String,
    pub zip_code: String,
    pub country_id: CountryId,
    pub state_id: StateId,
    pub city_id: CityId,
    pub department_id: DepartmentId,
    #[serde(default)]
    pub team_id: Option<TeamId>,
    pub created_at: NaiveDateTime,
}

impl Employee {
    /// Display name assembled from the name parts, skipping blank segments.
    pub fn full_name(&self) -> String {
        let mut name = String::new();
        for part in [&self.first_name, &self.middle_name, &self.last_name] {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            if !name.is_empty() {
                name.push(' ');
            }
            name.push_str(part);
        }
        name
    }

    /// Title shown for this record in global search results.
    pub fn search_title(&self) -> &str {
        &self.last_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Employee {
        Employee {
            id: EmployeeId::new(1),
            first_name: "Ada".to_string(),
            middle_name: String::new(),
            last_name: "Obi".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 4, 2).unwrap(),
            date_hired: NaiveDate::from_ymd_opt(2020, 1, 6).unwrap(),
            address: "12 Marina Rd".to_string(),
            zip_code: "101241".to_string(),
            country_id: CountryId::new(1),
            state_id: StateId::new(5),
            city_id: CityId::new(50),
            department_id: DepartmentId::new(4),
            team_id: None,
            created_at: NaiveDate::from_ymd_opt(2024, 1, 15)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap(),
        }
    }

    #[test]
    fn full_name_skips_blank_middle_name() {
        let employee = sample();
        assert_eq!(employee.full_name(), "Ada Obi");
        assert_eq!(employee.search_title(), "Obi");
    }

    #[test]
    fn employee_serializes() {
        let employee = sample();
        let json = serde_json::to_string(&employee).expect("serialize employee");
        let round: Employee = serde_json::from_str(&json).expect("deserialize employee");
        assert_eq!(round, employee);
    }
}
