pub mod audit;
pub mod employee;
pub mod error;
pub mod geo;
pub mod ids;
pub mod org;

pub use audit::{AuditIssue, AuditReport, IssueSeverity};
pub use employee::Employee;
pub use error::{ModelError, Result};
pub use geo::{City, Country, MAX_ISO_CODE_LEN, MAX_PHONE_CODE_LEN, State};
pub use ids::{CityId, CountryId, DepartmentId, EmployeeId, StateId, TeamId, UserId};
pub use org::{Department, Team, slugify};
