use chrono::NaiveDate;
use hrd_model::{DepartmentId, Employee};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("created_from {from} is after created_until {until}")]
    InvalidDateRange { from: NaiveDate, until: NaiveDate },
}

/// Sparse list-view filter criteria as entered by an administrator. Unset
/// options mean "no constraint from this field", never "exclude all".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeeFilter {
    pub department: Option<DepartmentId>,
    pub created_from: Option<NaiveDate>,
    pub created_until: Option<NaiveDate>,
}

impl EmployeeFilter {
    /// Translate the criteria into a predicate.
    ///
    /// Inverted date bounds are rejected up front instead of producing a
    /// predicate that can never match.
    pub fn build(&self) -> Result<EmployeePredicate, FilterError> {
        if let (Some(from), Some(until)) = (self.created_from, self.created_until)
            && from > until
        {
            return Err(FilterError::InvalidDateRange { from, until });
        }

        let mut clauses = Vec::new();
        if let Some(department) = self.department {
            clauses.push(Clause::Department(department));
        }
        if let Some(from) = self.created_from {
            clauses.push(Clause::CreatedFrom(from));
        }
        if let Some(until) = self.created_until {
            clauses.push(Clause::CreatedUntil(until));
        }
        Ok(EmployeePredicate { clauses })
    }
}

/// One conjunct of an employee predicate. Exposed so an external data layer
/// can translate the predicate into its own query fragment instead of
/// filtering in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Clause {
    Department(DepartmentId),
    /// Record creation date on or after the bound (date-only comparison).
    CreatedFrom(NaiveDate),
    /// Record creation date on or before the bound (date-only comparison).
    CreatedUntil(NaiveDate),
}

impl Clause {
    fn matches(&self, employee: &Employee) -> bool {
        match self {
            Clause::Department(department) => employee.department_id == *department,
            Clause::CreatedFrom(from) => employee.created_at.date() >= *from,
            Clause::CreatedUntil(until) => employee.created_at.date() <= *until,
        }
    }
}

/// Conjunction of clauses over employee records. An empty predicate matches
/// every record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeePredicate {
    clauses: Vec<Clause>,
}

impl EmployeePredicate {
    pub fn matches(&self, employee: &Employee) -> bool {
        self.clauses.iter().all(|clause| clause.matches(employee))
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn is_match_all(&self) -> bool {
        self.clauses.is_empty()
    }
}
