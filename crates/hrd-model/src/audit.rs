use serde::{Deserialize, Serialize};

use crate::ids::EmployeeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Error,
    Warning,
}

impl IssueSeverity {
    pub fn as_str(self) -> &'static str {
        match self {
            IssueSeverity::Error => "error",
            IssueSeverity::Warning => "warning",
        }
    }
}

/// A consistency issue found while auditing an employee record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditIssue {
    /// Stable rule code (e.g., "EM0001").
    pub code: String,
    /// Human-readable message describing the issue.
    pub message: String,
    /// Severity level.
    pub severity: IssueSeverity,
    /// Field name the issue is attached to (if applicable).
    pub field: Option<String>,
}

/// Audit report for a single employee record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditReport {
    pub employee_id: EmployeeId,
    pub issues: Vec<AuditIssue>,
}

impl AuditReport {
    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == IssueSeverity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == IssueSeverity::Warning)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}
