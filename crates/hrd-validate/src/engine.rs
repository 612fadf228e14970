//! Consistency checks over stored employee records.
//!
//! The edit-form cascade guarantees geographic agreement only at selection
//! time; nothing re-checks records once they are stored. This engine runs
//! the missing data-layer pass: every check is keyed by a stable rule code
//! and produces structured issues rather than failing fast.

use hrd_model::{AuditIssue, AuditReport, Employee, IssueSeverity};
use tracing::debug;

use crate::context::AuditContext;

/// State does not belong to the selected country.
pub const RULE_STATE_COUNTRY: &str = "EM0001";
/// City does not belong to the selected state.
pub const RULE_CITY_STATE: &str = "EM0002";
/// Geographic reference points at no known record.
pub const RULE_DANGLING_GEO: &str = "EM0003";
/// Department reference points at no known department.
pub const RULE_UNKNOWN_DEPARTMENT: &str = "EM0004";
/// Required text field is blank (EM0101..EM0105, one code per field).
pub const RULE_BLANK_FIELD_BASE: &str = "EM01";
/// Hire date precedes date of birth.
pub const RULE_HIRED_BEFORE_BIRTH: &str = "EM0201";

/// Audit a single employee record against the reference data.
pub fn audit_employee(employee: &Employee, context: &AuditContext<'_>) -> AuditReport {
    let mut issues = Vec::new();

    check_geography(employee, context, &mut issues);
    check_department(employee, context, &mut issues);
    check_blank_fields(employee, &mut issues);
    check_dates(employee, &mut issues);

    debug!(
        employee = employee.id.get(),
        issues = issues.len(),
        "audited employee record"
    );

    AuditReport {
        employee_id: employee.id,
        issues,
    }
}

/// Audit a batch of records, returning one report per record (clean reports
/// included, so callers can tell "checked and clean" from "not checked").
pub fn audit_employees(employees: &[Employee], context: &AuditContext<'_>) -> Vec<AuditReport> {
    employees
        .iter()
        .map(|employee| audit_employee(employee, context))
        .collect()
}

fn check_geography(employee: &Employee, context: &AuditContext<'_>, issues: &mut Vec<AuditIssue>) {
    if context.geo.country(employee.country_id).is_none() {
        issues.push(issue(
            RULE_DANGLING_GEO,
            IssueSeverity::Error,
            "country_id",
            format!("unknown country reference {}", employee.country_id),
        ));
    }

    match context.geo.state(employee.state_id) {
        None => issues.push(issue(
            RULE_DANGLING_GEO,
            IssueSeverity::Error,
            "state_id",
            format!("unknown state reference {}", employee.state_id),
        )),
        Some(state) if state.country_id != employee.country_id => issues.push(issue(
            RULE_STATE_COUNTRY,
            IssueSeverity::Error,
            "state_id",
            format!(
                "state {} belongs to country {}, not {}",
                state.id, state.country_id, employee.country_id
            ),
        )),
        Some(_) => {}
    }

    match context.geo.city(employee.city_id) {
        None => issues.push(issue(
            RULE_DANGLING_GEO,
            IssueSeverity::Error,
            "city_id",
            format!("unknown city reference {}", employee.city_id),
        )),
        Some(city) if city.state_id != employee.state_id => issues.push(issue(
            RULE_CITY_STATE,
            IssueSeverity::Error,
            "city_id",
            format!(
                "city {} belongs to state {}, not {}",
                city.id, city.state_id, employee.state_id
            ),
        )),
        Some(_) => {}
    }
}

fn check_department(employee: &Employee, context: &AuditContext<'_>, issues: &mut Vec<AuditIssue>) {
    let Some(departments) = context.departments else {
        return;
    };
    if !departments
        .iter()
        .any(|department| department.id == employee.department_id)
    {
        issues.push(issue(
            RULE_UNKNOWN_DEPARTMENT,
            IssueSeverity::Error,
            "department_id",
            format!("unknown department reference {}", employee.department_id),
        ));
    }
}

fn check_blank_fields(employee: &Employee, issues: &mut Vec<AuditIssue>) {
    let fields = [
        ("first_name", employee.first_name.as_str(), "01"),
        ("middle_name", employee.middle_name.as_str(), "02"),
        ("last_name", employee.last_name.as_str(), "03"),
        ("address", employee.address.as_str(), "04"),
        ("zip_code", employee.zip_code.as_str(), "05"),
    ];
    for (field, value, suffix) in fields {
        if value.trim().is_empty() {
            issues.push(issue(
                &format!("{RULE_BLANK_FIELD_BASE}{suffix}"),
                IssueSeverity::Warning,
                field,
                format!("{field} is blank"),
            ));
        }
    }
}

fn check_dates(employee: &Employee, issues: &mut Vec<AuditIssue>) {
    if employee.date_hired < employee.date_of_birth {
        issues.push(issue(
            RULE_HIRED_BEFORE_BIRTH,
            IssueSeverity::Error,
            "date_hired",
            format!(
                "date_hired {} precedes date_of_birth {}",
                employee.date_hired, employee.date_of_birth
            ),
        ));
    }
}

fn issue(code: &str, severity: IssueSeverity, field: &str, message: String) -> AuditIssue {
    AuditIssue {
        code: code.to_string(),
        message,
        severity,
        field: Some(field.to_string()),
    }
}
