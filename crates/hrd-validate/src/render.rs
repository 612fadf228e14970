use hrd_model::AuditReport;

/// Render a report as a stable, line-oriented summary for logs and review
/// queues.
pub fn render_summary(report: &AuditReport) -> String {
    let mut out = format!(
        "employee {}: {} error(s), {} warning(s)",
        report.employee_id,
        report.error_count(),
        report.warning_count()
    );
    for issue in &report.issues {
        out.push('\n');
        out.push_str(&format!(
            "  {} {} [{}] {}",
            issue.code,
            issue.severity.as_str(),
            issue.field.as_deref().unwrap_or("-"),
            issue.message
        ));
    }
    out
}
