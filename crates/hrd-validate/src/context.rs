use hrd_core::GeoDirectory;
use hrd_model::Department;

/// Borrowed lookup context for one audit pass.
#[derive(Clone, Copy)]
pub struct AuditContext<'a> {
    pub geo: &'a dyn GeoDirectory,
    /// Known departments. `None` means the department set was not supplied
    /// and the department reference check is skipped.
    pub departments: Option<&'a [Department]>,
}

impl<'a> AuditContext<'a> {
    pub fn new(geo: &'a dyn GeoDirectory) -> Self {
        Self {
            geo,
            departments: None,
        }
    }

    pub fn with_departments(mut self, departments: &'a [Department]) -> Self {
        self.departments = Some(departments);
        self
    }
}
