pub mod context;
pub mod engine;
pub mod render;

pub use context::AuditContext;
pub use engine::{
    RULE_CITY_STATE, RULE_DANGLING_GEO, RULE_HIRED_BEFORE_BIRTH, RULE_STATE_COUNTRY,
    RULE_UNKNOWN_DEPARTMENT, audit_employee, audit_employees,
};
pub use render::render_summary;
