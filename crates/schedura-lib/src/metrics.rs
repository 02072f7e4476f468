// ==============
// crates/schedura-lib/src/metrics.rs

//! Central place for metric keys
pub const SESSION_RESOLVED: &str = "session.resolved";
pub const SESSION_READ_FAILED: &str = "session.read_failed";
pub const FORM_REJECTED: &str = "form.rejected";
pub const SUBMIT_ACCEPTED: &str = "submit.accepted";
pub const SUBMIT_FAILED: &str = "submit.failed";
pub const LOGOUT: &str = "logout";
pub const TASKS_CHANGED: &str = "tasks.changed";
