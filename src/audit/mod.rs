//! Audit logging
//!
//! Every tracker mutation is appended to a JSON-lines log with a timestamp,
//! the operation, the affected entity and, where useful, before/after values
//! and a short diff. Decode fallbacks at startup are logged as warnings.

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
