//! # assetdesk Audit
//!
//! Bounded audit trail of session changes and access decisions. Reading it
//! requires the `canViewAuditLogs` capability.

mod audit_logger;

pub use audit_logger::{AuditEntry, AuditError, AuditEventType, AuditLogger, AuditStats};
