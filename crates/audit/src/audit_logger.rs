//! AuditLogger - Audit trail of profile changes and access decisions

use rbac::{Capability, DenyReason, GuardDecision, PermissionSet, ProfileChange};
use serde::{Deserialize, Serialize};
use shared::AuditConfig;
use std::collections::VecDeque;
use thiserror::Error;

/// Audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    pub timestamp: String,
    pub event_type: AuditEventType,
    /// Role string of the user at the time, "none" when signed out
    pub role: String,
    /// Guarded view or control the decision was about
    pub subject: Option<String>,
    pub success: bool,
    pub reason: Option<String>,
}

/// Types of audit events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditEventType {
    ProfileChange,
    AccessGranted,
    AccessDenied,
}

/// Errors reading the audit trail
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("Audit log requires canViewAuditLogs")]
    AccessDenied,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Bounded in-memory audit logger
#[derive(Debug)]
pub struct AuditLogger {
    entries: VecDeque<AuditEntry>,
    max_entries: usize,
}

impl AuditLogger {
    /// Create a new AuditLogger
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            max_entries,
        }
    }

    pub fn from_config(config: &AuditConfig) -> Self {
        Self::new(config.max_entries)
    }

    /// Log an audit entry, dropping the oldest when full
    pub fn log(&mut self, entry: AuditEntry) {
        if self.max_entries == 0 {
            return;
        }
        while self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Log a session profile transition; no-op when the role did not change
    pub fn log_profile_change(&mut self, change: &ProfileChange) {
        if !change.role_changed() {
            return;
        }

        let from = change
            .previous_role
            .as_ref()
            .map(|r| r.as_str())
            .unwrap_or("none");
        let to = change
            .current_role
            .as_ref()
            .map(|r| r.as_str().to_string())
            .unwrap_or_else(|| "none".to_string());

        self.log(AuditEntry {
            timestamp: chrono::Utc::now().to_rfc3339(),
            event_type: AuditEventType::ProfileChange,
            role: to,
            subject: None,
            success: true,
            reason: Some(format!("Switched from '{}'", from)),
        });
    }

    /// Log the outcome of an access guard
    pub fn log_guard_decision(&mut self, role: &str, subject: &str, decision: &GuardDecision) {
        let reason = match decision {
            GuardDecision::Protected => None,
            GuardDecision::Fallback(reason) => Some(*reason),
        };
        self.log_access(role, subject, reason.is_none(), reason.map(|r| r.to_string()).as_deref());
    }

    /// Log an access check on a view or control
    pub fn log_access(&mut self, role: &str, subject: &str, success: bool, reason: Option<&str>) {
        self.log(AuditEntry {
            timestamp: chrono::Utc::now().to_rfc3339(),
            event_type: if success {
                AuditEventType::AccessGranted
            } else {
                AuditEventType::AccessDenied
            },
            role: role.to_string(),
            subject: Some(subject.to_string()),
            success,
            reason: reason.map(|s| s.to_string()),
        });
    }

    fn ensure_reader(permissions: &PermissionSet) -> Result<(), AuditError> {
        if permissions.allows(Capability::ViewAuditLogs) {
            Ok(())
        } else {
            Err(AuditError::AccessDenied)
        }
    }

    /// Get recent entries, newest first
    pub fn get_recent(
        &self,
        permissions: &PermissionSet,
        limit: usize,
    ) -> Result<Vec<&AuditEntry>, AuditError> {
        Self::ensure_reader(permissions)?;
        Ok(self.entries.iter().rev().take(limit).collect())
    }

    /// Get recent denials, newest first
    pub fn get_recent_denials(
        &self,
        permissions: &PermissionSet,
        limit: usize,
    ) -> Result<Vec<&AuditEntry>, AuditError> {
        Self::ensure_reader(permissions)?;
        Ok(self
            .entries
            .iter()
            .rev()
            .filter(|e| !e.success)
            .take(limit)
            .collect())
    }

    /// Get statistics
    pub fn get_stats(&self) -> AuditStats {
        let total = self.entries.len();
        let denials = self.entries.iter().filter(|e| !e.success).count();
        let no_profile = DenyReason::NoProfile.to_string();
        let anonymous_denials = self
            .entries
            .iter()
            .filter(|e| e.reason.as_deref() == Some(no_profile.as_str()))
            .count();

        AuditStats {
            total_entries: total,
            denial_count: denials,
            anonymous_denial_count: anonymous_denials,
        }
    }

    /// Export as JSON
    pub fn export_json(&self, permissions: &PermissionSet) -> Result<serde_json::Value, AuditError> {
        Self::ensure_reader(permissions)?;
        Ok(serde_json::to_value(self.entries.iter().collect::<Vec<_>>())?)
    }
}

/// Audit statistics
#[derive(Debug, Clone)]
pub struct AuditStats {
    pub total_entries: usize,
    pub denial_count: usize,
    /// Denials because nobody was signed in
    pub anonymous_denial_count: usize,
}

impl Default for AuditLogger {
    fn default() -> Self {
        Self::from_config(&AuditConfig::default())
    }
}
