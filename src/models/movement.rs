use serde::{Deserialize, Serialize};

use crate::models::RawField;

/// A single ticket movement event: either a support-tier change (escalation
/// or de-escalation) or a stage regression (rollback).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movement {
    pub ticket_key: String,
    /// Support tier before the move, e.g. "L1" or 1
    pub from_level: Option<RawField>,
    /// Support tier after the move
    pub to_level: Option<RawField>,
    pub moved_at: Option<i64>,
    /// Audit justification; required at the UI-workflow level for rollbacks
    /// but never enforced by the data model itself.
    pub justification: Option<String>,
    pub is_rollback: bool,
}

impl Movement {
    pub fn new(ticket_key: &str) -> Self {
        Self {
            ticket_key: ticket_key.to_string(),
            from_level: None,
            to_level: None,
            moved_at: None,
            justification: None,
            is_rollback: false,
        }
    }

    /// A rollback is audit-resolved only once it carries a non-empty
    /// justification. Non-rollback movements need no justification.
    pub fn is_audit_resolved(&self) -> bool {
        if !self.is_rollback {
            return true;
        }
        self.justification
            .as_deref()
            .map(|j| !j.trim().is_empty())
            .unwrap_or(false)
    }
}
