use serde::{Deserialize, Serialize};

use crate::models::{CanonicalStage, Priority};

/// A raw status or priority value as received from an upstream tracker.
///
/// Trackers disagree on representation: some send workflow integers, others
/// send free-text status names in whatever casing the board admin typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawField {
    Int(i64),
    Text(String),
}

impl RawField {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawField::Text(s) => Some(s),
            RawField::Int(_) => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            RawField::Int(n) => Some(*n),
            RawField::Text(_) => None,
        }
    }
}

impl From<i64> for RawField {
    fn from(n: i64) -> Self {
        RawField::Int(n)
    }
}

impl From<&str> for RawField {
    fn from(s: &str) -> Self {
        RawField::Text(s.to_string())
    }
}

/// Ticket record as delivered by the fetch layer.
///
/// Read-only within this core: tickets arrive fully formed on each page
/// activation and are discarded when the view unmounts. Timestamps are epoch
/// seconds; missing or unparsable upstream dates are None.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub id: i64,
    pub title: String,
    pub raw_status: Option<RawField>,
    pub raw_priority: Option<RawField>,
    pub project_id: Option<i64>,
    pub epic_key: Option<String>,
    /// Tracker key such as "SKP-123"; the prefix identifies the owning team
    /// when no explicit project linkage exists.
    pub key: Option<String>,
    pub assignee: Option<String>,
    /// Free-text team field, last-resort team linkage
    pub team: Option<String>,
    pub issue_type: Option<String>,
    pub delivery_points: f64,
    pub complexity: u8,
    pub risk: u8,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
    pub resolved_at: Option<i64>,
    pub is_rollback: bool,
}

impl Ticket {
    /// Minimal ticket for construction in callers and tests; everything
    /// optional starts empty.
    pub fn new(id: i64, title: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            raw_status: None,
            raw_priority: None,
            project_id: None,
            epic_key: None,
            key: None,
            assignee: None,
            team: None,
            issue_type: None,
            delivery_points: 0.0,
            complexity: 0,
            risk: 0,
            created_at: None,
            updated_at: None,
            resolved_at: None,
            is_rollback: false,
        }
    }

    /// Tracker-key prefix ("SKP-123" -> "SKP"), if a key is present
    pub fn key_prefix(&self) -> Option<&str> {
        let key = self.key.as_deref()?;
        let dash = key.find('-')?;
        if dash == 0 {
            return None;
        }
        Some(&key[..dash])
    }

    /// Incident-side categorization: issue types containing incident, bug or
    /// defect (case-insensitive) are incidents; everything else is dev work.
    pub fn is_incident(&self) -> bool {
        match &self.issue_type {
            Some(t) => {
                let t = t.to_lowercase();
                t.contains("incident") || t.contains("bug") || t.contains("defect")
            }
            None => false,
        }
    }
}

/// Ticket plus its resolved canonical stage and priority ordinal.
///
/// This is the shape the filter pipeline, boards, and aggregations consume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotatedTicket {
    pub ticket: Ticket,
    pub stage: CanonicalStage,
    pub priority: Priority,
}

impl AnnotatedTicket {
    /// Done for workload purposes: reached stage 11, or resolved in an
    /// external system (resolution timestamp present). Counted once even
    /// when both hold.
    pub fn is_done(&self) -> bool {
        self.stage == CanonicalStage::Done || self.ticket.resolved_at.is_some()
    }
}
