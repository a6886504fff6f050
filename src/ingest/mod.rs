//! Tolerant decoding of upstream fetch-layer records
//!
//! The upstream trackers disagree on casing: the same field arrives as
//! `deliveryPoints`, `delivery_points`, or `DeliveryPoints` depending on
//! which service produced the record. Every field is probed camelCase first,
//! then snake_case, then PascalCase, then defaults. Collections arrive as a
//! bare JSON array or wrapped in an `{"items": [...]}` envelope.
//!
//! Decoding is all-or-nothing per snapshot: one malformed record fails the
//! whole decode, matching the page-level join that either has every
//! collection or renders nothing.

use serde_json::Value;
use thiserror::Error;

use crate::models::{Movement, Project, RawField, Team, Ticket};
use crate::utils::parse_ts;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("invalid JSON document: {0}")]
    BadDocument(#[from] serde_json::Error),
    #[error("expected an array or an items envelope in section '{0}'")]
    NotACollection(String),
    #[error("{kind} record missing id: {record}")]
    MissingId { kind: &'static str, record: String },
    #[error("{kind} record is not an object: {record}")]
    NotAnObject { kind: &'static str, record: String },
}

/// Probe an object for the first present, non-null field among `names`
fn pick<'a>(value: &'a Value, names: &[&str]) -> Option<&'a Value> {
    for name in names {
        match value.get(name) {
            Some(Value::Null) | None => continue,
            Some(v) => return Some(v),
        }
    }
    None
}

fn pick_str(value: &Value, names: &[&str]) -> Option<String> {
    pick(value, names).and_then(|v| v.as_str()).map(|s| s.to_string())
}

fn pick_i64(value: &Value, names: &[&str]) -> Option<i64> {
    pick(value, names).and_then(|v| v.as_i64())
}

fn pick_f64(value: &Value, names: &[&str]) -> f64 {
    pick(value, names).and_then(|v| v.as_f64()).unwrap_or(0.0)
}

fn pick_u8(value: &Value, names: &[&str]) -> u8 {
    pick(value, names)
        .and_then(|v| v.as_u64())
        .and_then(|n| u8::try_from(n).ok())
        .unwrap_or(0)
}

fn pick_bool(value: &Value, names: &[&str]) -> bool {
    pick(value, names).and_then(|v| v.as_bool()).unwrap_or(false)
}

/// Raw status/priority field: keep integers and strings as-is, drop the rest
fn pick_raw(value: &Value, names: &[&str]) -> Option<RawField> {
    match pick(value, names)? {
        Value::Number(n) => n.as_i64().map(RawField::Int),
        Value::String(s) => Some(RawField::Text(s.clone())),
        _ => None,
    }
}

/// Timestamp field: ISO8601 strings or already-epoch integers
fn pick_date(value: &Value, names: &[&str]) -> Option<i64> {
    match pick(value, names)? {
        Value::String(s) => parse_ts(s),
        Value::Number(n) => n.as_i64(),
        _ => None,
    }
}

/// Unwrap a collection: a bare array, or an `{"items": [...]}` envelope
pub fn items<'a>(value: &'a Value, section: &str) -> Result<&'a Vec<Value>, IngestError> {
    if let Value::Array(arr) = value {
        return Ok(arr);
    }
    if let Some(Value::Array(arr)) = value.get("items") {
        return Ok(arr);
    }
    Err(IngestError::NotACollection(section.to_string()))
}

fn require_object<'a>(
    value: &'a Value,
    kind: &'static str,
) -> Result<&'a Value, IngestError> {
    if value.is_object() {
        Ok(value)
    } else {
        Err(IngestError::NotAnObject {
            kind,
            record: value.to_string(),
        })
    }
}

fn require_id(value: &Value, kind: &'static str) -> Result<i64, IngestError> {
    pick_i64(value, &["id", "Id", "ID"]).ok_or_else(|| IngestError::MissingId {
        kind,
        record: value.to_string(),
    })
}

pub fn ticket_from_value(value: &Value) -> Result<Ticket, IngestError> {
    let value = require_object(value, "ticket")?;
    let id = require_id(value, "ticket")?;
    Ok(Ticket {
        id,
        title: pick_str(value, &["title", "summary", "Title"]).unwrap_or_default(),
        raw_status: pick_raw(value, &["status", "Status"]),
        raw_priority: pick_raw(value, &["priority", "Priority"]),
        project_id: pick_i64(value, &["projectId", "project_id", "ProjectId"]),
        epic_key: pick_str(value, &["epicKey", "epic_key", "EpicKey"]),
        key: pick_str(value, &["jiraKey", "jira_key", "JiraKey", "key"]),
        assignee: pick_str(value, &["assignedTo", "assigned_to", "AssignedTo", "assignee"]),
        team: pick_str(value, &["team", "teamName", "team_name", "Team"]),
        issue_type: pick_str(value, &["issueType", "issue_type", "IssueType", "type"]),
        delivery_points: pick_f64(value, &["deliveryPoints", "delivery_points", "DeliveryPoints"]),
        complexity: pick_u8(value, &["complexity", "Complexity"]),
        risk: pick_u8(value, &["risk", "Risk"]),
        created_at: pick_date(value, &["createdAt", "created_at", "CreatedAt"]),
        updated_at: pick_date(
            value,
            &["updatedAt", "updated_at", "UpdatedAt", "jiraUpdatedAt", "jira_updated_at"],
        ),
        resolved_at: pick_date(value, &["resolvedAt", "resolved_at", "ResolvedAt"]),
        is_rollback: pick_bool(value, &["isRollback", "is_rollback", "IsRollback"]),
    })
}

pub fn team_from_value(value: &Value) -> Result<Team, IngestError> {
    let value = require_object(value, "team")?;
    let id = require_id(value, "team")?;
    let members = pick(value, &["members", "Members"])
        .and_then(|v| v.as_array())
        .map(|arr| {
            arr.iter()
                .filter_map(|m| m.as_str())
                .map(|m| m.to_string())
                .collect()
        })
        .unwrap_or_default();
    Ok(Team {
        id,
        name: pick_str(value, &["name", "Name"]).unwrap_or_default(),
        key_prefix: pick_str(value, &["keyPrefix", "key_prefix", "KeyPrefix"]),
        lead: pick_str(value, &["lead", "Lead"]),
        members,
    })
}

pub fn project_from_value(value: &Value) -> Result<Project, IngestError> {
    let value = require_object(value, "project")?;
    let id = require_id(value, "project")?;
    Ok(Project {
        id,
        name: pick_str(value, &["name", "Name"]).unwrap_or_default(),
        key: pick_str(value, &["jiraKey", "jira_key", "JiraKey", "key"]),
        team_id: pick_i64(value, &["teamId", "team_id", "TeamId"]),
        planned_points: pick_f64(value, &["plannedPoints", "planned_points", "PlannedPoints"]),
        completed_points: pick_f64(
            value,
            &["completedPoints", "completed_points", "CompletedPoints"],
        ),
    })
}

pub fn movement_from_value(value: &Value) -> Result<Movement, IngestError> {
    let value = require_object(value, "movement")?;
    Ok(Movement {
        ticket_key: pick_str(value, &["ticketKey", "ticket_key", "TicketKey", "jiraKey"])
            .unwrap_or_default(),
        from_level: pick_raw(value, &["fromLevel", "from_level", "FromLevel"]),
        to_level: pick_raw(value, &["toLevel", "to_level", "ToLevel"]),
        moved_at: pick_date(value, &["movedAt", "moved_at", "MovedAt", "createdAt"]),
        justification: pick_str(value, &["justification", "Justification"]),
        is_rollback: pick_bool(value, &["isRollback", "is_rollback", "IsRollback"]),
    })
}

/// Everything one page activation works from
#[derive(Debug, Default)]
pub struct Snapshot {
    pub teams: Vec<Team>,
    pub projects: Vec<Project>,
    pub tickets: Vec<Ticket>,
    pub movements: Vec<Movement>,
}

fn decode_section<T>(
    document: &Value,
    section: &str,
    decode: fn(&Value) -> Result<T, IngestError>,
) -> Result<Vec<T>, IngestError> {
    match document.get(section) {
        Some(value) => items(value, section)?.iter().map(decode).collect(),
        None => Ok(Vec::new()),
    }
}

/// Decode a full snapshot document. Sections are optional; a present but
/// malformed section fails the whole decode.
pub fn snapshot_from_str(raw: &str) -> Result<Snapshot, IngestError> {
    let document: Value = serde_json::from_str(raw)?;
    Ok(Snapshot {
        teams: decode_section(&document, "teams", team_from_value)?,
        projects: decode_section(&document, "projects", project_from_value)?,
        tickets: decode_section(&document, "tickets", ticket_from_value)?,
        movements: decode_section(&document, "movements", movement_from_value)?,
    })
}
