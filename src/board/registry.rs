//! Static per-team board schema registry
//!
//! Each known team's column layout reproduces the board that team configured
//! in its external tracker, column for column. The layouts intentionally
//! diverge between teams (Enterprise Solution collapses the whole deployment
//! tail into one column, Payments merges its QA columns); unifying them would
//! break parity with the real boards. Unrecognized team names fall back to
//! the standard layout.
//!
//! Invariant, enforced by test: every schema's stage matchers jointly cover
//! stages 0..=11. Stage 12 is never a column; rollbacks surface through the
//! ticket's is_rollback flag in a separate panel.

use crate::board::schema::{BoardColumn, BoardSchema, RawMatcher};
use crate::models::CanonicalStage;

use CanonicalStage::*;

/// Full 12-column layout used by Digital Banking, Platform Services, and as
/// the fallback for unknown teams.
const STANDARD_COLUMNS: &[BoardColumn] = &[
    BoardColumn {
        label: "To Do",
        color: "#95a5a6",
        raw: RawMatcher::AnyOf(&["To Do", "TODO", "Backlog", "Open", "New", "Selected for Dev"]),
        stages: &[ToDo],
    },
    BoardColumn {
        label: "In Progress",
        color: "#3498db",
        raw: RawMatcher::AnyOf(&["In Progress", "In Development", "In Dev", "Doing", "Active"]),
        stages: &[InProgress],
    },
    BoardColumn {
        label: "Blocked",
        color: "#e74c3c",
        raw: RawMatcher::AnyOf(&["Blocked", "On Hold", "Impediment"]),
        stages: &[Blocked],
    },
    BoardColumn {
        label: "Review",
        color: "#9b59b6",
        raw: RawMatcher::AnyOf(&["Review", "In Review", "Code Review", "Peer Review"]),
        stages: &[Review],
    },
    BoardColumn {
        label: "DevOps",
        color: "#16a085",
        raw: RawMatcher::AnyOf(&["DevOps", "In DevOps", "Awaiting DevOps"]),
        stages: &[DevOps],
    },
    BoardColumn {
        label: "Ready to Test",
        color: "#f39c12",
        raw: RawMatcher::AnyOf(&["Ready to Test", "Ready for Test", "Ready for QA"]),
        stages: &[ReadyToTest],
    },
    BoardColumn {
        label: "QA/Test",
        color: "#e67e22",
        raw: RawMatcher::AnyOf(&["QA", "Testing", "Test", "In Test", "In QA"]),
        stages: &[Test],
    },
    BoardColumn {
        label: "Security Testing",
        color: "#c0392b",
        raw: RawMatcher::Contains("security"),
        stages: &[SecurityTesting],
    },
    BoardColumn {
        label: "UAT",
        color: "#2980b9",
        raw: RawMatcher::AnyOf(&["UAT", "In UAT", "Ready for UAT"]),
        stages: &[Uat],
    },
    BoardColumn {
        label: "CAB Ready",
        color: "#8e44ad",
        raw: RawMatcher::AnyOf(&["CAB Ready", "CAB", "Awaiting CAB"]),
        stages: &[CabReady],
    },
    BoardColumn {
        label: "Production Ready",
        color: "#27ae60",
        raw: RawMatcher::AnyOf(&["Production Ready", "Ready for Release", "Ready to Deploy"]),
        stages: &[ProductionReady],
    },
    BoardColumn {
        label: "Done",
        color: "#2ecc71",
        raw: RawMatcher::AnyOf(&["Done", "Live", "Closed", "Resolved", "Released", "Deployed"]),
        stages: &[Done],
    },
];

/// Enterprise Solution collapses the deployment tail (DevOps, Security, UAT,
/// CAB, Production Ready) into a single "Ready to Deploy" column, matching
/// the board that team runs externally.
const ENTERPRISE_COLUMNS: &[BoardColumn] = &[
    BoardColumn {
        label: "To Do",
        color: "#95a5a6",
        raw: RawMatcher::AnyOf(&["To Do", "TODO", "Backlog", "Open"]),
        stages: &[ToDo],
    },
    BoardColumn {
        label: "In Progress",
        color: "#3498db",
        raw: RawMatcher::AnyOf(&["In Progress", "In Development", "Doing"]),
        stages: &[InProgress],
    },
    BoardColumn {
        label: "Blocked",
        color: "#e74c3c",
        raw: RawMatcher::AnyOf(&["Blocked", "On Hold"]),
        stages: &[Blocked],
    },
    BoardColumn {
        label: "Review",
        color: "#9b59b6",
        raw: RawMatcher::AnyOf(&["Review", "In Review", "Code Review"]),
        stages: &[Review],
    },
    BoardColumn {
        label: "Ready to Test",
        color: "#f39c12",
        raw: RawMatcher::AnyOf(&["Ready to Test", "Ready for QA"]),
        stages: &[ReadyToTest],
    },
    BoardColumn {
        label: "QA/Test",
        color: "#e67e22",
        raw: RawMatcher::AnyOf(&["QA", "Testing", "In Test"]),
        stages: &[Test],
    },
    BoardColumn {
        label: "Ready to Deploy",
        color: "#27ae60",
        raw: RawMatcher::AnyOf(&[
            "Ready to Deploy",
            "Awaiting Deployment",
            "DevOps",
            "UAT",
            "CAB Ready",
            "Production Ready",
        ]),
        stages: &[DevOps, SecurityTesting, Uat, CabReady, ProductionReady],
    },
    BoardColumn {
        label: "Done",
        color: "#2ecc71",
        raw: RawMatcher::AnyOf(&["Done", "Live", "Closed", "Resolved"]),
        stages: &[Done],
    },
];

/// Payments merges Ready to Test + QA into one Testing column and the
/// deployment approvals into one Release column.
const PAYMENTS_COLUMNS: &[BoardColumn] = &[
    BoardColumn {
        label: "To Do",
        color: "#95a5a6",
        raw: RawMatcher::AnyOf(&["To Do", "Backlog", "Open", "New"]),
        stages: &[ToDo],
    },
    BoardColumn {
        label: "In Progress",
        color: "#3498db",
        raw: RawMatcher::AnyOf(&["In Progress", "In Dev", "Active"]),
        stages: &[InProgress],
    },
    BoardColumn {
        label: "Blocked",
        color: "#e74c3c",
        raw: RawMatcher::AnyOf(&["Blocked", "On Hold", "Impediment"]),
        stages: &[Blocked],
    },
    BoardColumn {
        label: "Review",
        color: "#9b59b6",
        raw: RawMatcher::AnyOf(&["Review", "In Review", "Peer Review"]),
        stages: &[Review],
    },
    BoardColumn {
        label: "Testing",
        color: "#e67e22",
        raw: RawMatcher::AnyOf(&["Testing", "QA", "Ready to Test", "Ready for Test", "In Test"]),
        stages: &[ReadyToTest, Test],
    },
    BoardColumn {
        label: "Security Testing",
        color: "#c0392b",
        raw: RawMatcher::Contains("security"),
        stages: &[SecurityTesting],
    },
    BoardColumn {
        label: "UAT",
        color: "#2980b9",
        raw: RawMatcher::AnyOf(&["UAT", "In UAT"]),
        stages: &[Uat],
    },
    BoardColumn {
        label: "Release",
        color: "#27ae60",
        raw: RawMatcher::AnyOf(&["DevOps", "CAB Ready", "Production Ready", "Release"]),
        stages: &[DevOps, CabReady, ProductionReady],
    },
    BoardColumn {
        label: "Done",
        color: "#2ecc71",
        raw: RawMatcher::AnyOf(&["Done", "Live", "Closed", "Deployed"]),
        stages: &[Done],
    },
];

const ENTERPRISE: BoardSchema = BoardSchema {
    team: "Enterprise Solution",
    columns: ENTERPRISE_COLUMNS,
};

const DIGITAL_BANKING: BoardSchema = BoardSchema {
    team: "Digital Banking",
    columns: STANDARD_COLUMNS,
};

const PAYMENTS: BoardSchema = BoardSchema {
    team: "Payments",
    columns: PAYMENTS_COLUMNS,
};

const PLATFORM_SERVICES: BoardSchema = BoardSchema {
    team: "Platform Services",
    columns: STANDARD_COLUMNS,
};

const FALLBACK: BoardSchema = BoardSchema {
    team: "Default",
    columns: STANDARD_COLUMNS,
};

/// All registered schemas, fallback excluded
pub const SCHEMAS: &[&BoardSchema] = &[&ENTERPRISE, &DIGITAL_BANKING, &PAYMENTS, &PLATFORM_SERVICES];

/// Tracker-key prefix to team name
pub const TEAM_PREFIXES: &[(&str, &str)] = &[
    ("ENT", "Enterprise Solution"),
    ("DGB", "Digital Banking"),
    ("PAY", "Payments"),
    ("SKP", "Platform Services"),
];

/// Alternate spellings seen in upstream team records
const TEAM_ALIASES: &[(&str, &str)] = &[("Enterprise Solutions", "Enterprise Solution")];

fn canonical_team_name(name: &str) -> &str {
    let name = name.trim();
    for (alias, canonical) in TEAM_ALIASES {
        if alias.eq_ignore_ascii_case(name) {
            return canonical;
        }
    }
    name
}

/// Board schema for a team by display name. Aliases are recognized; unknown
/// teams get the standard fallback layout.
pub fn schema_for(team_name: &str) -> &'static BoardSchema {
    let name = canonical_team_name(team_name);
    for schema in SCHEMAS.iter().copied() {
        if schema.team.eq_ignore_ascii_case(name) {
            return schema;
        }
    }
    &FALLBACK
}

pub fn fallback_schema() -> &'static BoardSchema {
    &FALLBACK
}

/// Owning team for a tracker-key prefix ("SKP" -> Platform Services)
pub fn team_for_prefix(prefix: &str) -> Option<&'static str> {
    TEAM_PREFIXES
        .iter()
        .find(|(p, _)| p.eq_ignore_ascii_case(prefix))
        .map(|(_, team)| *team)
}

/// Owning team for a full tracker key ("SKP-123" -> Platform Services)
pub fn team_for_key(key: &str) -> Option<&'static str> {
    let dash = key.find('-')?;
    if dash == 0 {
        return None;
    }
    team_for_prefix(&key[..dash])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_team_lookup() {
        assert_eq!(schema_for("Payments").team, "Payments");
        assert_eq!(schema_for("payments").team, "Payments");
        assert_eq!(schema_for("Enterprise Solution").team, "Enterprise Solution");
    }

    #[test]
    fn test_alias_lookup() {
        assert_eq!(schema_for("Enterprise Solutions").team, "Enterprise Solution");
    }

    #[test]
    fn test_unknown_team_falls_back() {
        assert_eq!(schema_for("Skunkworks").team, "Default");
        assert_eq!(schema_for("").team, "Default");
    }

    #[test]
    fn test_prefix_lookup() {
        assert_eq!(team_for_prefix("SKP"), Some("Platform Services"));
        assert_eq!(team_for_prefix("skp"), Some("Platform Services"));
        assert_eq!(team_for_prefix("XYZ"), None);
        assert_eq!(team_for_key("SKP-123"), Some("Platform Services"));
        assert_eq!(team_for_key("123"), None);
    }

    #[test]
    fn test_every_schema_covers_stages_0_through_11() {
        let mut all: Vec<&BoardSchema> = SCHEMAS.to_vec();
        all.push(fallback_schema());
        for schema in all {
            for idx in 0u8..=11 {
                let stage = CanonicalStage::from_index(idx).unwrap();
                assert!(
                    schema.columns.iter().any(|c| c.matches_stage(stage)),
                    "schema {} does not cover stage {}",
                    schema.team,
                    idx
                );
            }
        }
    }

    #[test]
    fn test_no_schema_has_a_rollback_column() {
        for schema in SCHEMAS {
            for column in schema.columns {
                assert!(!column.matches_stage(CanonicalStage::Rollback));
            }
        }
    }

    #[test]
    fn test_enterprise_collapsed_deploy_column() {
        let schema = schema_for("Enterprise Solution");
        let deploy = schema
            .columns
            .iter()
            .find(|c| c.label == "Ready to Deploy")
            .unwrap();
        for idx in [4u8, 7, 8, 9, 10] {
            assert!(deploy.matches_stage(CanonicalStage::from_index(idx).unwrap()));
        }
        assert!(!deploy.matches_stage(CanonicalStage::Test));
    }

    #[test]
    fn test_execution_slice_excludes_todo_and_done() {
        let mut all: Vec<&BoardSchema> = SCHEMAS.to_vec();
        all.push(fallback_schema());
        for schema in all {
            for column in schema.execution_columns() {
                assert!(
                    !column.matches_stage(CanonicalStage::ToDo),
                    "{} execution slice accepts To Do",
                    schema.team
                );
                assert!(
                    !column.matches_stage(CanonicalStage::Done),
                    "{} execution slice accepts Done",
                    schema.team
                );
            }
        }
    }
}
