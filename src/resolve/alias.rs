//! Ordered status-alias dispatch table
//!
//! Raw tracker status names are normalized (uppercased, non-alphanumerics
//! stripped) and then tested against this table top to bottom, first match
//! wins. Rows run from the highest stage to the lowest because some alias
//! families overlap: anything containing "SECURITY" must land on Security
//! Testing (7) even when it would also read as a QA/Test (6) spelling, so the
//! stage-7 substring row sits above every QA row. The ordering is a tie-break
//! rule, not an implementation accident; do not collapse this into a map.

use crate::models::CanonicalStage;

/// How a table row matches a normalized status string
#[derive(Debug)]
pub enum AliasRule {
    /// Exact match against any of these normalized spellings
    AnyOf(&'static [&'static str]),
    /// Substring match, used only for the security family
    Contains(&'static str),
}

impl AliasRule {
    pub fn matches(&self, normalized: &str) -> bool {
        match self {
            AliasRule::AnyOf(aliases) => aliases.contains(&normalized),
            AliasRule::Contains(needle) => normalized.contains(needle),
        }
    }
}

/// First-match-wins, highest stage first
pub const STAGE_ALIASES: &[(AliasRule, CanonicalStage)] = &[
    (
        AliasRule::AnyOf(&["ROLLBACK", "ROLLEDBACK", "REVERTED"]),
        CanonicalStage::Rollback,
    ),
    (
        AliasRule::AnyOf(&[
            "DONE",
            "LIVE",
            "LIVEDONE",
            "CLOSED",
            "RESOLVED",
            "COMPLETE",
            "COMPLETED",
            "RELEASED",
            "DEPLOYED",
            "INPRODUCTION",
        ]),
        CanonicalStage::Done,
    ),
    (
        AliasRule::AnyOf(&[
            "PRODUCTIONREADY",
            "PRODREADY",
            "READYFORPRODUCTION",
            "READYFORRELEASE",
            "READYTODEPLOY",
        ]),
        CanonicalStage::ProductionReady,
    ),
    (
        AliasRule::AnyOf(&["CABREADY", "CAB", "CABAPPROVED", "CHANGEAPPROVED", "AWAITINGCAB"]),
        CanonicalStage::CabReady,
    ),
    (
        AliasRule::AnyOf(&["UAT", "INUAT", "READYFORUAT", "USERACCEPTANCETESTING", "UATSIGNOFF"]),
        CanonicalStage::Uat,
    ),
    // Substring on purpose: trackers emit many free-text variants such as
    // "Security Testing", "In Security Review", "Security - PenTest". Must
    // sit above every QA/Test row.
    (AliasRule::Contains("SECURITY"), CanonicalStage::SecurityTesting),
    (
        AliasRule::AnyOf(&["PENTEST", "PENETRATIONTESTING"]),
        CanonicalStage::SecurityTesting,
    ),
    (
        AliasRule::AnyOf(&["QA", "INQA", "QATEST", "TEST", "TESTING", "INTEST", "INTESTING"]),
        CanonicalStage::Test,
    ),
    (
        AliasRule::AnyOf(&[
            "READYTOTEST",
            "READYFORTEST",
            "READYFORTESTING",
            "READYFORQA",
            "AWAITINGQA",
        ]),
        CanonicalStage::ReadyToTest,
    ),
    (
        AliasRule::AnyOf(&["DEVOPS", "INDEVOPS", "AWAITINGDEVOPS", "DEVOPSREVIEW"]),
        CanonicalStage::DevOps,
    ),
    (
        AliasRule::AnyOf(&[
            "REVIEW",
            "INREVIEW",
            "CODEREVIEW",
            "PEERREVIEW",
            "AWAITINGREVIEW",
            "PRRAISED",
        ]),
        CanonicalStage::Review,
    ),
    (
        AliasRule::AnyOf(&["BLOCKED", "ONHOLD", "IMPEDED", "IMPEDIMENT", "STUCK"]),
        CanonicalStage::Blocked,
    ),
    (
        AliasRule::AnyOf(&[
            "INPROGRESS",
            "INDEVELOPMENT",
            "INDEV",
            "DOING",
            "ACTIVE",
            "STARTED",
            "WIP",
        ]),
        CanonicalStage::InProgress,
    ),
    (
        AliasRule::AnyOf(&[
            "TODO",
            "BACKLOG",
            "OPEN",
            "NEW",
            "CREATED",
            "TRIAGE",
            "SELECTEDFORDEV",
            "SELECTEDFORDEVELOPMENT",
        ]),
        CanonicalStage::ToDo,
    ),
];

/// Normalize a raw status name: uppercase, strip non-alphanumerics
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(|c| c.to_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("In Progress"), "INPROGRESS");
        assert_eq!(normalize("SELECTED_FOR_DEV"), "SELECTEDFORDEV");
        assert_eq!(normalize("ready-to-test!"), "READYTOTEST");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_table_runs_highest_stage_first() {
        // Ignoring the extra stage-7 exact row that backs up the substring
        // rule, stages must be non-increasing down the table.
        let mut last = u8::MAX;
        for (_, stage) in STAGE_ALIASES {
            let idx = stage.as_index();
            assert!(
                idx <= last || idx == 7,
                "alias table out of order at stage {}",
                idx
            );
            last = idx;
        }
    }

    #[test]
    fn test_security_row_precedes_test_rows() {
        let security_pos = STAGE_ALIASES
            .iter()
            .position(|(rule, _)| matches!(rule, AliasRule::Contains("SECURITY")))
            .unwrap();
        let first_test_pos = STAGE_ALIASES
            .iter()
            .position(|(_, stage)| *stage == CanonicalStage::Test)
            .unwrap();
        assert!(security_pos < first_test_pos);
    }
}
