//! Support-tier escalation reporting
//!
//! Movement events carry a from/to support tier in tracker-native form
//! ("L3", "3", or a bare integer). Moving to a higher tier is an escalation;
//! moving down is a de-escalation, which the escalation view deliberately
//! does not support: those events are counted and flagged, never listed.

use serde::Serialize;

use crate::models::{Movement, RawField};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TierMove {
    Escalation,
    /// toTier < fromTier; unsupported by the escalation view
    DeEscalation,
    /// No tier change
    Lateral,
    /// One or both tiers missing or unparsable
    Unknown,
}

/// Parse a support tier out of its tracker representation
pub fn parse_tier(raw: Option<&RawField>) -> Option<u8> {
    match raw? {
        RawField::Int(n) => u8::try_from(*n).ok(),
        RawField::Text(s) => {
            let s = s.trim();
            let digits = s.strip_prefix(['L', 'l']).unwrap_or(s);
            digits.parse::<u8>().ok()
        }
    }
}

pub fn classify(movement: &Movement) -> TierMove {
    let from = parse_tier(movement.from_level.as_ref());
    let to = parse_tier(movement.to_level.as_ref());
    match (from, to) {
        (Some(from), Some(to)) if to > from => TierMove::Escalation,
        (Some(from), Some(to)) if to < from => TierMove::DeEscalation,
        (Some(_), Some(_)) => TierMove::Lateral,
        _ => TierMove::Unknown,
    }
}

/// Escalation listing plus the count of events the view refuses to display
#[derive(Debug)]
pub struct EscalationReport<'a> {
    pub escalations: Vec<&'a Movement>,
    /// De-escalations, excluded from the listing by product rule
    pub unsupported: usize,
}

pub fn escalation_report(movements: &[Movement]) -> EscalationReport<'_> {
    let mut escalations = Vec::new();
    let mut unsupported = 0;
    for movement in movements {
        match classify(movement) {
            TierMove::Escalation => escalations.push(movement),
            TierMove::DeEscalation => unsupported += 1,
            TierMove::Lateral | TierMove::Unknown => {}
        }
    }
    EscalationReport {
        escalations,
        unsupported,
    }
}
