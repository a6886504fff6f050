//! Canonical stage and priority resolution
//!
//! Translates whatever a tracker sent (workflow integers, numeric strings,
//! free-text status names in any casing) into the canonical 13-stage model.
//! Resolution is pure and never fails: anything unrecognized silently becomes
//! stage 0 (To Do) / priority Medium. That default is a long-standing
//! compatibility contract with the upstream boards; a fallback counter and a
//! debug log line record each miss so data-quality drift stays visible.

pub mod alias;

use std::sync::atomic::{AtomicU64, Ordering};

use crate::models::{AnnotatedTicket, CanonicalStage, Priority, RawField, Ticket};

static FALLBACK_HITS: AtomicU64 = AtomicU64::new(0);

/// Number of times resolve_stage has fallen through to the To Do default
/// since process start.
pub fn fallback_hits() -> u64 {
    FALLBACK_HITS.load(Ordering::Relaxed)
}

fn record_fallback(raw: &str) {
    FALLBACK_HITS.fetch_add(1, Ordering::Relaxed);
    log::debug!("unrecognized status {:?}, defaulting to To Do", raw);
}

/// Resolve a raw status representation to a canonical stage.
///
/// - Integers 0..=12 pass through as that stage ordinal.
/// - Numeric strings are treated as integers first.
/// - Other strings are normalized and run through the ordered alias table
///   (see [`alias::STAGE_ALIASES`]), first match wins.
/// - No match resolves to To Do, never an error.
pub fn resolve_stage(raw: Option<&RawField>) -> CanonicalStage {
    let raw = match raw {
        Some(r) => r,
        None => {
            record_fallback("<missing>");
            return CanonicalStage::ToDo;
        }
    };

    match raw {
        RawField::Int(n) => stage_from_int(*n),
        RawField::Text(s) => {
            // Numeric strings are workflow integers in disguise
            if let Ok(n) = s.trim().parse::<i64>() {
                return stage_from_int(n);
            }
            let normalized = alias::normalize(s);
            for (rule, stage) in alias::STAGE_ALIASES {
                if rule.matches(&normalized) {
                    return *stage;
                }
            }
            record_fallback(s);
            CanonicalStage::ToDo
        }
    }
}

fn stage_from_int(n: i64) -> CanonicalStage {
    if let Ok(idx) = u8::try_from(n) {
        if let Some(stage) = CanonicalStage::from_index(idx) {
            return stage;
        }
    }
    record_fallback(&n.to_string());
    CanonicalStage::ToDo
}

/// Resolve a raw priority representation to the 3-level ordinal.
///
/// Integers 0/1/2 and case-insensitive low/medium/high strings are
/// recognized; everything else defaults to Medium.
pub fn resolve_priority(raw: Option<&RawField>) -> Priority {
    match raw {
        Some(RawField::Int(n)) => u8::try_from(*n)
            .ok()
            .and_then(Priority::from_index)
            .unwrap_or(Priority::Medium),
        Some(RawField::Text(s)) => {
            if let Ok(n) = s.trim().parse::<i64>() {
                return u8::try_from(n)
                    .ok()
                    .and_then(Priority::from_index)
                    .unwrap_or(Priority::Medium);
            }
            match s.trim().to_lowercase().as_str() {
                "low" => Priority::Low,
                "medium" => Priority::Medium,
                "high" => Priority::High,
                _ => Priority::Medium,
            }
        }
        None => Priority::Medium,
    }
}

/// Annotate a ticket with its resolved stage and priority
pub fn annotate_ticket(ticket: Ticket) -> AnnotatedTicket {
    let stage = resolve_stage(ticket.raw_status.as_ref());
    let priority = resolve_priority(ticket.raw_priority.as_ref());
    AnnotatedTicket {
        ticket,
        stage,
        priority,
    }
}

/// Annotate a whole collection
pub fn annotate(tickets: Vec<Ticket>) -> Vec<AnnotatedTicket> {
    tickets.into_iter().map(annotate_ticket).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stage_of(raw: RawField) -> CanonicalStage {
        resolve_stage(Some(&raw))
    }

    #[test]
    fn test_integer_pass_through() {
        for idx in 0u8..=12 {
            let stage = stage_of(RawField::Int(idx as i64));
            assert_eq!(stage.as_index(), idx);
        }
    }

    #[test]
    fn test_numeric_string_as_integer() {
        assert_eq!(stage_of(RawField::from("7")), CanonicalStage::SecurityTesting);
        assert_eq!(stage_of(RawField::from(" 11 ")), CanonicalStage::Done);
    }

    #[test]
    fn test_backlog_aliases() {
        for raw in ["BACKLOG", "To Do", "SELECTED_FOR_DEV", "open", "new"] {
            assert_eq!(stage_of(RawField::from(raw)), CanonicalStage::ToDo, "{}", raw);
        }
    }

    #[test]
    fn test_done_aliases() {
        for raw in ["DONE", "Live", "Closed", "resolved", "Deployed"] {
            assert_eq!(stage_of(RawField::from(raw)), CanonicalStage::Done, "{}", raw);
        }
    }

    #[test]
    fn test_security_substring_beats_test() {
        for raw in [
            "Security Testing",
            "IN SECURITY REVIEW",
            "security - pentest",
            "Awaiting Security Test",
        ] {
            assert_eq!(
                stage_of(RawField::from(raw)),
                CanonicalStage::SecurityTesting,
                "{}",
                raw
            );
        }
    }

    #[test]
    fn test_unknown_defaults_to_todo() {
        let before = fallback_hits();
        assert_eq!(
            stage_of(RawField::from("totally-unknown-value")),
            CanonicalStage::ToDo
        );
        assert!(fallback_hits() > before);
    }

    #[test]
    fn test_missing_defaults_to_todo() {
        assert_eq!(resolve_stage(None), CanonicalStage::ToDo);
    }

    #[test]
    fn test_out_of_range_integer_defaults() {
        assert_eq!(stage_of(RawField::Int(13)), CanonicalStage::ToDo);
        assert_eq!(stage_of(RawField::Int(-1)), CanonicalStage::ToDo);
    }

    #[test]
    fn test_priority_resolution() {
        assert_eq!(resolve_priority(Some(&RawField::Int(0))), Priority::Low);
        assert_eq!(resolve_priority(Some(&RawField::Int(2))), Priority::High);
        assert_eq!(resolve_priority(Some(&RawField::from("HIGH"))), Priority::High);
        assert_eq!(resolve_priority(Some(&RawField::from("low"))), Priority::Low);
        assert_eq!(resolve_priority(Some(&RawField::from("2"))), Priority::High);
        assert_eq!(resolve_priority(Some(&RawField::from("urgent"))), Priority::Medium);
        assert_eq!(resolve_priority(Some(&RawField::Int(9))), Priority::Medium);
        assert_eq!(resolve_priority(None), Priority::Medium);
    }

    #[test]
    fn test_annotate() {
        let mut ticket = Ticket::new(1, "Fix login");
        ticket.raw_status = Some(RawField::from("IN_PROGRESS"));
        ticket.raw_priority = Some(RawField::from("High"));
        let annotated = annotate_ticket(ticket);
        assert_eq!(annotated.stage, CanonicalStage::InProgress);
        assert_eq!(annotated.priority, Priority::High);
    }
}
