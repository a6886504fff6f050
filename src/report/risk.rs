use serde::Serialize;

use crate::models::{AnnotatedTicket, CanonicalStage};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// risk >= 2 is High, exactly 1 is Medium, everything else Low
    pub fn from_score(risk: u8) -> Self {
        match risk {
            r if r >= 2 => RiskLevel::High,
            1 => RiskLevel::Medium,
            _ => RiskLevel::Low,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

/// Backlog tickets bucketed by risk score
#[derive(Debug, Default)]
pub struct RiskBuckets<'a> {
    pub high: Vec<&'a AnnotatedTicket>,
    pub medium: Vec<&'a AnnotatedTicket>,
    pub low: Vec<&'a AnnotatedTicket>,
}

/// Risk bucketing applies only to backlog (stage 0) tickets; work already in
/// flight is risk-managed on the board, not in these buckets, so any other
/// stage is ignored entirely.
pub fn risk_buckets(tickets: &[AnnotatedTicket]) -> RiskBuckets<'_> {
    let mut buckets = RiskBuckets::default();
    for ticket in tickets {
        if ticket.stage != CanonicalStage::ToDo {
            continue;
        }
        match RiskLevel::from_score(ticket.ticket.risk) {
            RiskLevel::High => buckets.high.push(ticket),
            RiskLevel::Medium => buckets.medium.push(ticket),
            RiskLevel::Low => buckets.low.push(ticket),
        }
    }
    buckets
}
