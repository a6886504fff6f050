use std::collections::HashMap;

use crate::models::{AnnotatedTicket, CanonicalStage};

/// Frequency count of canonical stage labels, sorted by descending count.
/// Ties break on stage ordinal so the output is deterministic.
pub fn stage_histogram(tickets: &[AnnotatedTicket]) -> Vec<(&'static str, usize)> {
    let mut counts: HashMap<CanonicalStage, usize> = HashMap::new();
    for ticket in tickets {
        *counts.entry(ticket.stage).or_insert(0) += 1;
    }
    let mut entries: Vec<(CanonicalStage, usize)> = counts.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    entries
        .into_iter()
        .map(|(stage, count)| (stage.label(), count))
        .collect()
}
