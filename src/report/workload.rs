use serde::Serialize;

use crate::filter::TicketFilter;
use crate::models::{AnnotatedTicket, Project, Team};

/// Active/done split over a ticket set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Workload {
    pub total: usize,
    pub active: usize,
    pub done: usize,
}

/// Dev vs incident counts. A ticket lands in exactly one category, decided
/// by its issue type; never double-counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    pub dev: usize,
    pub incidents: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamWorkload {
    pub team: String,
    pub workload: Workload,
    pub categories: CategoryCounts,
}

/// Workload over an already-filtered ticket set. Done means stage 11 or an
/// external resolution timestamp; active is everything else.
pub fn workload(tickets: &[AnnotatedTicket]) -> Workload {
    let total = tickets.len();
    let done = tickets.iter().filter(|t| t.is_done()).count();
    Workload {
        total,
        active: total - done,
        done,
    }
}

pub fn categorize(tickets: &[AnnotatedTicket]) -> CategoryCounts {
    let incidents = tickets.iter().filter(|t| t.ticket.is_incident()).count();
    CategoryCounts {
        dev: tickets.len() - incidents,
        incidents,
    }
}

/// Per-team workload rollup. Each team's slice is selected with the same
/// team predicate the filter pipeline uses, so the numbers agree with the
/// board views. A team with no matching tickets reports all zeros.
pub fn workload_by_team(
    teams: &[Team],
    tickets: &[AnnotatedTicket],
    projects: &[Project],
) -> Vec<TeamWorkload> {
    teams
        .iter()
        .map(|team| {
            let mine = TicketFilter::new().team(team).apply(tickets, projects);
            TeamWorkload {
                team: team.name.clone(),
                workload: workload(&mine),
                categories: categorize(&mine),
            }
        })
        .collect()
}
