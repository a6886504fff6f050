use serde::Serialize;

use crate::filter::TicketFilter;
use crate::models::{AnnotatedTicket, Project, Team};

/// Points-delivery rollup for one team
#[derive(Debug, Clone, Serialize)]
pub struct Delivery {
    pub team: String,
    pub planned: f64,
    pub completed: f64,
    /// completed/planned, rounded to the nearest integer percent; 0 when
    /// nothing is planned
    pub percent: u32,
}

fn percent(completed: f64, planned: f64) -> u32 {
    if planned <= 0.0 {
        return 0;
    }
    (completed / planned * 100.0).round() as u32
}

/// Per-team delivery. Project-level aggregates are used when available, but
/// they can be stale: with a date filter active they describe the wrong
/// window, and an aggregate of exactly 0 means upstream has not computed it
/// yet. In both cases the ticket-level point sums are the source of truth.
pub fn delivery_by_team(
    teams: &[Team],
    tickets: &[AnnotatedTicket],
    projects: &[Project],
    date_filtered: bool,
) -> Vec<Delivery> {
    teams
        .iter()
        .map(|team| {
            let aggregate_planned: f64 = projects
                .iter()
                .filter(|p| p.team_id == Some(team.id))
                .map(|p| p.planned_points)
                .sum();
            let aggregate_completed: f64 = projects
                .iter()
                .filter(|p| p.team_id == Some(team.id))
                .map(|p| p.completed_points)
                .sum();

            let (planned, completed) = if date_filtered || aggregate_planned == 0.0 {
                let mine = TicketFilter::new().team(team).apply(tickets, projects);
                let planned: f64 = mine.iter().map(|t| t.ticket.delivery_points).sum();
                let completed: f64 = mine
                    .iter()
                    .filter(|t| t.is_done())
                    .map(|t| t.ticket.delivery_points)
                    .sum();
                (planned, completed)
            } else {
                (aggregate_planned, aggregate_completed)
            };

            Delivery {
                team: team.name.clone(),
                planned,
                completed,
                percent: percent(completed, planned),
            }
        })
        .collect()
}
