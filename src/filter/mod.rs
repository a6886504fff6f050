//! Ticket filter pipeline
//!
//! Composable predicates over an annotated ticket collection, applied as a
//! logical AND ahead of board projection and aggregation. Filters are pure
//! and never mutate their input; because the combination is a set
//! intersection, registration order never changes the result.

use std::collections::HashMap;

use crate::board::registry;
use crate::models::{AnnotatedTicket, Project, RawField, Team};

/// Which timestamp a date-range filter tests. Pages filtering on activity
/// accept either the created or the updated timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateField {
    #[default]
    Created,
    CreatedOrUpdated,
}

/// AND-composed ticket filter. Unset predicates are identity.
#[derive(Debug, Clone, Default)]
pub struct TicketFilter {
    team_id: Option<i64>,
    team_name: Option<String>,
    team_prefix: Option<String>,
    date_field: DateField,
    start: Option<i64>,
    end: Option<i64>,
    project_ids: Option<Vec<i64>>,
    search: Option<String>,
    statuses: Option<Vec<String>>,
    exclude_statuses: Vec<String>,
    issue_types: Option<Vec<String>>,
}

impl TicketFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep tickets belonging to this team: by project linkage first, then
    /// by tracker-key prefix, then by the free-text team field.
    pub fn team(mut self, team: &Team) -> Self {
        self.team_id = Some(team.id);
        self.team_name = Some(team.name.clone());
        self.team_prefix = team.key_prefix.clone();
        self
    }

    /// Inclusive date range over the chosen timestamp field. Either bound
    /// may be absent (no-op on that side).
    pub fn date_range(mut self, field: DateField, start: Option<i64>, end: Option<i64>) -> Self {
        self.date_field = field;
        self.start = start;
        self.end = end;
        self
    }

    /// True when either date bound is set; the delivery report uses this to
    /// decide between project aggregates and ticket-level sums.
    pub fn has_date_bounds(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }

    pub fn projects(mut self, ids: Vec<i64>) -> Self {
        self.project_ids = Some(ids);
        self
    }

    /// Case-insensitive substring search over title, key, assignee, and team
    pub fn search(mut self, needle: &str) -> Self {
        self.search = Some(needle.to_lowercase());
        self
    }

    /// Keep tickets whose raw status is one of these tracker-native values
    pub fn statuses(mut self, statuses: Vec<String>) -> Self {
        self.statuses = Some(statuses);
        self
    }

    /// Drop tickets carrying this raw status (tracker-native vocabulary,
    /// independent of canonical resolution)
    pub fn exclude_status(mut self, status: &str) -> Self {
        self.exclude_statuses.push(status.to_string());
        self
    }

    pub fn issue_types(mut self, types: Vec<String>) -> Self {
        self.issue_types = Some(types);
        self
    }

    /// Apply the filter. `projects` supplies the project -> team linkage for
    /// the team predicate; the lookup is built once, keeping the whole pass
    /// linear in ticket count.
    pub fn apply(&self, tickets: &[AnnotatedTicket], projects: &[Project]) -> Vec<AnnotatedTicket> {
        let project_teams: HashMap<i64, i64> = projects
            .iter()
            .filter_map(|p| p.team_id.map(|team_id| (p.id, team_id)))
            .collect();
        tickets
            .iter()
            .filter(|t| self.matches(t, &project_teams))
            .cloned()
            .collect()
    }

    fn matches(&self, ticket: &AnnotatedTicket, project_teams: &HashMap<i64, i64>) -> bool {
        self.matches_team(ticket, project_teams)
            && self.matches_dates(ticket)
            && self.matches_project(ticket)
            && self.matches_search(ticket)
            && self.matches_status(ticket)
            && self.matches_type(ticket)
    }

    fn matches_team(&self, ticket: &AnnotatedTicket, project_teams: &HashMap<i64, i64>) -> bool {
        let team_id = match self.team_id {
            Some(id) => id,
            None => return true,
        };

        // Explicit project linkage wins
        if let Some(project_id) = ticket.ticket.project_id {
            if let Some(owner) = project_teams.get(&project_id) {
                return *owner == team_id;
            }
        }

        // Tracker-key prefix fallback
        if let Some(prefix) = ticket.ticket.key_prefix() {
            if let Some(tp) = &self.team_prefix {
                if tp.eq_ignore_ascii_case(prefix) {
                    return true;
                }
            }
            if let (Some(owner), Some(name)) = (registry::team_for_prefix(prefix), &self.team_name)
            {
                if owner.eq_ignore_ascii_case(name) {
                    return true;
                }
            }
        }

        // Free-text team field, last resort
        if let (Some(field), Some(name)) = (&ticket.ticket.team, &self.team_name) {
            if field.trim().eq_ignore_ascii_case(name) {
                return true;
            }
        }

        false
    }

    fn matches_dates(&self, ticket: &AnnotatedTicket) -> bool {
        if self.start.is_none() && self.end.is_none() {
            return true;
        }
        let ts = match self.date_field {
            DateField::Created => ticket.ticket.created_at,
            DateField::CreatedOrUpdated => ticket.ticket.updated_at.or(ticket.ticket.created_at),
        };
        let ts = match ts {
            Some(ts) => ts,
            // A bounded date filter cannot admit a ticket with no date
            None => return false,
        };
        if let Some(start) = self.start {
            if ts < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if ts > end {
                return false;
            }
        }
        true
    }

    fn matches_project(&self, ticket: &AnnotatedTicket) -> bool {
        match &self.project_ids {
            Some(ids) => ticket
                .ticket
                .project_id
                .map(|id| ids.contains(&id))
                .unwrap_or(false),
            None => true,
        }
    }

    fn matches_search(&self, ticket: &AnnotatedTicket) -> bool {
        let needle = match &self.search {
            Some(needle) => needle,
            None => return true,
        };
        let fields = [
            Some(ticket.ticket.title.as_str()),
            ticket.ticket.key.as_deref(),
            ticket.ticket.assignee.as_deref(),
            ticket.ticket.team.as_deref(),
        ];
        fields
            .into_iter()
            .flatten()
            .any(|f| f.to_lowercase().contains(needle))
    }

    fn matches_status(&self, ticket: &AnnotatedTicket) -> bool {
        let raw = raw_status_text(ticket);
        if let Some(raw) = raw.as_deref() {
            if self
                .exclude_statuses
                .iter()
                .any(|s| s.trim().eq_ignore_ascii_case(raw))
            {
                return false;
            }
        }
        match &self.statuses {
            Some(wanted) => match raw.as_deref() {
                Some(raw) => wanted.iter().any(|s| s.trim().eq_ignore_ascii_case(raw)),
                None => false,
            },
            None => true,
        }
    }

    fn matches_type(&self, ticket: &AnnotatedTicket) -> bool {
        match &self.issue_types {
            Some(wanted) => match ticket.ticket.issue_type.as_deref() {
                Some(t) => wanted.iter().any(|w| w.trim().eq_ignore_ascii_case(t.trim())),
                None => false,
            },
            None => true,
        }
    }
}

/// Raw status as comparable text; integer codes compare by their decimal form
/// so views can exclude a specific status code.
fn raw_status_text(ticket: &AnnotatedTicket) -> Option<String> {
    match ticket.ticket.raw_status.as_ref()? {
        RawField::Text(s) => Some(s.trim().to_string()),
        RawField::Int(n) => Some(n.to_string()),
    }
}
