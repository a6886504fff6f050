use serde::{Deserialize, Serialize};

/// Team record from the fetch layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: i64,
    pub name: String,
    /// Tracker-key prefix owned by this team, e.g. "SKP"
    pub key_prefix: Option<String>,
    pub lead: Option<String>,
    pub members: Vec<String>,
}

impl Team {
    pub fn new(id: i64, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            key_prefix: None,
            lead: None,
            members: Vec::new(),
        }
    }
}

/// Project record from the fetch layer.
///
/// planned_points/completed_points are upstream aggregates and may be stale;
/// a value of exactly 0 means "not computed yet", not a measured zero. The
/// delivery report falls back to ticket-level sums in that case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub key: Option<String>,
    pub team_id: Option<i64>,
    pub planned_points: f64,
    pub completed_points: f64,
}

impl Project {
    pub fn new(id: i64, name: &str, team_id: Option<i64>) -> Self {
        Self {
            id,
            name: name.to_string(),
            key: None,
            team_id,
            planned_points: 0.0,
            completed_points: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_creation() {
        let team = Team::new(1, "Payments");
        assert_eq!(team.name, "Payments");
        assert!(team.members.is_empty());
        assert!(team.key_prefix.is_none());
    }

    #[test]
    fn test_project_creation() {
        let project = Project::new(7, "Card Gateway", Some(1));
        assert_eq!(project.team_id, Some(1));
        assert_eq!(project.planned_points, 0.0);
    }
}
