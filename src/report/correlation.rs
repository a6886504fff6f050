use crate::models::AnnotatedTicket;
use crate::report::workload::{categorize, CategoryCounts};
use crate::utils::round2;

/// Incidents per ten dev tickets, rounded to two decimals.
///
/// The zero guard is mandatory: an empty dev count yields exactly 0, never
/// NaN or infinity.
pub fn incident_density(counts: CategoryCounts) -> f64 {
    if counts.dev == 0 {
        return 0.0;
    }
    round2(counts.incidents as f64 / counts.dev as f64 * 10.0)
}

pub fn incident_density_of(tickets: &[AnnotatedTicket]) -> f64 {
    incident_density(categorize(tickets))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ticket;
    use crate::resolve::annotate;

    #[test]
    fn test_density() {
        let counts = CategoryCounts { dev: 3, incidents: 2 };
        assert_eq!(incident_density(counts), 6.67);
    }

    #[test]
    fn test_zero_dev_count_is_zero_not_nan() {
        let counts = CategoryCounts { dev: 0, incidents: 5 };
        let density = incident_density(counts);
        assert_eq!(density, 0.0);
        assert!(density.is_finite());
    }

    #[test]
    fn test_density_of_tickets() {
        let mut incident = Ticket::new(1, "outage");
        incident.issue_type = Some("Incident".to_string());
        let dev = Ticket::new(2, "feature");
        let tickets = annotate(vec![incident, dev]);
        assert_eq!(incident_density_of(&tickets), 10.0);
    }
}
