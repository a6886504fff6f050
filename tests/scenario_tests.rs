// End-to-end scenarios across filter + aggregation, mirroring how the
// dashboard pages drive the core.

use stagehand::filter::{DateField, TicketFilter};
use stagehand::models::{Movement, RawField, Team, Ticket};
use stagehand::report::{
    delivery_by_team, escalation_report, incident_density_of, risk_buckets, workload,
    workload_by_team,
};
use stagehand::resolve::annotate;

#[test]
fn team_with_no_matching_tickets_yields_zeroes_not_errors() {
    let tickets = annotate(vec![
        {
            let mut t = Ticket::new(1, "a");
            t.raw_status = Some(RawField::from("IN_PROGRESS"));
            t
        },
        {
            let mut t = Ticket::new(2, "b");
            t.raw_status = Some(RawField::Int(1));
            t
        },
        {
            let mut t = Ticket::new(3, "c");
            t.raw_status = Some(RawField::from("BLOCKED"));
            t
        },
    ]);
    let team_x = Team::new(99, "Team X");

    let mine = TicketFilter::new().team(&team_x).apply(&tickets, &[]);
    assert!(mine.is_empty());

    let w = workload(&mine);
    assert_eq!((w.active, w.done, w.total), (0, 0, 0));

    let delivery = delivery_by_team(&[team_x], &mine, &[], false);
    assert_eq!(delivery[0].percent, 0);
}

#[test]
fn l3_to_l1_is_a_de_escalation_and_is_excluded() {
    let mut down = Movement::new("SKP-7");
    down.from_level = Some(RawField::from("L3"));
    down.to_level = Some(RawField::from("L1"));
    let mut up = Movement::new("SKP-8");
    up.from_level = Some(RawField::from("L1"));
    up.to_level = Some(RawField::from("L2"));

    let movements = [down, up];
    let report = escalation_report(&movements);
    assert_eq!(report.escalations.len(), 1);
    assert_eq!(report.escalations[0].ticket_key, "SKP-8");
    assert_eq!(report.unsupported, 1);
}

#[test]
fn incident_density_zero_when_everything_is_an_incident() {
    let mut only_incident = Ticket::new(1, "sev1");
    only_incident.issue_type = Some("Incident".to_string());
    let tickets = annotate(vec![only_incident]);
    let density = incident_density_of(&tickets);
    assert_eq!(density, 0.0);
    assert!(density.is_finite());
}

#[test]
fn review_stage_ticket_never_enters_risk_buckets() {
    let mut ticket = Ticket::new(1, "risky review item");
    ticket.raw_status = Some(RawField::Int(3));
    ticket.risk = 3;
    let tickets = annotate(vec![ticket]);
    let buckets = risk_buckets(&tickets);
    assert!(buckets.high.is_empty() && buckets.medium.is_empty() && buckets.low.is_empty());
}

#[test]
fn date_filtered_workload_pipeline() {
    let mut old = Ticket::new(1, "old done work");
    old.raw_status = Some(RawField::Int(11));
    old.created_at = Some(1_000);
    old.team = Some("Payments".to_string());

    let mut recent = Ticket::new(2, "fresh work");
    recent.raw_status = Some(RawField::from("In Progress"));
    recent.created_at = Some(9_000);
    recent.team = Some("Payments".to_string());

    let tickets = annotate(vec![old, recent]);
    let team = Team::new(1, "Payments");

    let windowed = TicketFilter::new()
        .date_range(DateField::Created, Some(5_000), None)
        .apply(&tickets, &[]);
    let rollup = workload_by_team(&[team], &windowed, &[]);
    assert_eq!(rollup[0].workload.total, 1);
    assert_eq!(rollup[0].workload.active, 1);
    assert_eq!(rollup[0].workload.done, 0);
}

#[test]
fn filters_compose_commutatively() {
    let mut a = Ticket::new(1, "gateway fix");
    a.team = Some("Payments".to_string());
    a.created_at = Some(100);
    a.raw_status = Some(RawField::from("In Progress"));
    let mut b = Ticket::new(2, "gateway docs");
    b.team = Some("Payments".to_string());
    b.created_at = Some(900);
    b.raw_status = Some(RawField::from("Done"));
    let tickets = annotate(vec![a, b]);
    let team = Team::new(1, "Payments");

    let first = TicketFilter::new()
        .team(&team)
        .search("gateway")
        .date_range(DateField::Created, Some(0), Some(500))
        .apply(&tickets, &[]);
    let second = TicketFilter::new()
        .date_range(DateField::Created, Some(0), Some(500))
        .search("gateway")
        .team(&team)
        .apply(&tickets, &[]);

    let ids = |v: &[stagehand::models::AnnotatedTicket]| {
        v.iter().map(|t| t.ticket.id).collect::<Vec<_>>()
    };
    assert_eq!(ids(&first), ids(&second));
    assert_eq!(ids(&first), vec![1]);
}
