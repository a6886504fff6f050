use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use crate::board::{execution_board, schema_for, sprint_board};
use crate::cli::output::{print_heading, print_table};
use crate::filter::{DateField, TicketFilter};
use crate::ingest::{snapshot_from_str, Snapshot};
use crate::models::{AnnotatedTicket, Team};
use crate::report;
use crate::resolve::annotate;
use crate::utils::{date_bounds, parse_ts};

#[derive(Parser)]
#[command(name = "stagehand", version, about = "Ticket governance reporting over a fetched snapshot")]
struct Cli {
    /// Snapshot JSON document (teams/projects/tickets/movements)
    snapshot: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum BoardView {
    /// Live tracker status text, all columns
    Sprint,
    /// Canonical stages, active columns plus backlog/completed/rollback panels
    Execution,
}

#[derive(Subcommand)]
enum Command {
    /// Print a team's board
    Board {
        #[arg(long)]
        team: String,
        #[arg(long, value_enum, default_value = "execution")]
        view: BoardView,
    },
    /// Per-team active/done workload with dev vs incident split
    Workload,
    /// Per-team points delivery
    Delivery {
        /// Inclusive range start, ISO8601 or YYYY-MM-DD
        #[arg(long)]
        start: Option<String>,
        /// Inclusive range end
        #[arg(long)]
        end: Option<String>,
    },
    /// Canonical stage histogram
    Histogram,
    /// Backlog risk buckets
    Risk,
    /// Support-tier escalations (de-escalations are excluded)
    Escalations,
}

pub fn run() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let raw = fs::read_to_string(&cli.snapshot)
        .with_context(|| format!("cannot read snapshot {}", cli.snapshot.display()))?;
    let snapshot = snapshot_from_str(&raw).context("snapshot decode failed, check backend connectivity")?;
    let tickets = annotate(snapshot.tickets.clone());

    match cli.command {
        Command::Board { team, view } => cmd_board(&snapshot, &tickets, &team, view),
        Command::Workload => cmd_workload(&snapshot, &tickets),
        Command::Delivery { start, end } => cmd_delivery(&snapshot, &tickets, start, end),
        Command::Histogram => cmd_histogram(&tickets),
        Command::Risk => cmd_risk(&tickets),
        Command::Escalations => cmd_escalations(&snapshot),
    }
    Ok(())
}

/// Team record by name from the snapshot, or a synthetic one so the
/// prefix/free-text fallbacks still apply for teams the fetch layer omitted.
fn find_team(snapshot: &Snapshot, name: &str) -> Team {
    snapshot
        .teams
        .iter()
        .find(|t| t.name.eq_ignore_ascii_case(name.trim()))
        .cloned()
        .unwrap_or_else(|| Team::new(-1, name))
}

fn ticket_line(ticket: &AnnotatedTicket) -> String {
    let key = ticket.ticket.key.as_deref().unwrap_or("-");
    format!("  {:<10} {}", key, ticket.ticket.title)
}

fn cmd_board(snapshot: &Snapshot, tickets: &[AnnotatedTicket], team_name: &str, view: BoardView) {
    let team = find_team(snapshot, team_name);
    let mine = TicketFilter::new().team(&team).apply(tickets, &snapshot.projects);
    let schema = schema_for(&team.name);

    println!("{} board for {}", if view == BoardView::Sprint { "Sprint" } else { "Execution" }, team.name);

    match view {
        BoardView::Sprint => {
            for bucket in sprint_board(schema, &mine) {
                print_heading(bucket.column.label, bucket.tickets.len());
                for ticket in bucket.tickets {
                    println!("{}", ticket_line(ticket));
                }
            }
        }
        BoardView::Execution => {
            let board = execution_board(schema, &mine);
            for bucket in &board.columns {
                print_heading(bucket.column.label, bucket.tickets.len());
                for ticket in &bucket.tickets {
                    println!("{}", ticket_line(ticket));
                }
            }
            print_heading("Backlog", board.backlog.len());
            for ticket in &board.backlog {
                println!("{}", ticket_line(ticket));
            }
            print_heading("Completed", board.completed.len());
            for ticket in &board.completed {
                println!("{}", ticket_line(ticket));
            }
            print_heading("Rollbacks", board.rollbacks.len());
            for ticket in &board.rollbacks {
                println!("{}", ticket_line(ticket));
            }
        }
    }
}

fn cmd_workload(snapshot: &Snapshot, tickets: &[AnnotatedTicket]) {
    let rollup = report::workload_by_team(&snapshot.teams, tickets, &snapshot.projects);
    let rows: Vec<Vec<String>> = rollup
        .iter()
        .map(|tw| {
            vec![
                tw.team.clone(),
                tw.workload.total.to_string(),
                tw.workload.active.to_string(),
                tw.workload.done.to_string(),
                tw.categories.dev.to_string(),
                tw.categories.incidents.to_string(),
                format!("{:.2}", report::incident_density(tw.categories)),
            ]
        })
        .collect();
    print_table(
        &["Team", "Total", "Active", "Done", "Dev", "Incidents", "Density"],
        &rows,
    );

    // Observed data window; tickets with no parsable created date are skipped
    if let Some((min, max)) = date_bounds(tickets.iter().map(|t| t.ticket.created_at)) {
        println!();
        println!("Data window: {} to {}", format_day(min), format_day(max));
    }
}

fn format_day(ts: i64) -> String {
    chrono::DateTime::from_timestamp(ts, 0)
        .map(|dt| dt.date_naive().to_string())
        .unwrap_or_else(|| ts.to_string())
}

fn cmd_delivery(
    snapshot: &Snapshot,
    tickets: &[AnnotatedTicket],
    start: Option<String>,
    end: Option<String>,
) {
    let start_ts = start.as_deref().and_then(parse_ts);
    let end_ts = end.as_deref().and_then(parse_ts);
    let date_filtered = start_ts.is_some() || end_ts.is_some();

    let windowed = if date_filtered {
        TicketFilter::new()
            .date_range(DateField::CreatedOrUpdated, start_ts, end_ts)
            .apply(tickets, &snapshot.projects)
    } else {
        tickets.to_vec()
    };

    let rows: Vec<Vec<String>> =
        report::delivery_by_team(&snapshot.teams, &windowed, &snapshot.projects, date_filtered)
            .iter()
            .map(|d| {
                vec![
                    d.team.clone(),
                    format!("{:.1}", d.planned),
                    format!("{:.1}", d.completed),
                    format!("{}%", d.percent),
                ]
            })
            .collect();
    print_table(&["Team", "Planned", "Completed", "Progress"], &rows);
}

fn cmd_histogram(tickets: &[AnnotatedTicket]) {
    let rows: Vec<Vec<String>> = report::stage_histogram(tickets)
        .iter()
        .map(|(label, count)| vec![label.to_string(), count.to_string()])
        .collect();
    print_table(&["Stage", "Tickets"], &rows);
}

fn cmd_risk(tickets: &[AnnotatedTicket]) {
    let buckets = report::risk_buckets(tickets);
    for (label, bucket) in [
        ("High", &buckets.high),
        ("Medium", &buckets.medium),
        ("Low", &buckets.low),
    ] {
        print_heading(label, bucket.len());
        for ticket in bucket {
            println!("{}", ticket_line(ticket));
        }
    }
}

fn cmd_escalations(snapshot: &Snapshot) {
    let listing = report::escalation_report(&snapshot.movements);
    let rows: Vec<Vec<String>> = listing
        .escalations
        .iter()
        .map(|m| {
            let tier = |raw: Option<&crate::models::RawField>| {
                report::parse_tier(raw)
                    .map(|t| format!("L{}", t))
                    .unwrap_or_else(|| "-".to_string())
            };
            vec![
                m.ticket_key.clone(),
                tier(m.from_level.as_ref()),
                tier(m.to_level.as_ref()),
            ]
        })
        .collect();
    print_table(&["Ticket", "From", "To"], &rows);
    if listing.unsupported > 0 {
        println!();
        println!("{} de-escalation(s) not shown (unsupported in this view)", listing.unsupported);
    }
}
