//! Board projections
//!
//! Buckets an annotated ticket collection into a schema's columns. Two views
//! exist over the same tickets:
//!
//! - the sprint board keys on the live raw tracker status text;
//! - the execution board keys on canonical stage and shows only active
//!   work-in-progress columns, with To Do, Done, and rollback tickets pulled
//!   out into dedicated panels.

use crate::board::schema::{BoardColumn, BoardSchema};
use crate::models::{AnnotatedTicket, CanonicalStage};

/// One column's bucket of tickets
#[derive(Debug)]
pub struct ColumnBucket<'a> {
    pub column: &'static BoardColumn,
    pub tickets: Vec<&'a AnnotatedTicket>,
}

/// Execution-board projection with its side panels
#[derive(Debug)]
pub struct ExecutionBoard<'a> {
    pub columns: Vec<ColumnBucket<'a>>,
    /// Stage-0 tickets, rendered as a backlog list rather than a column
    pub backlog: Vec<&'a AnnotatedTicket>,
    /// Stage-11 tickets, rendered as a completed list
    pub completed: Vec<&'a AnnotatedTicket>,
    /// Rolled-back tickets, handled orthogonally to the columns
    pub rollbacks: Vec<&'a AnnotatedTicket>,
}

/// Sprint board: bucket by live raw status text.
///
/// Tickets whose status is an integer, missing, or matches no column's raw
/// matcher appear in no bucket; an unmapped status does not render on the
/// external boards either.
pub fn sprint_board<'a>(
    schema: &'static BoardSchema,
    tickets: &'a [AnnotatedTicket],
) -> Vec<ColumnBucket<'a>> {
    let mut buckets: Vec<ColumnBucket<'a>> = schema
        .columns
        .iter()
        .map(|column| ColumnBucket {
            column,
            tickets: Vec::new(),
        })
        .collect();

    for ticket in tickets {
        let raw = match ticket.ticket.raw_status.as_ref().and_then(|r| r.as_text()) {
            Some(raw) => raw,
            None => continue,
        };
        if let Some(bucket) = buckets.iter_mut().find(|b| b.column.matches_raw(raw)) {
            bucket.tickets.push(ticket);
        }
    }

    buckets
}

/// Execution board: bucket by canonical stage over the active columns only.
pub fn execution_board<'a>(
    schema: &'static BoardSchema,
    tickets: &'a [AnnotatedTicket],
) -> ExecutionBoard<'a> {
    let mut columns: Vec<ColumnBucket<'a>> = schema
        .execution_columns()
        .iter()
        .map(|column| ColumnBucket {
            column,
            tickets: Vec::new(),
        })
        .collect();
    let mut backlog = Vec::new();
    let mut completed = Vec::new();
    let mut rollbacks = Vec::new();

    for ticket in tickets {
        if ticket.ticket.is_rollback || ticket.stage.is_rollback() {
            rollbacks.push(ticket);
            continue;
        }
        match ticket.stage {
            CanonicalStage::ToDo => backlog.push(ticket),
            CanonicalStage::Done => completed.push(ticket),
            stage => {
                if let Some(bucket) = columns.iter_mut().find(|b| b.column.matches_stage(stage)) {
                    bucket.tickets.push(ticket);
                }
            }
        }
    }

    ExecutionBoard {
        columns,
        backlog,
        completed,
        rollbacks,
    }
}
