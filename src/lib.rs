//! Stagehand - status normalization and board projection for ticket dashboards
//!
//! This library is the domain core behind a ticket-governance dashboard:
//! - Canonical stage/priority resolution for heterogeneous tracker statuses
//! - Static per-team board schemas and sprint/execution board projection
//! - A composable, pure filter pipeline over ticket collections
//! - Derived aggregations (workload, delivery, histograms, risk, escalations)
//! - Tolerant decoding of upstream JSON records
//!
//! Everything here is synchronous, pure computation over already-fetched
//! collections; fetching, auth, and rendering live outside this crate.
//!
//! # Example
//!
//! ```
//! use stagehand::models::{RawField, Ticket};
//! use stagehand::resolve::annotate;
//! use stagehand::report::stage_histogram;
//!
//! let mut ticket = Ticket::new(1, "Fix login");
//! ticket.raw_status = Some(RawField::from("IN_PROGRESS"));
//! let tickets = annotate(vec![ticket]);
//! assert_eq!(stage_histogram(&tickets), vec![("In Progress", 1)]);
//! ```

pub mod board;
pub mod cli;
pub mod filter;
pub mod ingest;
pub mod models;
pub mod report;
pub mod resolve;
pub mod utils;
