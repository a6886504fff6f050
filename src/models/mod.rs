// Data models for the dashboard core.
// All records arrive fully formed from the fetch layer and are read-only here.

pub mod movement;
pub mod stage;
pub mod team;
pub mod ticket;

pub use movement::Movement;
pub use stage::{CanonicalStage, Priority};
pub use team::{Project, Team};
pub use ticket::{AnnotatedTicket, RawField, Ticket};
