pub mod registry;
pub mod schema;
pub mod view;

pub use registry::{fallback_schema, schema_for, team_for_key, team_for_prefix};
pub use schema::{BoardColumn, BoardSchema, RawMatcher};
pub use view::{execution_board, sprint_board, ColumnBucket, ExecutionBoard};
