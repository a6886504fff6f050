pub mod date;

pub use date::{date_bounds, parse_ts, round2};
