// Derived aggregations over filtered, annotated ticket sets.
// Every computation here is a single linear pass; nothing is cached, each
// filter change simply recomputes.

pub mod correlation;
pub mod delivery;
pub mod escalation;
pub mod histogram;
pub mod risk;
pub mod workload;

pub use correlation::{incident_density, incident_density_of};
pub use delivery::{delivery_by_team, Delivery};
pub use escalation::{classify, escalation_report, parse_tier, EscalationReport, TierMove};
pub use histogram::stage_histogram;
pub use risk::{risk_buckets, RiskBuckets, RiskLevel};
pub use workload::{categorize, workload, workload_by_team, CategoryCounts, TeamWorkload, Workload};
