use serde::{Deserialize, Serialize};

/// Canonical pipeline stage
///
/// Every raw tracker status resolves to one of these 13 ordered stages.
/// Stages 0..=11 form the forward path (To Do through Live/Done); a ticket
/// may skip stages but conceptually only moves forward. Stage 12 (Rollback)
/// is reachable from any of stages 1..=11 and marks regression, not further
/// progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CanonicalStage {
    ToDo,
    InProgress,
    Blocked,
    Review,
    DevOps,
    ReadyToTest,
    Test,
    SecurityTesting,
    Uat,
    CabReady,
    ProductionReady,
    Done,
    Rollback,
}

impl CanonicalStage {
    /// Stage ordinal, 0..=12
    pub fn as_index(&self) -> u8 {
        match self {
            CanonicalStage::ToDo => 0,
            CanonicalStage::InProgress => 1,
            CanonicalStage::Blocked => 2,
            CanonicalStage::Review => 3,
            CanonicalStage::DevOps => 4,
            CanonicalStage::ReadyToTest => 5,
            CanonicalStage::Test => 6,
            CanonicalStage::SecurityTesting => 7,
            CanonicalStage::Uat => 8,
            CanonicalStage::CabReady => 9,
            CanonicalStage::ProductionReady => 10,
            CanonicalStage::Done => 11,
            CanonicalStage::Rollback => 12,
        }
    }

    pub fn from_index(idx: u8) -> Option<Self> {
        match idx {
            0 => Some(CanonicalStage::ToDo),
            1 => Some(CanonicalStage::InProgress),
            2 => Some(CanonicalStage::Blocked),
            3 => Some(CanonicalStage::Review),
            4 => Some(CanonicalStage::DevOps),
            5 => Some(CanonicalStage::ReadyToTest),
            6 => Some(CanonicalStage::Test),
            7 => Some(CanonicalStage::SecurityTesting),
            8 => Some(CanonicalStage::Uat),
            9 => Some(CanonicalStage::CabReady),
            10 => Some(CanonicalStage::ProductionReady),
            11 => Some(CanonicalStage::Done),
            12 => Some(CanonicalStage::Rollback),
            _ => None,
        }
    }

    /// The one authoritative display label for this stage
    pub fn label(&self) -> &'static str {
        match self {
            CanonicalStage::ToDo => "To Do",
            CanonicalStage::InProgress => "In Progress",
            CanonicalStage::Blocked => "Blocked",
            CanonicalStage::Review => "Review",
            CanonicalStage::DevOps => "DevOps",
            CanonicalStage::ReadyToTest => "Ready to Test",
            CanonicalStage::Test => "QA/Test",
            CanonicalStage::SecurityTesting => "Security Testing",
            CanonicalStage::Uat => "UAT",
            CanonicalStage::CabReady => "CAB Ready",
            CanonicalStage::ProductionReady => "Production Ready",
            CanonicalStage::Done => "Live/Done",
            CanonicalStage::Rollback => "Rollback",
        }
    }

    /// All stages in ordinal order
    pub fn all() -> impl Iterator<Item = CanonicalStage> {
        (0u8..=12).filter_map(CanonicalStage::from_index)
    }

    /// Done is the only terminal forward stage
    pub fn is_terminal(&self) -> bool {
        matches!(self, CanonicalStage::Done)
    }

    pub fn is_rollback(&self) -> bool {
        matches!(self, CanonicalStage::Rollback)
    }
}

/// Three-level priority ordinal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_index(&self) -> u8 {
        match self {
            Priority::Low => 0,
            Priority::Medium => 1,
            Priority::High => 2,
        }
    }

    pub fn from_index(idx: u8) -> Option<Self> {
        match idx {
            0 => Some(Priority::Low),
            1 => Some(Priority::Medium),
            2 => Some(Priority::High),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}
