use crate::models::CanonicalStage;

/// How a column matches the live (un-normalized) tracker status text on the
/// sprint board.
#[derive(Debug)]
pub enum RawMatcher {
    /// Exact membership against curated raw spellings, ignoring case and
    /// whitespace
    AnyOf(&'static [&'static str]),
    /// Case-insensitive substring test. Used only by the Security Testing
    /// column: trackers emit too many free-text variants to enumerate.
    Contains(&'static str),
}

/// One board column with its two independent matchers.
///
/// The same tickets feed two boards: the sprint board buckets on raw status
/// text via `raw`, the execution board buckets on canonical stage via
/// `stages`. The matchers are independent because the per-team external
/// boards were configured independently of the canonical model.
#[derive(Debug)]
pub struct BoardColumn {
    pub label: &'static str,
    pub color: &'static str,
    pub raw: RawMatcher,
    pub stages: &'static [CanonicalStage],
}

fn squash(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(|c| c.to_lowercase())
        .collect()
}

impl BoardColumn {
    pub fn matches_raw(&self, raw: &str) -> bool {
        match &self.raw {
            RawMatcher::AnyOf(spellings) => {
                let wanted = squash(raw);
                spellings.iter().any(|s| squash(s) == wanted)
            }
            RawMatcher::Contains(needle) => raw.to_lowercase().contains(needle),
        }
    }

    pub fn matches_stage(&self, stage: CanonicalStage) -> bool {
        self.stages.contains(&stage)
    }
}

/// Ordered column layout for one team's boards
#[derive(Debug)]
pub struct BoardSchema {
    pub team: &'static str,
    pub columns: &'static [BoardColumn],
}

impl BoardSchema {
    /// Execution-board slice: active work-in-progress columns only.
    ///
    /// The first (To Do) and last (Done) columns are always excluded; those
    /// states render in dedicated backlog/completed panels instead.
    pub fn execution_columns(&self) -> &'static [BoardColumn] {
        if self.columns.len() < 2 {
            return &[];
        }
        &self.columns[1..self.columns.len() - 1]
    }
}
