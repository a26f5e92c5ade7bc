use crate::scoring::ScoreParams;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignmentMode {
    #[default]
    Local,  // Smith-Waterman crop, then Hirschberg on the region
    Global, // Hirschberg on the whole input
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AlignmentParams {
    pub mode: AlignmentMode,
    pub scoring: ScoreParams,
}

impl AlignmentParams {
    pub fn new(mode: AlignmentMode, scoring: ScoreParams) -> Self {
        Self { mode, scoring }
    }
}
