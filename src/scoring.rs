use crate::{AlignerError, DEFAULT_GAP, DEFAULT_MATCH, DEFAULT_MISMATCH, GAP_SYMBOL};

/// Linear scoring scheme: one score for a match, one for a mismatch and a
/// constant penalty per gap column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreParams {
    pub match_score: i32,
    pub mismatch: i32,
    pub gap: i32,
}

impl Default for ScoreParams {
    fn default() -> Self {
        Self {
            match_score: DEFAULT_MATCH,
            mismatch: DEFAULT_MISMATCH,
            gap: DEFAULT_GAP,
        }
    }
}

impl ScoreParams {
    pub fn new(match_score: i32, mismatch: i32, gap: i32) -> Self {
        Self {
            match_score,
            mismatch,
            gap,
        }
    }

    #[inline]
    pub fn score(&self, a: u8, b: u8) -> i32 {
        if a == b {
            self.match_score
        } else {
            self.mismatch
        }
    }

    /// Scores an already aligned pair column by column.
    pub fn score_alignment(&self, seq1: &[u8], seq2: &[u8]) -> Result<i32, AlignerError> {
        Ok(AlignmentStats::collect(seq1, seq2)?.total_score(self))
    }
}

/// 0-based coordinate into (x, y).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub i: usize,
    pub j: usize,
}

impl Position {
    pub fn new(i: usize, j: usize) -> Self {
        Self { i, j }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlignmentStats {
    pub matches: u32,
    pub mismatches: u32,
    pub gaps: u32,
    pub execution_time_ms: f32,
}

impl AlignmentStats {
    /// Counts column kinds of an aligned pair. Rows must have equal length
    /// and no column may hold a gap in both rows.
    pub fn collect(seq1: &[u8], seq2: &[u8]) -> Result<Self, AlignerError> {
        if seq1.len() != seq2.len() {
            return Err(AlignerError::TracebackError(format!(
                "aligned rows differ in length: {} vs {}",
                seq1.len(),
                seq2.len()
            )));
        }

        seq1.iter()
            .zip(seq2)
            .enumerate()
            .try_fold(Self::default(), |mut acc, (col, (&a, &b))| {
                match (a == GAP_SYMBOL, b == GAP_SYMBOL) {
                    (true, true) => {
                        return Err(AlignerError::TracebackError(format!(
                            "gap aligned with gap at column {}",
                            col
                        )))
                    }
                    (true, false) | (false, true) => acc.gaps += 1,
                    (false, false) if a == b => acc.matches += 1,
                    (false, false) => acc.mismatches += 1,
                }
                Ok(acc)
            })
    }

    pub fn total_score(&self, scoring: &ScoreParams) -> i32 {
        self.matches as i32 * scoring.match_score
            + self.mismatches as i32 * scoring.mismatch
            + self.gaps as i32 * scoring.gap
    }
}

/// Running maximum over DP cells. Only a strictly greater score replaces
/// the current best, so the first cell reaching the maximum wins.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct BestCell {
    score: i32,
    position: Position,
}

impl BestCell {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn offer(&mut self, score: i32, pos: Position) {
        if score > self.score {
            self.score = score;
            self.position = pos;
        }
    }

    pub fn best(&self) -> (i32, Position) {
        (self.score, self.position)
    }
}
