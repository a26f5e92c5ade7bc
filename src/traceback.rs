use crate::scoring::{AlignmentStats, Position, ScoreParams};
use crate::{AlignerError, GAP_SYMBOL};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracebackOperation {
    Match,
    Mismatch,
    Insertion,
    Deletion,
}

/// Two rows of equal length over the input alphabet plus [`GAP_SYMBOL`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlignedPair {
    pub aligned_seq1: Vec<u8>,
    pub aligned_seq2: Vec<u8>,
}

impl AlignedPair {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            aligned_seq1: Vec::with_capacity(capacity),
            aligned_seq2: Vec::with_capacity(capacity),
        }
    }

    /// x against nothing: every symbol of x faces a gap.
    pub fn deletions(x: &[u8]) -> Self {
        Self {
            aligned_seq1: x.to_vec(),
            aligned_seq2: vec![GAP_SYMBOL; x.len()],
        }
    }

    /// Nothing against y: every symbol of y faces a gap.
    pub fn insertions(y: &[u8]) -> Self {
        Self {
            aligned_seq1: vec![GAP_SYMBOL; y.len()],
            aligned_seq2: y.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.aligned_seq1.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aligned_seq1.is_empty()
    }

    pub fn extend(&mut self, other: &AlignedPair) {
        self.aligned_seq1.extend_from_slice(&other.aligned_seq1);
        self.aligned_seq2.extend_from_slice(&other.aligned_seq2);
    }

    pub fn operations(&self) -> Result<Vec<TracebackOperation>, AlignerError> {
        if self.aligned_seq1.len() != self.aligned_seq2.len() {
            return Err(AlignerError::TracebackError(
                "aligned rows differ in length".to_string(),
            ));
        }

        self.aligned_seq1
            .iter()
            .zip(&self.aligned_seq2)
            .map(|(&a, &b)| match (a == GAP_SYMBOL, b == GAP_SYMBOL) {
                (false, false) if a == b => Ok(TracebackOperation::Match),
                (false, false) => Ok(TracebackOperation::Mismatch),
                (false, true) => Ok(TracebackOperation::Deletion),
                (true, false) => Ok(TracebackOperation::Insertion),
                (true, true) => Err(AlignerError::TracebackError(
                    "gap aligned with gap".to_string(),
                )),
            })
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct AlignmentResult {
    pub score: i32,
    pub aligned_seq1: Vec<u8>,
    pub aligned_seq2: Vec<u8>,
    pub operations: Vec<TracebackOperation>,
    pub start_position: Position,
    pub end_position: Position,
    pub statistics: AlignmentStats,
}

impl AlignmentResult {
    pub fn from_pair(
        pair: AlignedPair,
        start: Position,
        end: Position,
        scoring: &ScoreParams,
    ) -> Result<Self, AlignerError> {
        let operations = pair.operations()?;
        let statistics = AlignmentStats::collect(&pair.aligned_seq1, &pair.aligned_seq2)?;

        Ok(Self {
            score: statistics.total_score(scoring),
            aligned_seq1: pair.aligned_seq1,
            aligned_seq2: pair.aligned_seq2,
            operations,
            start_position: start,
            end_position: end,
            statistics,
        })
    }

    /// `|` for a match, `x` for a mismatch, a space for a gap column.
    pub fn match_line(&self) -> String {
        self.operations
            .iter()
            .map(|op| match op {
                TracebackOperation::Match => '|',
                TracebackOperation::Mismatch => 'x',
                TracebackOperation::Insertion | TracebackOperation::Deletion => ' ',
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Diagonal, // x[i-1] against y[j-1]
    Up,       // x[i-1] against a gap
    Left,     // gap against y[j-1]
}

/// Full `(rows × cols)` score table, row-major.
pub struct ScoreMatrix {
    data: Vec<i32>,
    rows: usize,
    cols: usize,
}

impl ScoreMatrix {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0; rows * cols],
            rows,
            cols,
        }
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: i32) {
        self.data[row * self.cols + col] = value;
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> i32 {
        self.data[row * self.cols + col]
    }

    /// Global alignment table of x (rows) against y (columns).
    pub fn global(x: &[u8], y: &[u8], scoring: &ScoreParams) -> Self {
        let mut f = Self::new(x.len() + 1, y.len() + 1);
        for i in 0..f.rows {
            f.set(i, 0, scoring.gap * i as i32);
        }
        for j in 0..f.cols {
            f.set(0, j, scoring.gap * j as i32);
        }
        for i in 1..f.rows {
            for j in 1..f.cols {
                let best = (f.get(i - 1, j - 1) + scoring.score(x[i - 1], y[j - 1]))
                    .max(f.get(i - 1, j) + scoring.gap)
                    .max(f.get(i, j - 1) + scoring.gap);
                f.set(i, j, best);
            }
        }
        f
    }
}

/// Needleman-Wunsch with a full score table and traceback.
///
/// Quadratic in space, so the Hirschberg driver only calls it when one side
/// has at most one symbol. The traceback prefers the diagonal, then up
/// (gap in y), then left (gap in x).
pub fn needleman_wunsch(x: &[u8], y: &[u8], scoring: &ScoreParams) -> AlignedPair {
    let f = ScoreMatrix::global(x, y, scoring);
    let mut pair = AlignedPair::with_capacity(x.len() + y.len());

    let (mut i, mut j) = (x.len(), y.len());
    while i > 0 || j > 0 {
        let here = f.get(i, j);
        let step = if i > 0 && j > 0 && here == f.get(i - 1, j - 1) + scoring.score(x[i - 1], y[j - 1]) {
            Direction::Diagonal
        } else if i > 0 && (j == 0 || here == f.get(i - 1, j) + scoring.gap) {
            Direction::Up
        } else {
            Direction::Left
        };

        match step {
            Direction::Diagonal => {
                pair.aligned_seq1.push(x[i - 1]);
                pair.aligned_seq2.push(y[j - 1]);
                i -= 1;
                j -= 1;
            }
            Direction::Up => {
                pair.aligned_seq1.push(x[i - 1]);
                pair.aligned_seq2.push(GAP_SYMBOL);
                i -= 1;
            }
            Direction::Left => {
                pair.aligned_seq1.push(GAP_SYMBOL);
                pair.aligned_seq2.push(y[j - 1]);
                j -= 1;
            }
        }
    }

    // Built from the bottom-right corner backwards
    pair.aligned_seq1.reverse();
    pair.aligned_seq2.reverse();
    pair
}
