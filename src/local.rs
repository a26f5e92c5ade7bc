//! Smith-Waterman scoring in two rolling rows, and the two-pass crop that
//! turns its end coordinate into the bounds of the best local alignment.

use log::debug;

use crate::scoring::{BestCell, Position, ScoreParams};

/// Highest-scoring cell of a Smith-Waterman table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalMaximum {
    pub score: i32,
    /// 0-based into (x, y); the last aligned symbol of the local alignment.
    pub position: Position,
}

/// Sub-sequences bounding the optimal local alignment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalRegion {
    pub seq1: Vec<u8>,
    pub seq2: Vec<u8>,
    pub score: i32,
    /// Inclusive bounds of the region in the original inputs.
    pub start: Position,
    pub end: Position,
}

impl LocalRegion {
    pub fn is_empty(&self) -> bool {
        self.seq1.is_empty() && self.seq2.is_empty()
    }
}

/// Smith-Waterman over x (rows) and y (columns), keeping only the previous
/// and current column of the table.
///
/// Columns are scanned left to right and rows top to bottom within a
/// column; the first cell reaching the maximum wins. When no cell scores
/// above zero the result is `(0, 0)` with score 0.
pub fn smith_waterman(x: &[u8], y: &[u8], scoring: &ScoreParams) -> LocalMaximum {
    let m = x.len();
    let mut prev = vec![0i32; m + 1];
    let mut cur = vec![0i32; m + 1];
    let mut best = BestCell::new();

    for (j, &b) in y.iter().enumerate() {
        for i in 1..=m {
            let cell = (prev[i - 1] + scoring.score(x[i - 1], b))
                .max(cur[i - 1] + scoring.gap)
                .max(prev[i] + scoring.gap)
                .max(0);
            cur[i] = cell;
            best.offer(cell, Position::new(i - 1, j));
        }
        std::mem::swap(&mut prev, &mut cur);
    }

    let (score, position) = best.best();
    LocalMaximum { score, position }
}

/// Crops x and y to the optimal local alignment.
///
/// The forward pass finds where the alignment ends; a second pass over the
/// reversed prefixes finds where it starts. Empty input yields an empty
/// region.
pub fn extract_local_region(x: &[u8], y: &[u8], scoring: &ScoreParams) -> LocalRegion {
    if x.is_empty() || y.is_empty() {
        return LocalRegion::default();
    }

    let end = smith_waterman(x, y, scoring);
    let x_rev: Vec<u8> = x[..=end.position.i].iter().rev().copied().collect();
    let y_rev: Vec<u8> = y[..=end.position.j].iter().rev().copied().collect();

    let back = smith_waterman(&x_rev, &y_rev, scoring);
    let seq1: Vec<u8> = x_rev[..=back.position.i].iter().rev().copied().collect();
    let seq2: Vec<u8> = y_rev[..=back.position.j].iter().rev().copied().collect();

    let start = Position::new(
        end.position.i - back.position.i,
        end.position.j - back.position.j,
    );
    debug!(
        "local region x[{}..={}] y[{}..={}] score {}",
        start.i, end.position.i, start.j, end.position.j, end.score
    );

    LocalRegion {
        seq1,
        seq2,
        score: end.score,
        start,
        end: end.position,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_sequences_end_at_last_cell() {
        let scoring = ScoreParams::default();
        for seq in [&b"ACGT"[..], b"AAAAAA", b"GATTACA", b"A"] {
            let max = smith_waterman(seq, seq, &scoring);
            let last = seq.len() - 1;
            assert_eq!(max.position, Position::new(last, last));
            assert_eq!(max.score, seq.len() as i32 * scoring.match_score);
        }
    }

    #[test]
    fn test_no_positive_cell_reports_origin() {
        let max = smith_waterman(b"AAAA", b"CCCC", &ScoreParams::default());
        assert_eq!(max.score, 0);
        assert_eq!(max.position, Position::new(0, 0));
    }

    #[test]
    fn test_first_maximum_wins() {
        // "CA" matches at the end of x and the middle of y; the earlier
        // column wins over later equal scores.
        let max = smith_waterman(b"GATTACA", b"GCATGCU", &ScoreParams::default());
        assert_eq!(max.position, Position::new(6, 2));
        assert_eq!(max.score, 4);
    }

    #[test]
    fn test_extract_region() {
        let scoring = ScoreParams::default();

        let region = extract_local_region(b"GATTACA", b"GCATGCU", &scoring);
        assert_eq!(region.seq1, b"CA");
        assert_eq!(region.seq2, b"CA");
        assert_eq!(region.start, Position::new(5, 1));
        assert_eq!(region.end, Position::new(6, 2));

        let region = extract_local_region(b"AAGGTTACAGG", b"CCTTACAC", &scoring);
        assert_eq!(region.seq1, b"TTACA");
        assert_eq!(region.seq2, b"TTACA");
        assert_eq!(region.score, 10);
        assert_eq!(region.start, Position::new(4, 2));

        let region = extract_local_region(b"TTTTACGTACGTTTTT", b"GGGGACGTACGGGGG", &scoring);
        assert_eq!(region.seq1, b"ACGTACG");
        assert_eq!(region.seq2, b"ACGTACG");
    }

    #[test]
    fn test_extract_single_symbol_regions() {
        let scoring = ScoreParams::default();

        let region = extract_local_region(b"ACGT", b"TTTT", &scoring);
        assert_eq!(region.seq1, b"T");
        assert_eq!(region.seq2, b"T");
        assert_eq!(region.start, Position::new(3, 0));

        // Nothing aligns: both crops collapse to the first symbol.
        let region = extract_local_region(b"AAAA", b"CCCC", &scoring);
        assert_eq!(region.seq1, b"A");
        assert_eq!(region.seq2, b"C");
        assert_eq!(region.score, 0);
    }

    #[test]
    fn test_extract_empty_input() {
        let scoring = ScoreParams::default();
        assert!(extract_local_region(b"", b"ACGT", &scoring).is_empty());
        assert!(extract_local_region(b"ACGT", b"", &scoring).is_empty());
    }
}
