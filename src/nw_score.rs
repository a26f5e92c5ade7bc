//! Needleman-Wunsch last-row scan and the split-point search built on it.

use crate::scoring::ScoreParams;

/// Last row of the global alignment table of x against y (`score[m][0..=n]`),
/// computed in two rolling rows of length `y.len() + 1`.
pub fn nw_score_row(x: &[u8], y: &[u8], scoring: &ScoreParams) -> Vec<i32> {
    last_row(x.iter().copied(), y.iter().copied(), scoring)
}

/// Same as [`nw_score_row`] on `reverse(x)` and `reverse(y)`, without
/// materialising the reversed sequences.
pub fn nw_score_row_reversed(x: &[u8], y: &[u8], scoring: &ScoreParams) -> Vec<i32> {
    last_row(x.iter().rev().copied(), y.iter().rev().copied(), scoring)
}

fn last_row<I, J>(x: I, y: J, scoring: &ScoreParams) -> Vec<i32>
where
    I: Iterator<Item = u8>,
    J: Iterator<Item = u8> + ExactSizeIterator + Clone,
{
    let n = y.len();
    let mut prev: Vec<i32> = (0..=n).map(|j| j as i32 * scoring.gap).collect();
    let mut cur = vec![0i32; n + 1];

    for a in x {
        cur[0] = prev[0] + scoring.gap;
        for (j, b) in y.clone().enumerate() {
            cur[j + 1] = (prev[j] + scoring.score(a, b))
                .max(cur[j] + scoring.gap)
                .max(prev[j + 1] + scoring.gap);
        }
        std::mem::swap(&mut prev, &mut cur);
    }

    prev
}

/// Column maximising `left[idx] + right[k - 1 - idx]`; the first maximum wins.
///
/// `left` comes from the upper half of x against y, `right` from the reversed
/// lower half against reversed y, so the returned index is where y is split.
pub fn partition_y(left: &[i32], right: &[i32]) -> usize {
    debug_assert_eq!(left.len(), right.len());

    left.iter()
        .zip(right.iter().rev())
        .map(|(l, r)| l + r)
        .enumerate()
        .fold((0, i32::MIN), |best, (idx, sum)| {
            if sum > best.1 {
                (idx, sum)
            } else {
                best
            }
        })
        .0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_row_values() {
        let scoring = ScoreParams::default();
        assert_eq!(
            nw_score_row(b"GATT", b"GCATGCU", &scoring),
            vec![-8, -4, -3, -2, 2, 3, 1, -1]
        );
        assert_eq!(
            nw_score_row(b"ACAT", b"UCGTACG", &scoring),
            vec![-8, -7, -3, -2, 2, 0, -2, -4]
        );
    }

    #[test]
    fn test_score_row_seeds() {
        let scoring = ScoreParams::default();
        assert_eq!(nw_score_row(b"", b"ACG", &scoring), vec![0, -2, -4, -6]);
        assert_eq!(nw_score_row(b"ACG", b"", &scoring), vec![-6]);
    }

    #[test]
    fn test_reversed_row_matches_explicit_reverse() {
        let scoring = ScoreParams::new(3, -2, -1);
        let x = b"TACAGGT";
        let y = b"GTTACGA";
        let x_rev: Vec<u8> = x.iter().rev().copied().collect();
        let y_rev: Vec<u8> = y.iter().rev().copied().collect();
        assert_eq!(
            nw_score_row_reversed(x, y, &scoring),
            nw_score_row(&x_rev, &y_rev, &scoring)
        );
    }

    #[test]
    fn test_partition_pairs_opposite_ends() {
        assert_eq!(partition_y(&[1, 5, 2], &[0, 0, 9]), 0);
        assert_eq!(partition_y(&[1, 5, 2], &[0, 9, 0]), 1);
        assert_eq!(partition_y(&[-4, -2, 0], &[-6, 1, -3]), 1);
    }

    #[test]
    fn test_partition_ties_pick_first() {
        assert_eq!(partition_y(&[1, 1, 1], &[1, 1, 1]), 0);
        assert_eq!(partition_y(&[0, 3, 3], &[3, 3, 0]), 1);
    }
}
