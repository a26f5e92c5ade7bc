//! Hirschberg's linear-space global alignment.
//!
//! Each pending sub-problem is a pair of slices into the caller's input. The
//! pair is split at the middle row of x and at the column of y where the
//! forward and backward score rows meet best, until one side is at most one
//! symbol long and the full-table aligner takes over. Sub-problems live on an
//! explicit LIFO stack with the upper half pushed last, so leaves are solved
//! left to right and their alignments can be appended in order.

use log::trace;

use crate::nw_score::{nw_score_row, nw_score_row_reversed, partition_y};
use crate::scoring::ScoreParams;
use crate::traceback::{needleman_wunsch, AlignedPair};

pub fn hirschberg(x: &[u8], y: &[u8], scoring: &ScoreParams) -> AlignedPair {
    let mut aligned = AlignedPair::with_capacity(x.len() + y.len());
    let mut pending: Vec<(&[u8], &[u8])> = vec![(x, y)];

    while let Some((x, y)) = pending.pop() {
        if x.is_empty() {
            aligned.extend(&AlignedPair::insertions(y));
        } else if y.is_empty() {
            aligned.extend(&AlignedPair::deletions(x));
        } else if x.len() == 1 || y.len() == 1 {
            aligned.extend(&needleman_wunsch(x, y, scoring));
        } else {
            let xmid = x.len() / 2;
            let upper = nw_score_row(&x[..xmid], y, scoring);
            let lower = nw_score_row_reversed(&x[xmid..], y, scoring);
            let ymid = partition_y(&upper, &lower);
            trace!("split {}x{} at ({}, {})", x.len(), y.len(), xmid, ymid);

            pending.push((&x[xmid..], &y[ymid..]));
            pending.push((&x[..xmid], &y[..ymid]));
        }
    }

    aligned
}

/// Optimal global alignment of x and y in linear space.
pub fn global_align(x: &[u8], y: &[u8], scoring: &ScoreParams) -> AlignedPair {
    hirschberg(x, y, scoring)
}
