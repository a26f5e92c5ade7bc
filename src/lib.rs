//! Optimal local alignment of two sequences in linear space.
//!
//! Smith-Waterman locates the best local alignment region, then Hirschberg's
//! divide-and-conquer computes the global alignment of that region using
//! memory linear in the sequence lengths.
//!
//! ```
//! use hirschberg_aligner::{Aligner, AlignerParameters, Sequence};
//!
//! let aligner = Aligner::new(AlignerParameters::new());
//! let result = aligner
//!     .align(&Sequence::new(b"AAGGTTACAGG"), &Sequence::new(b"CCTTACAC"))
//!     .unwrap();
//! assert_eq!(result.aligned_seq1, b"TTACA");
//! assert_eq!(result.score, 10);
//! ```

use std::time::Instant;

use log::debug;
use thiserror::Error;

pub mod alignment_mode;
pub mod config;
pub mod fasta;
pub mod hirschberg;
pub mod local;
pub mod nw_score;
pub mod scoring;
pub mod traceback;

pub use alignment_mode::{AlignmentMode, AlignmentParams};
pub use config::RunConfig;
pub use hirschberg::{global_align, hirschberg};
pub use local::{extract_local_region, smith_waterman, LocalMaximum, LocalRegion};
pub use nw_score::{nw_score_row, nw_score_row_reversed, partition_y};
pub use scoring::{AlignmentStats, Position, ScoreParams};
pub use traceback::{needleman_wunsch, AlignedPair, AlignmentResult, TracebackOperation};

// Default linear scoring
pub const DEFAULT_MATCH: i32 = 2;
pub const DEFAULT_MISMATCH: i32 = -1;
pub const DEFAULT_GAP: i32 = -2;

/// Placeholder for an inserted or deleted position. Never valid in input.
pub const GAP_SYMBOL: u8 = b'-';

#[derive(Debug, Error)]
pub enum AlignerError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Empty sequence: {0}")]
    EmptySequence(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Traceback error: {0}")]
    TracebackError(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    data: Vec<u8>,
    description: Option<String>,
}

impl Sequence {
    pub fn new(data: &[u8]) -> Self {
        Self {
            data: data.to_vec(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Rejects empty sequences and sequences containing [`GAP_SYMBOL`].
    pub fn validate(&self, name: &str) -> Result<(), AlignerError> {
        if self.data.is_empty() {
            return Err(AlignerError::EmptySequence(format!("{} sequence", name)));
        }
        if let Some(pos) = self.data.iter().position(|&c| c == GAP_SYMBOL) {
            return Err(AlignerError::InvalidInput(format!(
                "{} sequence contains gap marker '{}' at position {}",
                name, GAP_SYMBOL as char, pos
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct AlignerParameters {
    params: AlignmentParams,
}

impl AlignerParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mut self, mode: AlignmentMode) -> Self {
        self.params.mode = mode;
        self
    }

    pub fn with_scoring(mut self, scoring: ScoreParams) -> Self {
        self.params.scoring = scoring;
        self
    }

    pub fn mode(&self) -> AlignmentMode {
        self.params.mode
    }

    pub fn scoring(&self) -> &ScoreParams {
        &self.params.scoring
    }
}

pub struct Aligner {
    params: AlignerParameters,
}

impl Aligner {
    pub fn new(params: AlignerParameters) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &AlignerParameters {
        &self.params
    }

    /// Aligns two sequences according to the configured mode.
    ///
    /// In [`AlignmentMode::Local`] the result covers only the optimal local
    /// region and its positions are the region bounds in the inputs. In
    /// [`AlignmentMode::Global`] the whole inputs are aligned.
    pub fn align(&self, seq0: &Sequence, seq1: &Sequence) -> Result<AlignmentResult, AlignerError> {
        seq0.validate("first")?;
        seq1.validate("second")?;

        let scoring = self.params.scoring();
        let (x, y) = (seq0.as_bytes(), seq1.as_bytes());
        let start_time = Instant::now();

        let (pair, start, end) = match self.params.mode() {
            AlignmentMode::Local => {
                let region = extract_local_region(x, y, scoring);
                debug!(
                    "cropped {}x{} to local region {}x{}",
                    x.len(),
                    y.len(),
                    region.seq1.len(),
                    region.seq2.len()
                );
                let pair = global_align(&region.seq1, &region.seq2, scoring);
                (pair, region.start, region.end)
            }
            AlignmentMode::Global => (
                global_align(x, y, scoring),
                Position::default(),
                Position::new(x.len() - 1, y.len() - 1),
            ),
        };

        let elapsed_ms = start_time.elapsed().as_secs_f32() * 1000.0;
        debug!("aligned {} columns in {:.3} ms", pair.len(), elapsed_ms);

        let mut result = AlignmentResult::from_pair(pair, start, end, scoring)?;
        result.statistics.execution_time_ms = elapsed_ms;
        Ok(result)
    }
}

/// Loads both inputs of `config`, aligns them and writes the alignment to
/// `config.output_path`.
pub fn run(config: &RunConfig) -> Result<AlignmentResult, AlignerError> {
    let seq0 = fasta::read_sequence(&config.first_path)?;
    let seq1 = fasta::read_sequence(&config.second_path)?;
    debug!("loaded sequences of length {} and {}", seq0.len(), seq1.len());

    let params = AlignerParameters::new()
        .with_mode(config.params.mode)
        .with_scoring(config.params.scoring);
    let result = Aligner::new(params).align(&seq0, &seq1)?;

    fasta::write_alignment_file(&config.output_path, &seq0, &seq1, &result)?;
    Ok(result)
}
