//! Reading input sequences and writing alignments.
//!
//! Descriptor-led input is read as FASTA and only its first record is used.
//! Input without a descriptor line is taken as plain text: lines are trimmed
//! and concatenated. Output is two FASTA records, one per aligned row, whose
//! descriptor lines name the input each row came from.

use std::io::Write;
use std::path::Path;

use bio::io::fasta;

use crate::traceback::AlignmentResult;
use crate::{AlignerError, Sequence};

const OUTPUT_ID: &str = "optimal";
const FIRST_LABEL: &str = "the first sequence";
const SECOND_LABEL: &str = "the second sequence";

/// Parses sequence text; `name` only labels the error for empty input.
pub fn parse_sequence(text: &str, name: &str) -> Result<Sequence, AlignerError> {
    let body = text.trim_start();

    let seq = if body.starts_with('>') {
        let mut records = fasta::Reader::new(body.as_bytes()).records();
        match records.next().transpose()? {
            Some(record) => {
                let description = match record.desc() {
                    Some(desc) => format!("{} {}", record.id(), desc),
                    None => record.id().to_string(),
                };
                let seq = Sequence::new(record.seq());
                if description.is_empty() {
                    seq
                } else {
                    seq.with_description(description)
                }
            }
            None => Sequence::new(b""),
        }
    } else {
        let data: Vec<u8> = body.lines().flat_map(|line| line.trim().bytes()).collect();
        Sequence::new(&data)
    };

    if seq.is_empty() {
        return Err(AlignerError::EmptySequence(format!(
            "no sequence data in {}",
            name
        )));
    }
    Ok(seq)
}

pub fn read_sequence<P: AsRef<Path>>(path: P) -> Result<Sequence, AlignerError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    parse_sequence(&text, &path.display().to_string())
}

/// Description of the output record for `input`, after the `optimal` id.
pub fn record_description(input: &Sequence, fallback: &str) -> String {
    format!("local alignment of {}", input.description().unwrap_or(fallback))
}

fn write_records<W: Write>(
    writer: &mut fasta::Writer<W>,
    first: &Sequence,
    second: &Sequence,
    result: &AlignmentResult,
) -> Result<(), AlignerError> {
    for (input, label, row) in [
        (first, FIRST_LABEL, &result.aligned_seq1),
        (second, SECOND_LABEL, &result.aligned_seq2),
    ] {
        let desc = record_description(input, label);
        writer.write(OUTPUT_ID, Some(desc.as_str()), row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes both aligned rows of `result`, labelled by the inputs they came from.
pub fn write_alignment<W: Write>(
    writer: W,
    first: &Sequence,
    second: &Sequence,
    result: &AlignmentResult,
) -> Result<(), AlignerError> {
    write_records(&mut fasta::Writer::new(writer), first, second, result)
}

pub fn write_alignment_file<P: AsRef<Path>>(
    path: P,
    first: &Sequence,
    second: &Sequence,
    result: &AlignmentResult,
) -> Result<(), AlignerError> {
    write_records(&mut fasta::Writer::to_file(path)?, first, second, result)
}
