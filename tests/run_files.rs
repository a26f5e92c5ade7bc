use std::fs;
use std::path::Path;

use hirschberg_aligner::{run, AlignerError, AlignmentMode, AlignmentParams, RunConfig, ScoreParams};
use tempfile::TempDir;

fn write(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_local_alignment_written_as_fasta() {
    let dir = TempDir::new().unwrap();
    let first = write(dir.path(), "first.fa", ">first sample\nAAGGTT\nACAGG\n");
    let second = write(dir.path(), "second.txt", "CCTTACAC\n");
    let output = dir.path().join("aligned.fa");

    let config = RunConfig::new(&first, &second).with_output(&output);
    let result = run(&config).unwrap();

    assert_eq!(result.score, 10);
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        ">optimal local alignment of first sample\nTTACA\n\
         >optimal local alignment of the second sequence\nTTACA\n"
    );
}

#[test]
fn test_global_mode_keeps_whole_inputs() {
    let dir = TempDir::new().unwrap();
    let first = write(dir.path(), "x.fa", ">x\nAGTACGCA\n");
    let second = write(dir.path(), "y.fa", ">y\nTATGC\n");
    let output = dir.path().join("out.txt");

    let params = AlignmentParams::new(AlignmentMode::Global, ScoreParams::default());
    let config = RunConfig::new(&first, &second)
        .with_output(&output)
        .with_params(params);
    run(&config).unwrap();

    let written = fs::read_to_string(&output).unwrap();
    let rows: Vec<&str> = written.lines().collect();
    assert_eq!(
        rows,
        vec![
            ">optimal local alignment of x",
            "AGTACGCA",
            ">optimal local alignment of y",
            "--TATGC-",
        ]
    );
}

#[test]
fn test_missing_input_is_io_error() {
    let dir = TempDir::new().unwrap();
    let second = write(dir.path(), "y.fa", "ACGT\n");
    let config = RunConfig::new(dir.path().join("absent.fa"), &second)
        .with_output(dir.path().join("out.txt"));

    assert!(matches!(run(&config), Err(AlignerError::Io(_))));
}

#[test]
fn test_gap_marker_in_input_rejected() {
    let dir = TempDir::new().unwrap();
    let first = write(dir.path(), "x.fa", ">x\nAC-GT\n");
    let second = write(dir.path(), "y.fa", "ACGT\n");
    let output = dir.path().join("out.txt");
    let config = RunConfig::new(&first, &second).with_output(&output);

    assert!(matches!(run(&config), Err(AlignerError::InvalidInput(_))));
    assert!(!output.exists());
}

#[test]
fn test_header_without_sequence_rejected() {
    let dir = TempDir::new().unwrap();
    let first = write(dir.path(), "x.fa", ">only a header\n");
    let second = write(dir.path(), "y.fa", "ACGT\n");
    let config = RunConfig::new(&first, &second).with_output(dir.path().join("out.txt"));

    assert!(matches!(run(&config), Err(AlignerError::EmptySequence(_))));
}
