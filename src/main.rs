use std::path::PathBuf;
use std::process;

use clap::Parser;
use hirschberg_aligner::config::DEFAULT_OUTPUT_PATH;
use hirschberg_aligner::{
    AlignerError, AlignmentMode, AlignmentParams, RunConfig, ScoreParams, DEFAULT_GAP,
    DEFAULT_MATCH, DEFAULT_MISMATCH,
};
use log::info;

/// Optimal local alignment of two sequences in linear space
#[derive(Debug, Parser)]
#[command(name = "hirschberg_aligner", version)]
struct Args {
    /// First sequence file (FASTA or plain text)
    first: PathBuf,

    /// Second sequence file (FASTA or plain text)
    second: PathBuf,

    /// Where to write the aligned sequences
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Print the alignment to the console
    #[arg(short = 'c', long)]
    console: bool,

    /// Print the time taken by the alignment
    #[arg(short = 't', long)]
    time: bool,

    /// Align the whole inputs instead of the best local region
    #[arg(long)]
    global: bool,

    #[arg(long = "match", default_value_t = DEFAULT_MATCH, allow_hyphen_values = true)]
    match_score: i32,

    #[arg(long, default_value_t = DEFAULT_MISMATCH, allow_hyphen_values = true)]
    mismatch: i32,

    #[arg(long, default_value_t = DEFAULT_GAP, allow_hyphen_values = true)]
    gap: i32,
}

impl Args {
    fn into_config(self) -> RunConfig {
        let mode = if self.global {
            AlignmentMode::Global
        } else {
            AlignmentMode::Local
        };
        let scoring = ScoreParams::new(self.match_score, self.mismatch, self.gap);

        RunConfig {
            echo_to_console: self.console,
            report_time: self.time,
            ..RunConfig::new(self.first, self.second)
                .with_output(self.output)
                .with_params(AlignmentParams::new(mode, scoring))
        }
    }
}

fn main() {
    env_logger::init();

    let config = Args::parse().into_config();
    if let Err(e) = execute(&config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn execute(config: &RunConfig) -> Result<(), AlignerError> {
    let result = hirschberg_aligner::run(config)?;

    if config.echo_to_console {
        println!(
            "Region: first[{}..={}] second[{}..={}]",
            result.start_position.i,
            result.end_position.i,
            result.start_position.j,
            result.end_position.j
        );
        println!("{}", String::from_utf8_lossy(&result.aligned_seq1));
        println!("{}", result.match_line());
        println!("{}", String::from_utf8_lossy(&result.aligned_seq2));
        println!("Score: {}", result.score);
    }
    if config.report_time {
        println!("Time: {:.3} ms", result.statistics.execution_time_ms);
    }

    info!("alignment written to {}", config.output_path.display());
    Ok(())
}
