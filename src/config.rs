use std::path::PathBuf;

use crate::alignment_mode::AlignmentParams;

pub const DEFAULT_OUTPUT_PATH: &str = "output.txt";

/// Everything one command-line invocation needs.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub first_path: PathBuf,
    pub second_path: PathBuf,
    pub output_path: PathBuf,
    pub echo_to_console: bool,
    pub report_time: bool,
    pub params: AlignmentParams,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            first_path: PathBuf::new(),
            second_path: PathBuf::new(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            echo_to_console: false,
            report_time: false,
            params: AlignmentParams::default(),
        }
    }
}

impl RunConfig {
    pub fn new(first_path: impl Into<PathBuf>, second_path: impl Into<PathBuf>) -> Self {
        Self {
            first_path: first_path.into(),
            second_path: second_path.into(),
            ..Self::default()
        }
    }

    pub fn with_output(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }

    pub fn with_params(mut self, params: AlignmentParams) -> Self {
        self.params = params;
        self
    }
}
