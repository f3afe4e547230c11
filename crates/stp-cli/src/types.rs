use std::path::PathBuf;

use stp_submit::RunStarted;

#[derive(Debug)]
pub struct CleanResult {
    pub input: PathBuf,
    /// `None` on a dry run.
    pub output: Option<PathBuf>,
    pub input_rows: usize,
    pub output_rows: usize,
    pub run: Option<RunStarted>,
}

#[derive(Debug)]
pub struct SendResult {
    pub input: PathBuf,
    pub bytes: usize,
    pub run: RunStarted,
}
