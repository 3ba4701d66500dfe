//! Driver configuration
//!
//! Replaces the build-time switches of older scanner drivers with a value
//! the caller assembles at runtime (usually from the command line).

use std::path::PathBuf;

use clap::ValueEnum;

use crate::output::{output_path, OutputFormat};

/// Where diagnostics and counter reports are written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum MessageRoute {
    /// Standard error
    #[default]
    Stderr,
    /// The token output file, ahead of the tokens
    Output,
}

/// Settings for one driver run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    pub input: PathBuf,
    /// Token file; defaults to the input path with `scn` appended
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    pub route: MessageRoute,
    pub count_ops: bool,
}

impl DriverConfig {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
            format: OutputFormat::default(),
            route: MessageRoute::default(),
            count_ops: false,
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_route(mut self, route: MessageRoute) -> Self {
        self.route = route;
        self
    }

    pub fn with_count_ops(mut self, count_ops: bool) -> Self {
        self.count_ops = count_ops;
        self
    }

    /// The token file this run writes
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| output_path(&self.input))
    }
}
