//! Progress presentation layer
//!
//! This module handles:
//! - A spinner on stderr while the analysis engine runs
//! - A plain stderr log line in verbose mode when stderr is not a terminal
//! - Silent progress otherwise (pipes, CI, tests)
//!
//! All progress reporting goes through the ProgressReporter trait, so the
//! report on stdout is never interleaved with progress output.

use std::time::Duration;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

/// Progress reporter trait for long-running operations
pub trait ProgressReporter {
    /// Show `message` until the operation finishes
    fn start(&mut self, message: &str);

    /// Clear progress after success
    fn finish(&mut self);

    /// Clear progress after a failure
    fn abandon(&mut self);
}

/// Which reporter to use for a given stderr and verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReporterMode {
    /// Spinner; its message stays on screen after success when verbose
    Spinner { keep_message: bool },
    /// One dimmed log line per operation
    Log,
    Silent,
}

impl ReporterMode {
    pub fn select(attended_terminal: bool, verbose: bool) -> Self {
        match (attended_terminal, verbose) {
            (true, keep_message) => ReporterMode::Spinner { keep_message },
            (false, true) => ReporterMode::Log,
            (false, false) => ReporterMode::Silent,
        }
    }

    pub fn into_reporter(self) -> Box<dyn ProgressReporter> {
        match self {
            ReporterMode::Spinner { keep_message } => Box::new(SpinnerProgressReporter {
                spinner: None,
                keep_message,
            }),
            ReporterMode::Log => Box::new(LogProgressReporter),
            ReporterMode::Silent => Box::new(SilentProgressReporter),
        }
    }
}

/// Pick the reporter matching the attached stderr
///
/// Each progress message is shown exactly once, either by the spinner or as
/// a log line.
pub fn reporter_for_stderr(verbose: bool) -> Box<dyn ProgressReporter> {
    ReporterMode::select(console::user_attended_stderr(), verbose).into_reporter()
}

/// Interactive reporter drawing an indicatif spinner on stderr
#[derive(Default)]
pub struct SpinnerProgressReporter {
    spinner: Option<ProgressBar>,
    keep_message: bool,
}

impl ProgressReporter for SpinnerProgressReporter {
    fn start(&mut self, message: &str) {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));
        self.spinner = Some(spinner);
    }

    fn finish(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            if self.keep_message {
                spinner.finish();
            } else {
                spinner.finish_and_clear();
            }
        }
    }

    fn abandon(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.abandon();
        }
    }
}

/// Verbose reporter for non-interactive stderr
#[derive(Default)]
pub struct LogProgressReporter;

impl ProgressReporter for LogProgressReporter {
    fn start(&mut self, message: &str) {
        eprintln!("{}", Style::new().dim().for_stderr().apply_to(message));
    }

    fn finish(&mut self) {}

    fn abandon(&mut self) {}
}

/// Silent progress reporter
///
/// No-op implementation used when stderr is not a terminal and verbose
/// output is off.
#[derive(Default)]
pub struct SilentProgressReporter;

impl ProgressReporter for SilentProgressReporter {
    fn start(&mut self, _message: &str) {
        // No-op for silent mode
    }

    fn finish(&mut self) {
        // No-op for silent mode
    }

    fn abandon(&mut self) {
        // No-op for silent mode
    }
}
