//! Analyze command implementation
//!
//! Validate the path, run the analysis engine once, then print the report.
//! Nothing is written to stdout unless every step before printing succeeded.

use std::io::Write;

use crate::analysis::{AnalysisEngine, ZipCatalogEngine};
use crate::cli::Cli;
use crate::domain::ArchivePath;
use crate::error::Result;
use crate::report::{RenderOptions, display};
use crate::ui::{self, ProgressReporter};

pub fn run(cli: Cli) -> Result<()> {
    let path = ArchivePath::from_current_dir(&cli.path)?;

    let mut progress = ui::reporter_for_stderr(cli.verbose);
    let mut stdout = std::io::stdout().lock();
    report_archive(
        &ZipCatalogEngine,
        &path,
        progress.as_mut(),
        &RenderOptions::default(),
        &mut stdout,
    )
}

/// Analyze `path` with `engine` and write the rendered report to `out`
///
/// Engine failures are returned unchanged and leave `out` untouched.
pub fn report_archive<W: Write>(
    engine: &dyn AnalysisEngine,
    path: &ArchivePath,
    progress: &mut dyn ProgressReporter,
    options: &RenderOptions,
    out: &mut W,
) -> Result<()> {
    progress.start(&format!("Analyzing bundle at {path}"));

    let report = match engine.analyze(path) {
        Ok(report) => {
            progress.finish();
            report
        }
        Err(e) => {
            progress.abandon();
            return Err(e);
        }
    };

    display::print_report(&report, options, out)
}
