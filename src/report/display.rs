//! Writing a rendered report to a terminal or pipe

use std::io::Write;

use console::Style;

use super::{RenderOptions, render_report};
use crate::domain::BundleReport;
use crate::error::Result;

/// Write the full report to `out`
///
/// The header line is bold when stdout is a terminal; piped output stays
/// plain text.
pub fn print_report<W: Write>(
    report: &BundleReport,
    options: &RenderOptions,
    out: &mut W,
) -> Result<()> {
    let mut lines = render_report(report, options).into_iter();

    if let Some(header) = lines.next() {
        writeln!(out, "{}", Style::new().bold().apply_to(header))?;
    }
    for line in lines {
        writeln!(out, "{line}")?;
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ArtifactNode;

    #[test]
    fn test_print_report_writes_every_line() {
        let report = BundleReport {
            name: "Demo".to_string(),
            version: "3.1".to_string(),
            install_size: 1536,
            download_size: Some(1024),
            artifacts: vec![
                ArtifactNode::leaf("Small", 512),
                ArtifactNode::container(
                    "Demo.app",
                    1024,
                    vec![ArtifactNode::leaf("Demo.app/Demo", 1024)],
                ),
            ],
        };

        console::set_colors_enabled(false);
        let mut out = Vec::new();
        print_report(&report, &RenderOptions::default(), &mut out).expect("Should print");

        let text = String::from_utf8(out).expect("Output should be UTF-8");
        assert_eq!(
            text,
            "Demo (3.1) bundle report is ready:\n\
             Download size: 1.0KB\n\
             Install size: 1.5KB\n\
             Total artifacts: 2\n\
             \n\
             ∙ Demo.app: 1.0KB\n    \
             ∙ Demo: 1.0KB\n\
             ∙ Small: 512.0B\n"
        );
    }
}
