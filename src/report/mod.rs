//! Report rendering
//!
//! Turns a [`BundleReport`] into the text printed by the CLI: a fixed set of
//! summary lines followed by the artifact tree, largest entries first.

pub mod display;

use crate::domain::{ArtifactNode, BundleReport};

/// Units used by [`format_size`], each 1024 times the previous one
const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Presentation settings for the artifact tree
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Spaces per indent level
    pub indent_width: usize,
    pub bullet: char,
    /// Containers whose path ends with one of these are shown as a single line
    pub opaque_suffixes: Vec<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent_width: 4,
            bullet: '∙',
            // compiled asset catalogs and localization bundles
            opaque_suffixes: vec![".car".to_string(), ".lproj".to_string()],
        }
    }
}

impl RenderOptions {
    fn expands_children(&self, artifact: &ArtifactNode) -> bool {
        !self
            .opaque_suffixes
            .iter()
            .any(|suffix| artifact.path.ends_with(suffix.as_str()))
    }
}

/// One artifact line before indentation is applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    pub text: String,
    pub indent: usize,
}

impl RenderedLine {
    /// Indent, bullet, space, text
    pub fn to_display(&self, options: &RenderOptions) -> String {
        format!(
            "{}{} {}",
            " ".repeat(self.indent * options.indent_width),
            options.bullet,
            self.text
        )
    }
}

/// Format a byte count with binary scaling and one decimal place
///
/// Scaling stops at TB, so larger values are shown as a big TB number.
/// Exact ties round to even, as `{:.1}` does (1280 bytes is `1.2KB`).
#[allow(clippy::cast_precision_loss)]
pub fn format_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    format!("{size:.1}{}", UNITS[unit_index])
}

/// Summary lines, in print order, ending with a blank separator
pub fn summary_lines(report: &BundleReport) -> Vec<String> {
    let mut lines = vec![format!(
        "{} ({}) bundle report is ready:",
        report.name, report.version
    )];

    if let Some(download_size) = report.download_size {
        lines.push(format!("Download size: {}", format_size(download_size)));
    }

    lines.push(format!("Install size: {}", format_size(report.install_size)));
    lines.push(format!("Total artifacts: {}", report.artifacts.len()));
    lines.push(String::new());
    lines
}

/// Append `artifact` and, unless it is opaque, its descendants depth-first
pub fn analyze_artifact(
    artifact: &ArtifactNode,
    indent: usize,
    options: &RenderOptions,
    contents: &mut Vec<RenderedLine>,
) {
    contents.push(RenderedLine {
        text: format!("{}: {}", artifact.name(), format_size(artifact.size)),
        indent,
    });

    if !options.expands_children(artifact) {
        return;
    }

    if let Some(children) = &artifact.children {
        for child in sorted_by_size(children) {
            analyze_artifact(child, indent + 1, options, contents);
        }
    }
}

/// Flatten the top-level artifacts, largest first
pub fn flatten_artifacts(artifacts: &[ArtifactNode], options: &RenderOptions) -> Vec<RenderedLine> {
    let capacity = artifacts.iter().map(ArtifactNode::subtree_len).sum();
    let mut contents = Vec::with_capacity(capacity);
    for artifact in sorted_by_size(artifacts) {
        analyze_artifact(artifact, 0, options, &mut contents);
    }
    contents
}

/// Every output line of the report, in print order
pub fn render_report(report: &BundleReport, options: &RenderOptions) -> Vec<String> {
    let mut lines = summary_lines(report);
    lines.extend(
        flatten_artifacts(&report.artifacts, options)
            .iter()
            .map(|line| line.to_display(options)),
    );
    lines
}

/// Size descending; equal sizes keep their original order
fn sorted_by_size(artifacts: &[ArtifactNode]) -> Vec<&ArtifactNode> {
    let mut sorted: Vec<&ArtifactNode> = artifacts.iter().collect();
    sorted.sort_by(|a, b| b.size.cmp(&a.size));
    sorted
}
