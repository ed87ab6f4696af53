//! Size report produced by an analysis engine
//!
//! The tree is built once per analysis run and only read afterwards.

use serde::{Deserialize, Serialize};

/// Top-level result of analyzing one archive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleReport {
    pub name: String,
    pub version: String,
    pub install_size: u64,
    /// Absent when the engine cannot estimate the transfer size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_size: Option<u64>,
    #[serde(default)]
    pub artifacts: Vec<ArtifactNode>,
}

/// A file or directory-like unit inside the archive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactNode {
    /// Slash-delimited path relative to the archive root
    pub path: String,
    /// Cumulative size of this artifact and everything beneath it
    pub size: u64,
    /// `None` for leaves, `Some` (possibly empty) for containers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ArtifactNode>>,
}

impl ArtifactNode {
    pub fn leaf(path: impl Into<String>, size: u64) -> Self {
        Self {
            path: path.into(),
            size,
            children: None,
        }
    }

    pub fn container(path: impl Into<String>, size: u64, children: Vec<ArtifactNode>) -> Self {
        Self {
            path: path.into(),
            size,
            children: Some(children),
        }
    }

    /// Final `/`-delimited segment of the path
    pub fn name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    /// Number of nodes in this subtree, including this one
    pub fn subtree_len(&self) -> usize {
        1 + self
            .children
            .iter()
            .flatten()
            .map(ArtifactNode::subtree_len)
            .sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_last_segment() {
        assert_eq!(ArtifactNode::leaf("Demo.app/Frameworks/Lib", 1).name(), "Lib");
        assert_eq!(ArtifactNode::leaf("Demo.app", 1).name(), "Demo.app");
    }

    #[test]
    fn test_name_of_trailing_slash_path_is_empty() {
        assert_eq!(ArtifactNode::leaf("Demo.app/", 1).name(), "");
    }

    #[test]
    fn test_subtree_len() {
        let node = ArtifactNode::container(
            "A",
            3,
            vec![
                ArtifactNode::leaf("A/b", 1),
                ArtifactNode::container("A/c", 2, vec![ArtifactNode::leaf("A/c/d", 2)]),
                ArtifactNode::container("A/e", 0, vec![]),
            ],
        );
        assert_eq!(node.subtree_len(), 5);
    }

    #[test]
    fn test_deserialize_engine_json() {
        let json = r#"{
            "name": "Demo",
            "version": "1.0",
            "installSize": 2048,
            "artifacts": [
                {"path": "Demo.app", "size": 2048, "children": [
                    {"path": "Demo.app/Assets.car", "size": 1024}
                ]}
            ]
        }"#;
        let report: BundleReport = serde_json::from_str(json).expect("Should parse");
        assert_eq!(report.download_size, None);
        assert_eq!(report.install_size, 2048);
        assert_eq!(report.artifacts[0].subtree_len(), 2);
        assert_eq!(report.artifacts[0].children.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn test_zero_download_size_is_kept() {
        let json = r#"{"name":"Demo","version":"1.0","installSize":0,"downloadSize":0}"#;
        let report: BundleReport = serde_json::from_str(json).expect("Should parse");
        assert_eq!(report.download_size, Some(0));
        assert!(report.artifacts.is_empty());
    }
}
