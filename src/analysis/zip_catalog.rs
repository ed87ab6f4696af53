//! Size tree built from an archive's ZIP central directory
//!
//! Only entry metadata is read, plus the app's `Info.plist` for its version.
//! Payload files are never decompressed or written to disk. Declared sizes
//! are untrusted, so every sum saturates at `u64::MAX`.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};

use zip::ZipArchive;

use super::AnalysisEngine;
use crate::domain::{ArchivePath, ArtifactNode, BundleReport};
use crate::error::{Result, analysis};

/// Wrapper directory that holds the app bundle inside an `.ipa`
const PAYLOAD_DIR: &str = "Payload";

const APP_SUFFIX: &str = ".app";

const UNKNOWN_VERSION: &str = "unknown";

/// Upper bound on how much of `Info.plist` is read
const MAX_PLIST_BYTES: u64 = 1024 * 1024;

const VERSION_KEYS: [&str; 2] = ["CFBundleShortVersionString", "CFBundleVersion"];

/// Analysis engine reading sizes from the archive catalog
#[derive(Debug, Default, Clone, Copy)]
pub struct ZipCatalogEngine;

impl AnalysisEngine for ZipCatalogEngine {
    fn analyze(&self, path: &ArchivePath) -> Result<BundleReport> {
        let fail = |reason: String| analysis::failed(path.to_string(), reason);

        let file = File::open(path.as_path()).map_err(|e| fail(e.to_string()))?;
        let download_size = file.metadata().ok().map(|m| m.len());
        let mut archive = ZipArchive::new(BufReader::new(file)).map_err(|e| fail(e.to_string()))?;

        let catalog = read_catalog(&mut archive).map_err(|e| fail(e.to_string()))?;

        let version = catalog
            .app_dir
            .as_deref()
            .and_then(|app| read_version(&mut archive, app))
            .unwrap_or_else(|| UNKNOWN_VERSION.to_string());

        let name = catalog
            .app_dir
            .as_deref()
            .and_then(|app| app.strip_suffix(APP_SUFFIX))
            .map_or_else(|| path.stem(), str::to_string);

        let artifacts: Vec<ArtifactNode> = catalog
            .root
            .into_iter()
            .map(|(segment, entry)| entry.into_node(segment))
            .collect();

        Ok(BundleReport {
            name,
            version,
            install_size: catalog.install_size,
            download_size,
            artifacts,
        })
    }
}

/// Directory tree assembled from entry names
#[derive(Debug, Default)]
struct Catalog {
    root: BTreeMap<String, CatalogEntry>,
    install_size: u64,
    /// First `*.app` directory found under `Payload/`
    app_dir: Option<String>,
}

#[derive(Debug, Default)]
struct CatalogEntry {
    size: u64,
    children: Option<BTreeMap<String, CatalogEntry>>,
}

impl CatalogEntry {
    fn directory() -> Self {
        Self {
            size: 0,
            children: Some(BTreeMap::new()),
        }
    }

    /// Convert into an artifact whose path is `path`
    ///
    /// Directory sizes are the sum of their descendants.
    fn into_node(self, path: String) -> ArtifactNode {
        match self.children {
            None => ArtifactNode::leaf(path, self.size),
            Some(children) => {
                let children: Vec<ArtifactNode> = children
                    .into_iter()
                    .map(|(segment, entry)| entry.into_node(format!("{path}/{segment}")))
                    .collect();
                let size = children
                    .iter()
                    .fold(0u64, |total, child| total.saturating_add(child.size));
                ArtifactNode::container(path, size, children)
            }
        }
    }
}

impl Catalog {
    fn insert(&mut self, name: &str, size: u64, is_dir: bool) {
        let (in_payload, relative) = match name.strip_prefix(PAYLOAD_DIR) {
            Some(rest) if rest.is_empty() || rest.starts_with('/') => (true, rest),
            _ => (false, name),
        };

        let segments: Vec<&str> = relative.split('/').filter(|s| !s.is_empty()).collect();
        let Some((last, parents)) = segments.split_last() else {
            return;
        };

        if in_payload && self.app_dir.is_none() {
            if let Some(first) = segments.first().filter(|s| s.ends_with(APP_SUFFIX)) {
                if is_dir || segments.len() > 1 {
                    self.app_dir = Some((*first).to_string());
                }
            }
        }

        let mut level = &mut self.root;
        for parent in parents {
            let entry = level
                .entry((*parent).to_string())
                .or_insert_with(CatalogEntry::directory);
            level = entry.children.get_or_insert_with(BTreeMap::new);
        }

        if is_dir {
            let entry = level
                .entry((*last).to_string())
                .or_insert_with(CatalogEntry::directory);
            entry.children.get_or_insert_with(BTreeMap::new);
        } else {
            self.install_size = self.install_size.saturating_add(size);
            level.insert(
                (*last).to_string(),
                CatalogEntry {
                    size,
                    children: None,
                },
            );
        }
    }
}

fn read_catalog<R: Read + Seek>(archive: &mut ZipArchive<R>) -> zip::result::ZipResult<Catalog> {
    let mut catalog = Catalog::default();
    for index in 0..archive.len() {
        let entry = archive.by_index_raw(index)?;
        catalog.insert(entry.name(), entry.size(), entry.is_dir());
    }
    Ok(catalog)
}

/// Read the app version from `Info.plist`
///
/// Unreadable or unparseable entries yield `None`.
fn read_version<R: Read + Seek>(archive: &mut ZipArchive<R>, app_dir: &str) -> Option<String> {
    let entry = archive
        .by_name(&format!("{PAYLOAD_DIR}/{app_dir}/Info.plist"))
        .ok()?;

    let mut contents = Vec::new();
    entry.take(MAX_PLIST_BYTES).read_to_end(&mut contents).ok()?;

    version_from_plist(&contents)
}

/// Version string from the root dictionary of an XML or binary property list
fn version_from_plist(contents: &[u8]) -> Option<String> {
    let value = plist::Value::from_reader(Cursor::new(contents)).ok()?;
    let root = value.as_dictionary()?;

    VERSION_KEYS.iter().find_map(|key| {
        root.get(*key)
            .and_then(plist::Value::as_string)
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    })
}
