//! Common test utilities for ipa-report integration tests

use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;

/// A temporary directory holding generated archives
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace
    #[allow(dead_code)]
    pub fn write_file(&self, path: &str, content: &[u8]) -> PathBuf {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Write a ZIP archive whose entries are `(name, size)` pairs
    ///
    /// Names ending in `/` become directory entries; files are filled with
    /// `size` zero bytes.
    pub fn write_archive(&self, path: &str, entries: &[(&str, usize)]) -> PathBuf {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }

        let file = std::fs::File::create(&file_path).expect("Failed to create archive");
        let mut writer = zip::ZipWriter::new(file);
        let options = SimpleFileOptions::default();
        for (name, size) in entries {
            if name.ends_with('/') {
                writer
                    .add_directory(*name, options)
                    .expect("Failed to add directory");
            } else {
                writer.start_file(*name, options).expect("Failed to start file");
                writer
                    .write_all(&vec![0u8; *size])
                    .expect("Failed to write entry");
            }
        }
        writer.finish().expect("Failed to finish archive");
        file_path
    }

    /// Write a small but realistic app archive
    #[allow(dead_code)]
    pub fn write_demo_ipa(&self, path: &str) -> PathBuf {
        self.write_archive(
            path,
            &[
                ("Payload/", 0),
                ("Payload/Demo.app/", 0),
                ("Payload/Demo.app/Demo", 4096),
                ("Payload/Demo.app/Assets.car", 2048),
                ("Payload/Demo.app/en.lproj/Localizable.strings", 512),
                ("Payload/Demo.app/Frameworks/Lib.framework/Lib", 1024),
            ],
        )
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}
