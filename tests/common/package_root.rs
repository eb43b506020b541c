use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A throwaway package directory laid out like the published package.
/// Removed when the guard is dropped.
pub struct PackageRootGuard {
    dir: TempDir,
}

impl PackageRootGuard {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create test package directory");
        fs::create_dir_all(dir.path().join("bin")).expect("Failed to create bin directory");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.path().join("bin")
    }

    pub fn record_path(&self) -> PathBuf {
        self.bin_dir().join(".binary-path")
    }

    #[allow(dead_code)]
    pub fn read_record(&self) -> String {
        fs::read_to_string(self.record_path()).expect("Failed to read .binary-path")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creates_and_cleans_up_directory() {
        let test_path = {
            let guard = PackageRootGuard::new();
            assert!(guard.bin_dir().is_dir());
            guard.path().to_path_buf()
        };
        assert!(!test_path.exists());
    }
}
