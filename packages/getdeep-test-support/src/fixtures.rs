//! Question pools and scratch store locations.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// `n` distinct questions named `{prefix} 0`, `{prefix} 1`, ...
///
/// ```
/// use getdeep_test_support::numbered_pool;
///
/// assert_eq!(numbered_pool("deep", 2), vec!["deep 0", "deep 1"]);
/// ```
pub fn numbered_pool(prefix: &str, n: usize) -> Vec<String> {
    (0..n).map(|i| format!("{prefix} {i}")).collect()
}

/// A progress file path inside a directory removed on drop.
pub struct TempStore {
    dir: TempDir,
    path: PathBuf,
}

impl TempStore {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("progress.json");
        Self { dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Raw file contents, or `None` before the first write.
    pub fn contents(&self) -> Option<String> {
        std::fs::read_to_string(&self.path).ok()
    }
}

impl Default for TempStore {
    fn default() -> Self {
        Self::new()
    }
}
