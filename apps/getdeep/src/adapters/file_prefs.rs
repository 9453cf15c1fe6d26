//! JSON-file preferences with whole-document atomic replace.
//!
//! Every `apply` serializes the full map into a temp file in the same
//! directory and renames it over the target, so readers never observe a
//! partially written document. An exclusive OS lock on `<file>.lock` is held
//! for the backend's lifetime; a second opener gets [`StoreError::Locked`].

use std::collections::BTreeSet;
use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use super::{read_int, read_string_set, PrefsBackend, PrefsEdit, PrefsMap, StoreError};

#[derive(Debug)]
pub struct FilePrefs {
    path: PathBuf,
    map: PrefsMap,
    // Lock is released when the handle is dropped.
    _lock: File,
}

impl FilePrefs {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let dir = parent_dir(&path).to_path_buf();
        std::fs::create_dir_all(&dir).map_err(|source| StoreError::Io {
            path: dir.clone(),
            source,
        })?;

        let lock = acquire_lock(&lock_path_for(&path))?;
        let map = read_document(&path)?;
        debug!(path = %path.display(), keys = map.len(), "Preferences file opened");

        Ok(Self {
            path,
            map,
            _lock: lock,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_document(&self, map: &PrefsMap) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        let mut tmp = NamedTempFile::new_in(parent_dir(&self.path)).map_err(io_err)?;
        serde_json::to_writer_pretty(&mut tmp, map).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })?;
        tmp.write_all(b"\n").map_err(io_err)?;
        tmp.as_file().sync_all().map_err(io_err)?;
        tmp.persist(&self.path).map_err(|e| io_err(e.error))?;
        Ok(())
    }
}

impl PrefsBackend for FilePrefs {
    fn get_int(&self, key: &str) -> Option<i64> {
        read_int(&self.map, key)
    }

    fn get_string_set(&self, key: &str) -> Option<BTreeSet<String>> {
        read_string_set(&self.map, key)
    }

    fn apply(&mut self, edit: PrefsEdit) -> Result<(), StoreError> {
        if edit.is_empty() {
            return Ok(());
        }
        let mut next = self.map.clone();
        edit.apply_to(&mut next);
        self.write_document(&next)?;
        self.map = next;
        Ok(())
    }
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    }
}

fn lock_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".lock");
    path.with_file_name(name)
}

fn acquire_lock(lock_path: &Path) -> Result<File, StoreError> {
    use fs4::fs_std::FileExt;

    let file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .read(true)
        .write(true)
        .open(lock_path)
        .map_err(|source| StoreError::Io {
            path: lock_path.to_path_buf(),
            source,
        })?;

    // Ok(false) = held elsewhere
    match file.try_lock_exclusive() {
        Ok(true) => Ok(file),
        Ok(false) => Err(StoreError::Locked {
            path: lock_path.to_path_buf(),
        }),
        Err(e) if e.kind() == ErrorKind::WouldBlock => Err(StoreError::Locked {
            path: lock_path.to_path_buf(),
        }),
        Err(source) => Err(StoreError::Io {
            path: lock_path.to_path_buf(),
            source,
        }),
    }
}

fn read_document(path: &Path) -> Result<PrefsMap, StoreError> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(PrefsMap::new()),
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(PrefsMap::new());
    }
    serde_json::from_slice(&bytes).map_err(|source| StoreError::Corrupt {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = FilePrefs::open(dir.path().join("progress.json")).unwrap();
        assert_eq!(prefs.get_int("round_number"), None);
        assert!(!prefs.path().exists());
    }

    #[test]
    fn applied_edits_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("progress.json");
        {
            let mut prefs = FilePrefs::open(&path).unwrap();
            prefs
                .apply(
                    PrefsEdit::new()
                        .put_int("round_number", 4)
                        .put_string_set("used_deep", ["2".to_string()].into()),
                )
                .unwrap();
        }
        let prefs = FilePrefs::open(&path).unwrap();
        assert_eq!(prefs.get_int("round_number"), Some(4));
        assert_eq!(
            prefs.get_string_set("used_deep"),
            Some(["2".to_string()].into())
        );
    }

    #[test]
    fn second_opener_is_locked_out() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progress.json");
        let _first = FilePrefs::open(&path).unwrap();
        let second = FilePrefs::open(&path);
        assert!(matches!(second, Err(StoreError::Locked { .. })));
    }

    #[test]
    fn lock_released_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progress.json");
        drop(FilePrefs::open(&path).unwrap());
        assert!(FilePrefs::open(&path).is_ok());
    }

    #[test]
    fn garbage_document_is_reported_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progress.json");
        std::fs::write(&path, b"{not json").unwrap();
        assert!(matches!(
            FilePrefs::open(&path),
            Err(StoreError::Corrupt { .. })
        ));
    }

    #[test]
    fn lock_file_sits_next_to_document() {
        assert_eq!(
            lock_path_for(Path::new("/tmp/x/progress.json")),
            PathBuf::from("/tmp/x/progress.json.lock")
        );
    }
}
