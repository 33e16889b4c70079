use crate::core::Storage;
use crate::utils::error::{EtlError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Filesystem storage rooted at `base_path`; absolute paths ignore the base.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.base_path.join(path)
    }
}

impl Storage for LocalStorage {
    fn read_text(&self, path: &str) -> Result<String> {
        let full_path = self.resolve(path);

        if !full_path.exists() {
            return Err(EtlError::InputNotFound { path: full_path });
        }

        fs::read_to_string(&full_path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => EtlError::InputNotFound {
                path: full_path.clone(),
            },
            _ => EtlError::InputUnreadable {
                path: full_path.clone(),
                source,
            },
        })
    }

    fn write_text(&self, path: &str, contents: &str) -> Result<()> {
        let full_path = self.resolve(path);

        if let Some(parent) = full_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        fs::write(&full_path, contents)?;
        Ok(())
    }
}

pub fn input_exists(storage_root: &Path, path: &str) -> bool {
    storage_root.join(path).is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());

        let err = storage.read_text("nope.txt").unwrap_err();
        match err {
            EtlError::InputNotFound { path } => assert!(path.ends_with("nope.txt")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_read_invalid_utf8_is_unreadable() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("bin.txt"), [0xff, 0xfe, 0x00, 0x80]).unwrap();
        let storage = LocalStorage::new(dir.path());

        let err = storage.read_text("bin.txt").unwrap_err();
        assert!(matches!(err, EtlError::InputUnreadable { .. }));
    }

    #[test]
    fn test_write_truncates_and_creates_parents() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());

        storage
            .write_text("nested/out.txt", "a much longer first version")
            .unwrap();
        storage.write_text("nested/out.txt", "short").unwrap();

        assert_eq!(storage.read_text("nested/out.txt").unwrap(), "short");
        assert!(input_exists(dir.path(), "nested/out.txt"));
        assert!(!input_exists(dir.path(), "nested"));
    }

    #[test]
    fn test_default_storage_uses_relative_paths() {
        let storage = LocalStorage::default();
        assert_eq!(storage.resolve("input.txt"), PathBuf::from("input.txt"));
    }
}
