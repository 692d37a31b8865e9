//! Per-invocation temporary PNG file.

use std::path::{Path, PathBuf};

use uuid::Uuid;

/// Length of the random file stem.
pub const STEM_LEN: usize = 12;

/// Temporary PNG path, removed from disk when dropped.
///
/// The guard owns the path from the moment it is reserved, so a partially
/// written file is cleaned up as well. Removal errors are ignored.
#[derive(Debug)]
pub struct TempImageFile {
    path: PathBuf,
}

impl TempImageFile {
    /// Reserves a fresh `<stem>.png` path inside `dir`. Nothing is created yet.
    #[must_use]
    pub fn reserve(dir: &Path) -> Self {
        Self {
            path: dir.join(format!("{}.png", random_stem())),
        }
    }

    /// Reserves a path in the system temp directory.
    #[must_use]
    pub fn reserve_in_temp_dir() -> Self {
        Self::reserve(&std::env::temp_dir())
    }

    /// Returns the reserved path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempImageFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

/// Random lowercase alphanumeric stem.
fn random_stem() -> String {
    let mut buf = Uuid::encode_buffer();
    let encoded = Uuid::new_v4().simple().encode_lower(&mut buf);
    encoded[..STEM_LEN].to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stem_format() {
        let stem = random_stem();
        assert_eq!(stem.len(), STEM_LEN);
        assert!(
            stem.chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
        );
    }

    #[test]
    fn test_reserved_names_are_unique() {
        let dir = tempfile::tempdir().unwrap();
        let a = TempImageFile::reserve(dir.path());
        let b = TempImageFile::reserve(dir.path());
        assert_ne!(a.path(), b.path());
        assert_eq!(a.path().extension().and_then(|e| e.to_str()), Some("png"));
        assert_eq!(a.path().parent(), Some(dir.path()));
    }

    #[test]
    fn test_drop_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let temp = TempImageFile::reserve(dir.path());
        let path = temp.path().to_path_buf();
        std::fs::write(&path, b"png").unwrap();

        drop(temp);

        assert!(!path.exists());
    }

    #[test]
    fn test_drop_without_file_is_silent() {
        let dir = tempfile::tempdir().unwrap();
        let temp = TempImageFile::reserve(dir.path());
        drop(temp);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
