//! Image sources for the publishing pipeline.

use std::fs;
use std::io;
use std::path::PathBuf;

/// Source of raw image bytes referenced by a note.
///
/// Paths are passed exactly as written in the note; the store decides how
/// to resolve them.
pub trait ImageStore {
    /// Read the image at `path` as written in the note.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the image cannot be read.
    fn read_image(&self, path: &str) -> io::Result<Vec<u8>>;
}

/// Filesystem store resolving image paths relative to a root directory,
/// typically the note's own directory.
pub struct FsImageStore {
    root: PathBuf,
}

impl FsImageStore {
    /// Create a store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ImageStore for FsImageStore {
    fn read_image(&self, path: &str) -> io::Result<Vec<u8>> {
        fs::read(self.root.join(path))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_fs_store_reads_relative_path() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("assets")).unwrap();
        fs::write(dir.path().join("assets/pic.png"), b"png-bytes").unwrap();

        let store = FsImageStore::new(dir.path());
        let data = store.read_image("assets/pic.png").unwrap();
        assert_eq!(data, b"png-bytes");
    }

    #[test]
    fn test_fs_store_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsImageStore::new(dir.path());
        assert!(store.read_image("missing.png").is_err());
    }
}
