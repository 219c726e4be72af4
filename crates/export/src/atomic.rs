//! Atomic file writes: temp file in the target directory, then rename.
//!
//! Readers either see the previous file or the complete new one, and a
//! failed write leaves nothing behind (the temp file is removed on drop).

use crate::error::{Error, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Write `content` to `path`, creating the parent directory if needed.
pub fn write(path: &Path, content: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    std::fs::create_dir_all(parent).map_err(|source| Error::CreateDir {
        path: parent.to_path_buf(),
        source,
    })?;

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| Error::write(path, e))?;
    temp.write_all(content).map_err(|e| Error::write(path, e))?;
    temp.flush().map_err(|e| Error::write(path, e))?;
    temp.persist(path).map_err(|e| Error::write(path, e.error))?;

    log::debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_new_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/out/resume.txt");

        write(&path, b"hello\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello\n");
    }

    #[test]
    fn test_write_replaces_existing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("resume.txt");
        std::fs::write(&path, "old").unwrap();

        write(&path, b"new").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_failed_write_leaves_no_files() {
        let dir = TempDir::new().unwrap();
        // A directory at the target path makes the final rename fail.
        let path = dir.path().join("resume.html");
        std::fs::create_dir(&path).unwrap();

        let err = write(&path, b"content").unwrap_err();
        assert!(matches!(err, Error::Write { .. }));

        let leftovers: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(leftovers, vec![std::ffi::OsString::from("resume.html")]);
    }
}
