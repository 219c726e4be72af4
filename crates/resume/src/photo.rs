//! Photo ingestion: raw image bytes to an embeddable data URI.
//!
//! No resizing, re-encoding or format validation happens here; the bytes are
//! embedded as-is and the MIME type is taken from the file extension.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::path::Path;

use crate::error::{Error, Result};

/// MIME type used when the extension is not a known image type
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// Guess an image MIME type from a file extension (case-insensitive)
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("bmp") => "image/bmp",
        Some("avif") => "image/avif",
        _ => FALLBACK_MIME,
    }
}

/// Encode bytes as a `data:` URI
pub fn to_data_uri(bytes: &[u8], mime: &str) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Read an image file and encode it as a data URI
pub fn ingest_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Read {} bytes of photo from {}", bytes.len(), path.display());
    Ok(to_data_uri(&bytes, mime_for_path(path)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_mime_from_extension() {
        assert_eq!(mime_for_path(Path::new("me.png")), "image/png");
        assert_eq!(mime_for_path(Path::new("me.JPG")), "image/jpeg");
        assert_eq!(mime_for_path(Path::new("me.jpeg")), "image/jpeg");
        assert_eq!(mime_for_path(Path::new("me.svg")), "image/svg+xml");
        assert_eq!(mime_for_path(Path::new("me")), FALLBACK_MIME);
        assert_eq!(mime_for_path(Path::new("me.txt")), FALLBACK_MIME);
    }

    #[test]
    fn test_data_uri() {
        assert_eq!(to_data_uri(b"hi", "image/png"), "data:image/png;base64,aGk=");
        assert_eq!(to_data_uri(b"", "image/gif"), "data:image/gif;base64,");
    }

    #[test]
    fn test_ingest_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("avatar.webp");
        std::fs::write(&path, [0x52, 0x49, 0x46, 0x46]).unwrap();

        let uri = ingest_file(&path).unwrap();
        assert_eq!(uri, "data:image/webp;base64,UklGRg==");
    }

    #[test]
    fn test_ingest_missing_file() {
        let err = ingest_file(&PathBuf::from("/nonexistent/avatar.png")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
