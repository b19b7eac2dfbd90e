//! Asset error types
//!
//! Shared by the GPS trace and BMP texture loaders.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error type for loading and saving data files
#[derive(Debug)]
pub enum AssetError {
    /// The file could not be opened or read
    Open { path: PathBuf, source: io::Error },
    /// IO error while reading from or writing to an open stream
    Io(io::Error),
    /// The contents are malformed
    Parse(String),
    /// The contents are well-formed but use a feature the loader does not handle
    Unsupported(String),
    /// The file holds no usable data
    Empty,
}

impl AssetError {
    /// Build an [`AssetError::Open`] for `path`
    pub fn open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AssetError::Open { path: path.into(), source }
    }
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::Open { path, source } => {
                write!(f, "Cannot open file {}: {}", path.display(), source)
            }
            AssetError::Io(err) => write!(f, "IO error: {}", err),
            AssetError::Parse(msg) => write!(f, "Parse error: {}", msg),
            AssetError::Unsupported(msg) => write!(f, "Unsupported format: {}", msg),
            AssetError::Empty => write!(f, "No data"),
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssetError::Open { source, .. } => Some(source),
            AssetError::Io(err) => Some(err),
            AssetError::Parse(_) | AssetError::Unsupported(_) | AssetError::Empty => None,
        }
    }
}

impl From<io::Error> for AssetError {
    fn from(err: io::Error) -> Self {
        AssetError::Io(err)
    }
}

impl From<image::ImageError> for AssetError {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::Unsupported(e) => AssetError::Unsupported(e.to_string()),
            other => AssetError::Parse(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_open_error_display() {
        let err = AssetError::open(
            "gps.dat",
            io::Error::new(io::ErrorKind::NotFound, "file missing"),
        );
        let msg = err.to_string();
        assert!(msg.contains("Cannot open file gps.dat"));
        assert!(msg.contains("file missing"));
    }

    #[test]
    fn test_parse_error_display() {
        let err = AssetError::Parse("bad magic".to_string());
        assert_eq!(err.to_string(), "Parse error: bad magic");
    }

    #[test]
    fn test_unsupported_display() {
        let err = AssetError::Unsupported("8 bits per pixel".to_string());
        assert!(err.to_string().contains("8 bits per pixel"));
    }

    #[test]
    fn test_from_io_error() {
        let err: AssetError = io::Error::new(io::ErrorKind::PermissionDenied, "denied").into();
        match err {
            AssetError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::PermissionDenied),
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_from_image_error() {
        let err: AssetError = image::ImageError::IoError(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "short read",
        ))
        .into();
        assert!(matches!(err, AssetError::Parse(_)));
        assert!(err.to_string().contains("short read"));
    }

    #[test]
    fn test_error_source() {
        let open = AssetError::open("x", io::Error::new(io::ErrorKind::NotFound, "missing"));
        assert!(open.source().is_some());
        assert!(AssetError::Io(io::Error::new(io::ErrorKind::Other, "o")).source().is_some());
        assert!(AssetError::Parse("p".into()).source().is_none());
        assert!(AssetError::Empty.source().is_none());
    }
}
