use std::{fmt, io, path::Path};

/// Errors that can occur when reading or writing firmware images.
#[derive(Debug, Clone, PartialEq)]
pub enum FirmwareError {
    /// An input file was not found at the specified path.
    NotFound(String),
    /// A path could not be opened for reading or writing.
    PermissionDenied(String),
    /// Any other fault while reading, writing or seeking.
    Io(String),
}

impl FirmwareError {
    /// Classifies an I/O error raised while working on `path`.
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        let msg = format!("{}: {err}", path.display());
        match err.kind() {
            io::ErrorKind::NotFound => FirmwareError::NotFound(msg),
            io::ErrorKind::PermissionDenied => FirmwareError::PermissionDenied(msg),
            _ => FirmwareError::Io(msg),
        }
    }
}

impl fmt::Display for FirmwareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FirmwareError::NotFound(msg) => {
                write!(f, "File not found: {msg}")
            }
            FirmwareError::PermissionDenied(msg) => {
                write!(f, "Permission denied: {msg}")
            }
            FirmwareError::Io(msg) => {
                write!(f, "I/O error: {msg}")
            }
        }
    }
}

impl std::error::Error for FirmwareError {}
