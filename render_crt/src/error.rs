use std::fmt;
use std::path::{PathBuf};

///
/// The file operation that was being performed when an I/O error occurred
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IoOperation {
    Load,
    Save,
}

///
/// Errors that can stop a CRT render
///
#[derive(Debug, thiserror::Error)]
pub enum CrtError {
    /// The options for the render are not valid (eg, an unknown mask type was requested)
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The input image and output width do not produce a usable render geometry
    #[error("geometry error: {0}")]
    Geometry(String),

    /// An image could not be loaded or saved
    #[error("Cannot {operation} file {}: {message}", .path.display())]
    Io {
        operation:  IoOperation,
        path:       PathBuf,
        message:    String,
    },
}

///
/// Result of an operation that can fail with a `CrtError`
///
pub type Result<T> = std::result::Result<T, CrtError>;

impl fmt::Display for IoOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IoOperation::Load => write!(f, "load"),
            IoOperation::Save => write!(f, "save"),
        }
    }
}

impl CrtError {
    ///
    /// Creates an I/O error for a file
    ///
    pub fn io(operation: IoOperation, path: impl Into<PathBuf>, message: impl ToString) -> CrtError {
        CrtError::Io {
            operation:  operation,
            path:       path.into(),
            message:    message.to_string(),
        }
    }
}
