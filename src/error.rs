//! Error types for loading grades and weights.

use std::path::PathBuf;
use thiserror::Error;

use crate::grading::category::Category;

#[derive(Debug, Error)]
pub enum GradesError {
    #[error(
        "{} not found at {}. Create this file with keys: {}.",
        file_name(.path),
        .path.display(),
        Category::key_list()
    )]
    NotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse {}: expected a JSON object at the top level", .path.display())]
    NotAnObject { path: PathBuf },

    #[error("Invalid score for {key}: expected a number or null, got {value}")]
    InvalidScore { key: String, value: serde_json::Value },
}

impl GradesError {
    /// True for failures caused by the file's content rather than its absence.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            GradesError::Parse { .. } | GradesError::NotAnObject { .. } | GradesError::InvalidScore { .. }
        )
    }

    /// Maps an I/O failure on `path`, splitting out the missing-file case.
    ///
    /// A missing file is reported by its absolute path.
    pub(crate) fn from_io(path: &std::path::Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            GradesError::NotFound {
                path: std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf()),
            }
        } else {
            GradesError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

fn file_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub type Result<T> = std::result::Result<T, GradesError>;
