//! Error handling for the sort utility

use std::io;
use thiserror::Error;

/// Custom error type for sort operations
#[derive(Error, Debug)]
pub enum SortError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Permission denied: {file}")]
    PermissionDenied { file: String },

    #[error("No such file or directory: {file}")]
    FileNotFound { file: String },

    #[error("Is a directory: {file}")]
    IsDirectory { file: String },

    #[error("{file}: input is not valid UTF-8")]
    InvalidUtf8 { file: String },

    #[error("Invalid column index: {column} (columns start at 1, 0 selects the whole line)")]
    InvalidColumn { column: i64 },

    #[error("Invalid field separator: {sep}")]
    InvalidFieldSeparator { sep: String },

    #[error("Conflicting sort options: {message}")]
    ConflictingOptions { message: String },

    #[error("{file}:{line}: disorder")]
    NotSorted { file: String, line: usize },

    #[error("Thread pool error: {message}")]
    ThreadPoolError { message: String },
}

impl SortError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SortError::NotSorted { .. } => crate::EXIT_FAILURE,
            _ => crate::SORT_FAILURE,
        }
    }

    /// True for errors raised while validating configuration, before any
    /// comparison runs.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            SortError::InvalidColumn { .. }
                | SortError::InvalidFieldSeparator { .. }
                | SortError::ConflictingOptions { .. }
                | SortError::ThreadPoolError { .. }
        )
    }

    /// Create a permission denied error
    pub fn permission_denied(file: &str) -> Self {
        SortError::PermissionDenied {
            file: file.to_string(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(file: &str) -> Self {
        SortError::FileNotFound {
            file: file.to_string(),
        }
    }

    /// Create an is directory error
    pub fn is_directory(file: &str) -> Self {
        SortError::IsDirectory {
            file: file.to_string(),
        }
    }

    pub fn invalid_utf8(file: &str) -> Self {
        SortError::InvalidUtf8 {
            file: file.to_string(),
        }
    }

    pub fn invalid_column(column: i64) -> Self {
        SortError::InvalidColumn { column }
    }

    /// Create an invalid field separator error
    pub fn invalid_field_separator(sep: &str) -> Self {
        SortError::InvalidFieldSeparator {
            sep: sep.to_string(),
        }
    }

    /// Create a conflicting options error
    pub fn conflicting_options(message: &str) -> Self {
        SortError::ConflictingOptions {
            message: message.to_string(),
        }
    }

    /// Create a not sorted error; `line` is 1-based
    pub fn not_sorted(file: &str, line: usize) -> Self {
        SortError::NotSorted {
            file: file.to_string(),
            line,
        }
    }

    /// Create a thread pool error
    pub fn thread_pool_error(message: &str) -> Self {
        SortError::ThreadPoolError {
            message: message.to_string(),
        }
    }
}

/// Result type for sort operations
pub type SortResult<T> = Result<T, SortError>;

/// Attaches the offending file name to I/O errors
pub trait SortContext<T> {
    fn with_file_context(self, filename: &str) -> SortResult<T>;
}

impl<T> SortContext<T> for Result<T, io::Error> {
    fn with_file_context(self, filename: &str) -> SortResult<T> {
        self.map_err(|io_err| match io_err.kind() {
            io::ErrorKind::PermissionDenied => SortError::permission_denied(filename),
            io::ErrorKind::NotFound => SortError::file_not_found(filename),
            _ => SortError::Io(io::Error::new(
                io_err.kind(),
                format!("{}: {}", filename, io_err),
            )),
        })
    }
}
