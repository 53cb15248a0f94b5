use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using the library's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the letterboxd-md library.
#[derive(Error, Debug, Clone)]
#[non_exhaustive]
pub enum Error {
    /// IO error with context about the file path.
    #[error("IO error accessing '{path}': {message}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// Kind of the underlying IO error
        kind: ErrorKind,
        /// Error message
        message: String,
    },

    /// The review table could not be parsed.
    #[error("Malformed review table '{path}': {message}")]
    Csv {
        /// Path of the table file
        path: PathBuf,
        /// Error message
        message: String,
    },

    /// A row does not carry an expected column.
    #[error("Row on line {line} has no '{column}' column")]
    MissingColumn {
        /// Name of the missing column
        column: String,
        /// Source line of the row (1-based)
        line: u64,
    },

    /// A date cell does not match `YYYY-MM-DD`.
    #[error("Invalid date '{value}' on line {line}: {message}")]
    DateParse {
        /// Raw cell value
        value: String,
        /// Source line of the row (1-based)
        line: u64,
        /// Error message
        message: String,
    },

    /// The output directory could not be created.
    #[error("Cannot create output directory '{path}': {message}")]
    CreateDir {
        /// Directory that could not be created
        path: PathBuf,
        /// Error message
        message: String,
    },

    /// Configuration validation error.
    #[error("Invalid configuration: {message}")]
    Config {
        /// Detailed error message
        message: String,
    },
}

impl Error {
    /// Creates an IO error with path context.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            kind: source.kind(),
            message: source.to_string(),
        }
    }

    /// Creates a CSV error for the given table file.
    ///
    /// IO failures surfaced by the CSV reader are reported as [`Error::Io`].
    #[must_use]
    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        let path = path.into();
        let message = source.to_string();

        match source.into_kind() {
            csv::ErrorKind::Io(io) => Self::io(path, io),
            _ => Self::Csv { path, message },
        }
    }

    /// Creates a missing column error.
    #[must_use]
    pub fn missing_column(column: impl Into<String>, line: u64) -> Self {
        Self::MissingColumn {
            column: column.into(),
            line,
        }
    }

    /// Creates a date parse error.
    #[must_use]
    pub fn date_parse(value: impl Into<String>, line: u64, source: chrono::ParseError) -> Self {
        Self::DateParse {
            value: value.into(),
            line,
            message: source.to_string(),
        }
    }

    /// Creates a directory creation error.
    #[must_use]
    pub fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CreateDir {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Returns true if this is an IO error.
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Returns true if this is an IO error caused by a missing file.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { kind, .. } if *kind == ErrorKind::NotFound)
    }

    /// Returns true if a row lacked an expected column.
    #[must_use]
    pub const fn is_missing_column(&self) -> bool {
        matches!(self, Self::MissingColumn { .. })
    }

    /// Returns true if a date cell could not be parsed.
    #[must_use]
    pub const fn is_date_parse(&self) -> bool {
        matches!(self, Self::DateParse { .. })
    }

    /// Returns true if this is a configuration error.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config { .. })
    }
}
