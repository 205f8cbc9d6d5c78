//! Error types for barrelgen
//!
//! Every error is terminal for the run: configuration problems are caught
//! before traversal starts, and any I/O failure during the walk aborts it.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error severity, used to pick the process exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Bad or missing configuration, detected before any traversal
    Configuration,
    /// Filesystem failure during traversal or output writing
    Io,
}

impl Severity {
    /// Exit code reported to the shell for this severity
    pub fn exit_code(self) -> i32 {
        match self {
            Severity::Configuration => 2,
            Severity::Io => 1,
        }
    }
}

/// Main error type for barrelgen operations
#[derive(Debug, Error)]
pub enum BarrelError {
    /// Invalid configuration value
    #[error("configuration error: {message}")]
    Config { message: String },

    /// A user-supplied include/exclude pattern failed to compile
    #[error("invalid pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The input path does not exist or is not a directory
    #[error("invalid input directory: {path}")]
    InvalidPath { path: PathBuf },

    /// Configuration file could not be read
    #[error("error reading configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed
    #[error("error parsing configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A directory listing failed during the walk
    #[error("error reading directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Metadata for a directory entry could not be read
    #[error("error reading metadata for {path}: {source}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A source file could not be read as UTF-8 text
    #[error("error reading file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An index file could not be written
    #[error("error writing index file {path}: {source}")]
    WriteIndex {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BarrelError {
    /// Get the severity of this error
    pub fn severity(&self) -> Severity {
        match self {
            BarrelError::Config { .. }
            | BarrelError::Pattern { .. }
            | BarrelError::InvalidPath { .. }
            | BarrelError::ConfigRead { .. }
            | BarrelError::ConfigParse { .. } => Severity::Configuration,

            BarrelError::ReadDir { .. }
            | BarrelError::Metadata { .. }
            | BarrelError::ReadFile { .. }
            | BarrelError::WriteIndex { .. } => Severity::Io,
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        BarrelError::Config {
            message: message.into(),
        }
    }

    /// Create a pattern error for a pattern that failed to compile
    pub fn pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        BarrelError::Pattern {
            pattern: pattern.into(),
            source,
        }
    }

    /// Create an invalid input path error
    pub fn invalid_path(path: impl Into<PathBuf>) -> Self {
        BarrelError::InvalidPath { path: path.into() }
    }

    /// Create a directory listing error
    pub fn read_dir(path: &Path, source: std::io::Error) -> Self {
        BarrelError::ReadDir {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create a metadata error
    pub fn metadata(path: &Path, source: std::io::Error) -> Self {
        BarrelError::Metadata {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create a file read error
    pub fn read_file(path: &Path, source: std::io::Error) -> Self {
        BarrelError::ReadFile {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create an index write error
    pub fn write_index(path: &Path, source: std::io::Error) -> Self {
        BarrelError::WriteIndex {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create a configuration file read error
    pub fn config_read(path: &Path, source: std::io::Error) -> Self {
        BarrelError::ConfigRead {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create a configuration file parse error
    pub fn config_parse(path: &Path, source: toml::de::Error) -> Self {
        BarrelError::ConfigParse {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result type alias for barrelgen operations
pub type Result<T> = std::result::Result<T, BarrelError>;
