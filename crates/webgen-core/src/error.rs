//! Error types for webgen-core

use std::fmt;
use thiserror::Error;

/// Result type alias using webgen-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Broad failure categories surfaced by the scaffolding pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Prompt collection was cancelled by the user
    UserAbort,
    /// Directory creation, manifest read/write, or asset copy failed
    FileSystem,
    /// Installer or version-control subprocess failed
    ExternalProcess,
    /// Author identity lookup was unavailable (always recovered)
    ConfigQuery,
    /// Tool configuration could not be loaded
    Config,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::UserAbort => "user-abort",
            Self::FileSystem => "file-system",
            Self::ExternalProcess => "external-process",
            Self::ConfigQuery => "config-query",
            Self::Config => "config",
        };
        f.write_str(name)
    }
}

/// Core error types for webgen
#[derive(Error, Debug)]
pub enum Error {
    /// Prompt collection aborted
    #[error("Prompt cancelled by user")]
    UserAbort,

    /// A required answer was empty after applying defaults
    #[error("Missing required answer: {key}")]
    MissingAnswer { key: String },

    /// Filesystem operation failed on a specific path
    #[error("Filesystem error at {path}: {source}")]
    FileSystem {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Existing manifest is not valid JSON
    #[error("Failed to parse manifest at {path}: {source}")]
    ManifestParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Subprocess exited unsuccessfully
    #[error("{program} failed: {message}")]
    ExternalProcess { program: String, message: String },

    /// Required executable is not on PATH
    #[error("Required command not found: {command}")]
    CommandNotFound { command: String },

    /// Author identity lookup unavailable
    #[error("Author lookup unavailable: {message}")]
    ConfigQuery { message: String },

    /// Invalid configuration format
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a missing answer error
    pub fn missing_answer(key: impl Into<String>) -> Self {
        Self::MissingAnswer { key: key.into() }
    }

    /// Create a filesystem error for a path
    pub fn file_system(path: impl fmt::Display, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.to_string(),
            source,
        }
    }

    /// Create a manifest parse error
    pub fn manifest_parse(path: impl fmt::Display, source: serde_json::Error) -> Self {
        Self::ManifestParse {
            path: path.to_string(),
            source,
        }
    }

    /// Create an external process error
    pub fn external_process(program: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ExternalProcess {
            program: program.into(),
            message: message.into(),
        }
    }

    /// Create a command not found error
    pub fn command_not_found(command: impl Into<String>) -> Self {
        Self::CommandNotFound {
            command: command.into(),
        }
    }

    /// Create a config query error
    pub fn config_query(message: impl Into<String>) -> Self {
        Self::ConfigQuery {
            message: message.into(),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Classify this error into its failure category
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UserAbort | Self::MissingAnswer { .. } => ErrorKind::UserAbort,
            Self::FileSystem { .. } | Self::ManifestParse { .. } | Self::Io(_) => {
                ErrorKind::FileSystem
            }
            Self::ExternalProcess { .. } | Self::CommandNotFound { .. } => {
                ErrorKind::ExternalProcess
            }
            Self::ConfigQuery { .. } => ErrorKind::ConfigQuery,
            Self::InvalidConfig { .. } | Self::JsonParse(_) => {
                ErrorKind::Config
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        assert_eq!(Error::UserAbort.kind(), ErrorKind::UserAbort);
        assert_eq!(
            Error::file_system("/tmp/x", std::io::Error::other("boom")).kind(),
            ErrorKind::FileSystem
        );
        assert_eq!(
            Error::external_process("npm", "exit status 1").kind(),
            ErrorKind::ExternalProcess
        );
        assert_eq!(
            Error::command_not_found("git").kind(),
            ErrorKind::ExternalProcess
        );
        assert_eq!(Error::config_query("npm missing").kind(), ErrorKind::ConfigQuery);
        assert_eq!(Error::invalid_config("bad").kind(), ErrorKind::Config);
    }

    #[test]
    fn test_display_includes_path() {
        let err = Error::file_system("/tmp/demo", std::io::Error::other("denied"));
        let msg = err.to_string();
        assert!(msg.contains("/tmp/demo"));
        assert!(msg.contains("denied"));
    }
}
