//! Error types for the text-normalization engine

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or running a tokenizer, detokenizer,
/// truecaser or normalizer
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed or unreadable language data, model or configuration
    #[error("Failed to load {what}: {reason}")]
    ConfigLoad { what: String, reason: String },

    /// I/O failure on a data file
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A regular expression that must compile did not
    #[error("Invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Truecasing requested before a model was trained or loaded
    #[error("No truecasing model has been trained or loaded")]
    ModelAbsent,

    /// Truecase input that cannot be split into tags and words
    #[error("Malformed XML-like input: {0}")]
    MalformedXml(String),

    /// Invalid language code
    #[error("Invalid language: {0}")]
    InvalidLanguage(String),

    /// Worker pool could not be started
    #[error("Failed to build thread pool: {0}")]
    ThreadPool(String),
}

impl Error {
    pub(crate) fn config_load(what: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::ConfigLoad {
            what: what.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, Error>;
