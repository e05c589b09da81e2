use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HabitzError {
    #[error("Malformed JSON in {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unexpected document shape in {}: {message}", path.display())]
    Schema { path: PathBuf, message: String },

    #[error("Could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Habit not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl HabitzError {
    /// Short stable identifier for the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Decode { .. } => "decode_error",
            Self::Schema { .. } => "schema_error",
            Self::Read { .. } => "read_error",
            Self::Write { .. } => "write_error",
            Self::NotFound(_) => "not_found",
            Self::Validation(_) => "validation_error",
            Self::Config(_) => "config_error",
        }
    }
}

pub type Result<T> = std::result::Result<T, HabitzError>;
