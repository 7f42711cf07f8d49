use std::path::PathBuf;

use thiserror::Error;

/// Raised while building a plugin from its configuration. Always fatal.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown output type `{0}`, expected `virtual` or `file`")]
    UnknownOutputType(String),
    #[error("output of type `{0}` is missing required field `{1}`")]
    MissingOutputField(&'static str, &'static str),
    #[error("invalid glob pattern `{pattern}`: {message}")]
    InvalidGlob { pattern: String, message: String },
    #[error("failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid override `{value}`: {message}")]
    Override { value: String, message: String },
    #[error("invalid configuration: {0}")]
    Invalid(serde_json::Error),
}

/// A failure that aborts the whole compilation pass.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("failed to scan resource root {root:?}: {source}")]
    Scan {
        root: PathBuf,
        source: walkdir::Error,
    },
    #[error("resource root {root:?} is not a directory")]
    NotADirectory { root: PathBuf },
}

/// A failure confined to one resource file. The file is skipped.
#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("cannot determine locale: {0}")]
    Locale(String),
    #[error("failed to read file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse json: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum PluginError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Compile(#[from] CompileError),
}
