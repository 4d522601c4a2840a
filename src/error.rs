use std::path::PathBuf;

use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[source] serde_json::Error),
}

/// Transport errors while fetching the results feed.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request to results source failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Errors decoding the results feed into usable numbers.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("failed to decode results body: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("returns-processed field {raw:?} is missing the '/' separator")]
    MissingSeparator { raw: String },

    #[error("returns-processed field {raw:?} has a non-numeric side: {source}")]
    InvalidNumber {
        raw: String,
        #[source]
        source: std::num::ParseFloatError,
    },
}

/// Snapshot persistence errors.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("failed to read snapshot file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write snapshot file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode snapshot: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("failed to encode snapshot: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Telegram delivery errors.
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("failed to send Telegram message: {0}")]
    Request(#[from] reqwest::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Notify(#[from] NotifyError),
}

pub type Result<T> = std::result::Result<T, Error>;
