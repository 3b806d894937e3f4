//! Error types and handling for the boost utility library

use std::{error::Error as StdError, io, result::Result as StdResult};

use thiserror::Error;

/// Custom result type for boost operations
pub type Result<T> = StdResult<T, Error>;

/// Core error type for boost operations
#[derive(Error, Debug)]
#[non_exhaustive]
#[allow(clippy::enum_variant_names)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Missing argument: {0}")]
    MissingArgument(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Codec error: {0}")]
    CodecError(#[from] CodecError),

    #[error("Date error: {0}")]
    DateError(#[from] DateError),

    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Internal error: {0}")]
    InternalError(#[source] Box<dyn StdError + Send + Sync>),
}

impl Error {
    /// Helper for creating an `InternalError` with a boxed source
    pub fn internal<E: StdError + Send + Sync + 'static>(e: E) -> Self {
        Error::InternalError(Box::new(e))
    }

    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    pub(crate) fn missing(msg: impl Into<String>) -> Self {
        Error::MissingArgument(msg.into())
    }
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Error::InvalidArgument(format!("invalid pattern: {}", err))
    }
}

impl From<strsim::StrSimError> for Error {
    fn from(err: strsim::StrSimError) -> Self {
        Error::InvalidArgument(err.to_string())
    }
}

// -------------------- Sub-Error Categories --------------------

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CodecError {
    #[error("Invalid hex input: {0}")]
    InvalidHex(String),

    #[error("Invalid base64 input: {0}")]
    InvalidBase64(String),
}

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DateError {
    #[error("Invalid date field: {0}")]
    InvalidField(String),

    #[error("Date parse failed: {0}")]
    Parse(String),

    #[error("Local time is ambiguous or does not exist: {0}")]
    Ambiguous(String),
}

impl From<hex::FromHexError> for CodecError {
    fn from(err: hex::FromHexError) -> Self {
        CodecError::InvalidHex(err.to_string())
    }
}

impl From<base64::DecodeError> for CodecError {
    fn from(err: base64::DecodeError) -> Self {
        CodecError::InvalidBase64(err.to_string())
    }
}

impl From<chrono::ParseError> for DateError {
    fn from(err: chrono::ParseError) -> Self {
        DateError::Parse(err.to_string())
    }
}
