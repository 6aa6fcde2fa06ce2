use thiserror::Error;

#[derive(Error, Debug)]
pub enum AugmentError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Input file {path} is not valid UTF-8")]
    Utf8Error {
        path: String,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("Malformed arrival value at line {line}: {content:?}")]
    MalformedNumberError {
        line: usize,
        content: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, AugmentError>;
