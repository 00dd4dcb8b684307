use derive_more::Display;
use serde::{Deserialize, Serialize};
use specta::Type;

/// A document that may not be persisted yet. `row_index` is the row's 1-based `idx`.
#[derive(Type, Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Display)]
#[display("Row #{row_index}: {message}")]
pub struct ValidationError {
    pub row_index: u32,
    pub message: String,
}

impl ValidationError {
    pub fn new(row_index: u32, message: impl Into<String>) -> Self {
        Self {
            row_index,
            message: message.into(),
        }
    }
}

impl std::error::Error for ValidationError {}

#[derive(Type, Serialize, Deserialize, Debug, Clone, PartialEq, Display)]
pub enum SError {
    #[display("{_0}")]
    Validation(ValidationError),
    #[display("parse error: {_0}")]
    ParseError(String),
    #[display("io error: {_0}")]
    IOError(String),
    #[display("config error: {_0}")]
    Config(String),
    #[display("remote call failed: {_0}")]
    Remote(String),
    #[display("row #{_0} does not exist")]
    RowOutOfRange(u32),
    #[display("app {_0} is not configured")]
    UnknownApp(String),
    #[display("failed to export bindings: {_0}")]
    Bindings(String),
    #[display("async runtime error: {_0}")]
    AsyncRuntimeError(String),
}

impl std::error::Error for SError {}

impl From<ValidationError> for SError {
    fn from(e: ValidationError) -> Self {
        SError::Validation(e)
    }
}

impl From<std::io::Error> for SError {
    fn from(e: std::io::Error) -> Self {
        SError::IOError(e.to_string())
    }
}

impl From<serde_json::Error> for SError {
    fn from(e: serde_json::Error) -> Self {
        SError::ParseError(e.to_string())
    }
}

impl From<confy::ConfyError> for SError {
    fn from(e: confy::ConfyError) -> Self {
        SError::Config(e.to_string())
    }
}
