use miette::{Diagnostic, Result};
use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Feed fetch error: {0}")]
    #[diagnostic(code(eventfeed::fetch))]
    Fetch(String),

    #[error("Environment error: {0}")]
    #[diagnostic(code(eventfeed::environment))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(eventfeed::config))]
    Config(String),

    #[error("Component error: {0}")]
    #[diagnostic(code(eventfeed::component))]
    Component(String),

    #[error("Other error: {0}")]
    #[diagnostic(code(eventfeed::other))]
    Other(String),
}

/// Type alias for Result with our Error type
pub type FeedResult<T> = Result<T, Error>;

/// Helper to create environment errors
pub fn env_error(var: &str) -> Error {
    Error::Environment(format!("Missing environment variable: {}", var))
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create feed fetch errors
pub fn fetch_error(message: &str) -> Error {
    Error::Fetch(message.to_string())
}

/// Helper to create component errors
pub fn component_error(message: &str) -> Error {
    Error::Component(message.to_string())
}
