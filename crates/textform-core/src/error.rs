//! Error types for the Textform core library
//!
//! This module defines the error handling system for Textform, using thiserror
//! for the error definitions and anyhow for opaque causes raised by custom
//! handlers.

use std::fmt;
use thiserror::Error;

/// Main error type for Textform operations
#[derive(Error, Debug)]
pub enum Error {
    /// A rule names a tag that is neither registered nor `expand`
    #[error("unknown transform: {tag}")]
    UnknownTransform { tag: String },

    /// An `expand` rule was declared without a pattern argument
    #[error("expand: missing regex")]
    MissingRegex,

    /// The pattern argument of an `expand` rule failed to compile
    #[error("regexp: {pattern}: {source}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The expansion pattern has no `key` capture group
    #[error("regexp is missing named parenthesized subexpression (?P<key>...): {pattern}")]
    MissingKeyGroup { pattern: String },

    /// No lookup source produced a non-empty value for a variable
    #[error("could not resolve variable: {key}")]
    UnresolvedVariable { key: String },

    /// A pipeline stage failed; the cause is the stage's own error
    #[error("rule: {source}")]
    Rule {
        #[source]
        source: Box<Error>,
    },

    /// Failure raised by a caller-registered handler
    #[error("{message}")]
    Custom {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// Declarative configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// JSON parsing errors for declarative configuration
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Broad category of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Raised while building rules or configuration
    Configuration,
    /// Raised while expanding variables
    Resolution,
    /// Raised by a pipeline stage
    Pipeline,
    /// Raised by a custom handler outside of a pipeline
    Handler,
}

impl Error {
    /// Create a custom handler error with a message
    pub fn custom(message: impl Into<String>) -> Self {
        Error::Custom {
            message: message.into(),
            source: None,
        }
    }

    /// Create a custom handler error wrapping an arbitrary cause
    pub fn other(source: impl Into<anyhow::Error>) -> Self {
        let source = source.into();
        Error::Custom {
            message: source.to_string(),
            source: Some(source),
        }
    }

    /// Wrap an error as a pipeline stage failure
    pub fn rule(source: Error) -> Self {
        Error::Rule {
            source: Box::new(source),
        }
    }

    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnknownTransform { .. }
            | Error::MissingRegex
            | Error::InvalidRegex { .. }
            | Error::MissingKeyGroup { .. }
            | Error::Config { .. }
            | Error::Json { .. } => ErrorKind::Configuration,
            Error::UnresolvedVariable { .. } => ErrorKind::Resolution,
            Error::Rule { .. } => ErrorKind::Pipeline,
            Error::Custom { .. } => ErrorKind::Handler,
        }
    }

    /// True for errors raised while parsing rules or building configuration
    pub fn is_config_error(&self) -> bool {
        self.kind() == ErrorKind::Configuration
    }

    /// True for errors raised by a pipeline stage
    pub fn is_rule_error(&self) -> bool {
        self.kind() == ErrorKind::Pipeline
    }

    /// The innermost error, unwrapping any pipeline stage wrappers
    pub fn root_cause(&self) -> &Error {
        match self {
            Error::Rule { source } => source.root_cause(),
            other => other,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Configuration => write!(f, "configuration"),
            ErrorKind::Resolution => write!(f, "resolution"),
            ErrorKind::Pipeline => write!(f, "pipeline"),
            ErrorKind::Handler => write!(f, "handler"),
        }
    }
}

// Conversion implementations
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::other(err)
    }
}
