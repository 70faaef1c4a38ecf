//! Core types for the string transformation system
//!
//! This module defines the handler and rule types that the registry, the rule
//! parser and the pipeline pass between each other.
//!
//! Copyright (c) 2025 Textform Team
//! Licensed under the Apache-2.0 license

use crate::Result;
use super::built_in;
use super::expand::Expansion;
use super::lookup::Lookup;
use std::fmt;
use std::sync::Arc;

/// A function that transforms a string
pub type TransformFn = Arc<dyn Fn(&str) -> Result<String> + Send + Sync>;

/// Wrap a closure as a [`TransformFn`]
pub fn transform_fn<F>(f: F) -> TransformFn
where
    F: Fn(&str) -> Result<String> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Built-in transformations installed by [`Handlers::reset`](super::Handlers::reset)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    /// Return the input unchanged
    Nop,
    /// Strip leading and trailing whitespace
    Trim,
    /// Lowercase the whole string
    Downcase,
    /// Uppercase the whole string
    Upcase,
    /// Uppercase the first character, lowercase the rest
    Capitalize,
}

impl Builtin {
    /// Tags every built-in is installed under, in registration order
    pub const DEFAULT_TAGS: [(&'static str, Builtin); 6] = [
        ("", Builtin::Nop),
        ("nop", Builtin::Nop),
        ("trim", Builtin::Trim),
        ("downcase", Builtin::Downcase),
        ("upcase", Builtin::Upcase),
        ("capitalize", Builtin::Capitalize),
    ];

    /// Apply the built-in to a string. Built-ins never fail.
    pub fn apply(self, s: &str) -> String {
        match self {
            Builtin::Nop => built_in::nop(s),
            Builtin::Trim => built_in::trim(s),
            Builtin::Downcase => built_in::downcase(s),
            Builtin::Upcase => built_in::upcase(s),
            Builtin::Capitalize => built_in::capitalize(s),
        }
    }

    /// Canonical tag of this built-in
    pub fn name(self) -> &'static str {
        match self {
            Builtin::Nop => "nop",
            Builtin::Trim => "trim",
            Builtin::Downcase => "downcase",
            Builtin::Upcase => "upcase",
            Builtin::Capitalize => "capitalize",
        }
    }
}

/// A registry entry: the behavior a tag resolves to
#[derive(Clone)]
pub enum Handler {
    /// One of the built-in transformations
    Builtin(Builtin),
    /// A caller-provided transformation
    Custom(TransformFn),
}

impl Handler {
    /// Create a custom handler from a closure
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&str) -> Result<String> + Send + Sync + 'static,
    {
        Handler::Custom(Arc::new(f))
    }

    /// Apply the handler to a string
    pub fn apply(&self, s: &str) -> Result<String> {
        match self {
            Handler::Builtin(builtin) => Ok(builtin.apply(s)),
            Handler::Custom(f) => f(s),
        }
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Handler::Builtin(builtin) => f.debug_tuple("Builtin").field(builtin).finish(),
            Handler::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl From<Builtin> for Handler {
    fn from(builtin: Builtin) -> Self {
        Handler::Builtin(builtin)
    }
}

impl From<TransformFn> for Handler {
    fn from(f: TransformFn) -> Self {
        Handler::Custom(f)
    }
}

/// A single executable step of a pipeline
#[derive(Debug, Clone)]
pub enum Rule {
    /// A registry handler, remembered with the tag it was resolved from
    Handler { tag: String, handler: Handler },
    /// Variable expansion carrying its compiled pattern
    Expand(Expansion),
}

impl Rule {
    /// Rule applying a built-in
    pub fn builtin(builtin: Builtin) -> Self {
        Rule::Handler {
            tag: builtin.name().to_string(),
            handler: Handler::Builtin(builtin),
        }
    }

    /// Rule applying a caller-provided closure
    pub fn custom<F>(tag: impl Into<String>, f: F) -> Self
    where
        F: Fn(&str) -> Result<String> + Send + Sync + 'static,
    {
        Rule::Handler {
            tag: tag.into(),
            handler: Handler::custom(f),
        }
    }

    /// Apply the rule. `lookups` are the pipeline defaults, consulted by
    /// expansions that were built without their own lookup sources.
    pub fn apply(&self, s: &str, lookups: &[Lookup]) -> Result<String> {
        match self {
            Rule::Handler { handler, .. } => handler.apply(s),
            Rule::Expand(expansion) => expansion.apply(s, lookups),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Handler { tag, .. } => write!(f, "{}", tag),
            Rule::Expand(expansion) => write!(f, "expand:{}", expansion.pattern()),
        }
    }
}

impl From<Expansion> for Rule {
    fn from(expansion: Expansion) -> Self {
        Rule::Expand(expansion)
    }
}

impl From<Builtin> for Rule {
    fn from(builtin: Builtin) -> Self {
        Rule::builtin(builtin)
    }
}
