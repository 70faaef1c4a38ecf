//! String transformation system
//!
//! This module provides a composable string transformation engine: an ordered
//! pipeline of named rules (trim, case changes, variable expansion) applied to
//! an input string.
//!
//! # Module Organization
//!
//! - [`types`] - Handler and rule types
//! - [`built_in`] - Built-in transformations behind the default tags
//! - [`handlers`] - Tag to handler registry
//! - [`lookup`] - Variable lookup sources
//! - [`expand`] - Regex-based variable expansion
//! - [`rule`] - `tag[:argument]` rule parsing
//! - [`pipeline`] - The [`Transform`] configuration and pipeline
//!
//! # Examples
//!
//! ## Declarative Rules
//!
//! ```
//! use textform_core::transform::{Transform, TransformOption};
//!
//! let transform = Transform::new([TransformOption::string_rules(["trim, upcase"])]).unwrap();
//! assert_eq!(transform.transform("  hi  ").unwrap(), "HI");
//! ```
//!
//! ## Variable Expansion
//!
//! ```
//! use textform_core::transform::{Lookup, Transform, TransformOption};
//!
//! let transform = Transform::new([
//!     TransformOption::lookups([Lookup::map([("NAME", "Ada")])]),
//!     TransformOption::ExpandEnv,
//! ])
//! .unwrap();
//!
//! assert_eq!(transform.transform("Hello ${NAME}!").unwrap(), "Hello Ada!");
//! ```
//!
//! Copyright (c) 2025 Textform Team
//! Licensed under the Apache-2.0 license

// Handler and rule types
pub mod types;

// Built-in transformations
pub mod built_in;

// Tag registry
pub mod handlers;

// Lookup sources
pub mod lookup;

// Variable expansion
pub mod expand;

// Rule string parsing
pub mod rule;

// Main transformation pipeline
pub mod pipeline;


// Re-export main public types and functions for convenience
pub use types::{transform_fn, Builtin, Handler, Rule, TransformFn};
pub use handlers::Handlers;
pub use lookup::{resolve, Lookup, LookupFn};
pub use expand::{Expansion, KEY_GROUP, SHELL_VAR};
pub use rule::{parse_rule, RuleSpec, EXPAND_TAG};
pub use pipeline::{Transform, TransformOption};
