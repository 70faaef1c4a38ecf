//! Textform Core - Composable string transformation engine
//!
//! This crate applies ordered pipelines of named string transformations (trim,
//! case changes, pattern-based variable expansion) to input strings.
//!
//! # Main Components
//!
//! - **Error Handling**: Error types using `thiserror` and `anyhow`
//! - **Transform Pipeline**: Handler registry, rule parsing, lookups and expansion
//! - **Configuration**: Serializable configuration that builds a pipeline
//!
//! # Example
//!
//! ```
//! use textform_core::{Result, Transform, TransformOption};
//!
//! fn example() -> Result<()> {
//!     let mut transform = Transform::new([TransformOption::ExpandEnv])?;
//!     transform.add_string_rules(["trim"])?;
//!     assert_eq!(transform.transform("  plain  ")?, "plain");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod config;
pub mod error;
pub mod transform;

// Re-export main types for convenience
pub use config::TransformConfig;
pub use error::{Error, ErrorKind, Result};
pub use transform::{
    Builtin, Expansion, Handler, Handlers, Lookup, Rule, Transform, TransformFn,
    TransformOption, SHELL_VAR,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
