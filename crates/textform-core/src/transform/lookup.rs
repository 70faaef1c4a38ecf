//! Lookup sources for variable expansion
//!
//! A lookup resolves a variable name to an optional value. Expansions query an
//! ordered list of lookups and take the first value found.
//!
//! Copyright (c) 2025 Textform Team
//! Licensed under the Apache-2.0 license

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A function resolving a variable name to an optional value
pub type LookupFn = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Placeholder replaced by the looked-up name in [`Lookup::Static`] values
pub const NAME_PLACEHOLDER: &str = "%s";

/// One source of variable values
#[derive(Clone)]
pub enum Lookup {
    /// Static map. A key mapped to an empty string still counts as found.
    Map(Arc<HashMap<String, String>>),
    /// Process environment. Unset and empty variables are not found.
    Env,
    /// Constant value, always found. Every `%s` is replaced by the name.
    Static(String),
    /// Caller-provided resolver
    Custom(LookupFn),
}

impl Lookup {
    /// Lookup backed by a static map
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Lookup::Map(Arc::new(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        ))
    }

    /// Lookup backed by the process environment
    pub fn env() -> Self {
        Lookup::Env
    }

    /// Lookup returning a constant, optionally templated on the name with `%s`
    pub fn constant(value: impl Into<String>) -> Self {
        Lookup::Static(value.into())
    }

    /// Lookup backed by a closure
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Lookup::Custom(Arc::new(f))
    }

    /// Resolve a single name against this source
    pub fn get(&self, name: &str) -> Option<String> {
        match self {
            Lookup::Map(map) => map.get(name).cloned(),
            Lookup::Env => std::env::var(name).ok().filter(|v| !v.is_empty()),
            Lookup::Static(value) => {
                if value.contains(NAME_PLACEHOLDER) {
                    Some(value.replace(NAME_PLACEHOLDER, name))
                } else {
                    Some(value.clone())
                }
            }
            Lookup::Custom(f) => f(name),
        }
    }
}

impl fmt::Debug for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookup::Map(map) => f.debug_tuple("Map").field(&map.len()).finish(),
            Lookup::Env => f.write_str("Env"),
            Lookup::Static(value) => f.debug_tuple("Static").field(value).finish(),
            Lookup::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl From<HashMap<String, String>> for Lookup {
    fn from(map: HashMap<String, String>) -> Self {
        Lookup::Map(Arc::new(map))
    }
}

/// Resolve a name against an ordered list of lookups. The first source that
/// finds the name wins, even if its value is empty.
pub fn resolve(lookups: &[Lookup], name: &str) -> Option<String> {
    lookups.iter().find_map(|lookup| lookup.get(name))
}
