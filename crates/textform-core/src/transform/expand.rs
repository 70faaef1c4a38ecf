//! Pattern-based variable expansion
//!
//! An [`Expansion`] replaces every match of a regular expression with the value
//! of the variable named by the match's `key` capture group.
//!
//! Copyright (c) 2025 Textform Team
//! Licensed under the Apache-2.0 license

use crate::{Error, Result};
use super::lookup::{resolve, Lookup};
use regex::Regex;

/// Name of the capture group identifying the variable in an expansion pattern
pub const KEY_GROUP: &str = "key";

/// Matches `${KEY}` references, case-insensitively, with optional inner spaces
pub const SHELL_VAR: &str = r"(?i)\$\{\s*(?P<key>[A-Z0-9_]+)\s*\}";

/// A compiled expansion: pattern, index of its `key` group, and optional
/// lookup sources of its own
#[derive(Debug, Clone)]
pub struct Expansion {
    pattern: Regex,
    key_index: usize,
    lookups: Vec<Lookup>,
}

impl Expansion {
    /// Build an expansion from a compiled pattern. Fails if the pattern has no
    /// `key` group. When `lookups` is empty the expansion resolves variables
    /// through the lookups passed to [`Expansion::apply`].
    pub fn new(pattern: Regex, lookups: Vec<Lookup>) -> Result<Self> {
        let key_index = pattern
            .capture_names()
            .position(|name| name == Some(KEY_GROUP))
            .ok_or_else(|| Error::MissingKeyGroup {
                pattern: pattern.as_str().to_string(),
            })?;

        Ok(Self {
            pattern,
            key_index,
            lookups,
        })
    }

    /// Compile a pattern source and build an expansion from it
    pub fn parse(source: &str) -> Result<Self> {
        let pattern = Regex::new(source).map_err(|e| Error::InvalidRegex {
            pattern: source.to_string(),
            source: e,
        })?;
        Self::new(pattern, Vec::new())
    }

    /// Replace the lookup sources of this expansion
    pub fn with_lookups(mut self, lookups: Vec<Lookup>) -> Self {
        self.lookups = lookups;
        self
    }

    /// The compiled pattern
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// The expansion's own lookup sources
    pub fn lookups(&self) -> &[Lookup] {
        &self.lookups
    }

    /// Expand every match in `s`. Input without matches is returned unchanged.
    pub fn apply(&self, s: &str, defaults: &[Lookup]) -> Result<String> {
        let lookups = if self.lookups.is_empty() {
            defaults
        } else {
            self.lookups.as_slice()
        };

        let mut out = String::with_capacity(s.len());
        let mut pos = 0;
        for caps in self.pattern.captures_iter(s) {
            // group 0 always participates in a match
            let Some(whole) = caps.get(0) else { continue };
            let key = caps
                .get(self.key_index)
                .map(|m| m.as_str())
                .unwrap_or_default();

            let value = match resolve(lookups, key) {
                Some(value) if !value.is_empty() => value,
                _ => {
                    return Err(Error::UnresolvedVariable {
                        key: key.to_string(),
                    })
                }
            };

            out.push_str(&s[pos..whole.start()]);
            out.push_str(&value);
            pos = whole.end();
        }

        out.push_str(&s[pos..]);
        Ok(out)
    }
}
