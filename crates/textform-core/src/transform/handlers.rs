//! Handler registry
//!
//! Maps case-insensitive tags to the transformation they name. Rule strings are
//! resolved against this table before the special `expand` tag is considered.
//!
//! Copyright (c) 2025 Textform Team
//! Licensed under the Apache-2.0 license

use super::types::{Builtin, Handler};
use std::collections::HashMap;

/// Registry of transformation handlers indexed by lowercase tag
#[derive(Debug, Clone)]
pub struct Handlers {
    entries: HashMap<String, Handler>,
}

impl Handlers {
    /// Registry holding only the built-in handlers
    pub fn new() -> Self {
        let mut handlers = Self::empty();
        handlers.reset();
        handlers
    }

    /// Registry without any handler, not even the built-ins
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Discard custom handlers and reinstall the built-ins
    pub fn reset(&mut self) {
        self.entries = Builtin::DEFAULT_TAGS
            .iter()
            .map(|(tag, builtin)| (tag.to_string(), Handler::Builtin(*builtin)))
            .collect();
    }

    /// Register `handler` under `tag`, replacing any previous entry. `None`
    /// removes the tag. An empty tag is ignored.
    pub fn register(&mut self, tag: &str, handler: Option<Handler>) {
        if tag.is_empty() {
            return;
        }
        let tag = tag.to_lowercase();
        match handler {
            Some(handler) => {
                log::debug!("Registering transform handler '{}'", tag);
                self.entries.insert(tag, handler);
            }
            None => {
                log::debug!("Removing transform handler '{}'", tag);
                self.entries.remove(&tag);
            }
        }
    }

    /// Look up the handler for a tag, case-insensitively
    pub fn get(&self, tag: &str) -> Option<&Handler> {
        self.entries.get(&tag.to_lowercase())
    }

    /// Check whether a tag is registered
    pub fn contains(&self, tag: &str) -> bool {
        self.get(tag).is_some()
    }

    /// Registered tags, sorted
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    /// Number of registered tags
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Handlers {
    fn default() -> Self {
        Self::new()
    }
}
