//! Transformation pipeline implementation
//!
//! This module contains [`Transform`], the configuration object that owns the
//! handler registry, the default lookup sources and the default rule sequence,
//! and threads strings through those rules.
//!
//! Copyright (c) 2025 Textform Team
//! Licensed under the Apache-2.0 license

use crate::{Error, Result};
use super::expand::{Expansion, SHELL_VAR};
use super::handlers::Handlers;
use super::lookup::Lookup;
use super::rule::{parse_rule, split_rules, EXPAND_TAG};
use super::types::{Handler, Rule};
use regex::Regex;

/// A configuration step applied, in order, by [`Transform::new`] and
/// [`Transform::reset`]
#[derive(Debug, Clone)]
pub enum TransformOption {
    /// Append default lookup sources
    Lookups(Vec<Lookup>),
    /// Register a handler under a tag, or remove the tag when `None`
    Handler {
        tag: String,
        handler: Option<Handler>,
    },
    /// Append default rules
    Rules(Vec<Rule>),
    /// Parse rule strings and append them as default rules
    StringRules(Vec<String>),
    /// Append `${KEY}` expansion and an environment lookup
    ExpandEnv,
}

impl TransformOption {
    /// Option appending lookup sources
    pub fn lookups(lookups: impl IntoIterator<Item = Lookup>) -> Self {
        TransformOption::Lookups(lookups.into_iter().collect())
    }

    /// Option registering a handler
    pub fn handler(tag: impl Into<String>, handler: Option<Handler>) -> Self {
        TransformOption::Handler {
            tag: tag.into(),
            handler,
        }
    }

    /// Option appending rules
    pub fn rules(rules: impl IntoIterator<Item = Rule>) -> Self {
        TransformOption::Rules(rules.into_iter().collect())
    }

    /// Option appending rules declared as strings
    pub fn string_rules<I, S>(rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TransformOption::StringRules(rules.into_iter().map(Into::into).collect())
    }
}

/// String transformation configuration: handler registry, default lookups and
/// default rules
///
/// Mutating methods take `&mut self`; share a `Transform` across threads
/// behind a lock if it must change while in use.
#[derive(Debug, Clone, Default)]
pub struct Transform {
    /// Handler registry consulted when parsing rule strings
    pub handlers: Handlers,
    /// Lookup sources used by expansions without their own
    pub lookups: Vec<Lookup>,
    /// Rules applied by [`Transform::transform`]
    pub rules: Vec<Rule>,
}

impl Transform {
    /// Create a configuration with the built-in handlers, then apply `options`
    /// in order
    pub fn new<I>(options: I) -> Result<Self>
    where
        I: IntoIterator<Item = TransformOption>,
    {
        let mut transform = Self::default();
        transform.apply_options(options)?;
        Ok(transform)
    }

    /// Reset handlers, lookups and rules to their defaults, then apply
    /// `options` in order
    pub fn reset<I>(&mut self, options: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = TransformOption>,
    {
        self.reset_handlers();
        self.reset_lookups(Vec::new());
        self.reset_rules(Vec::new());
        self.apply_options(options)?;
        Ok(self)
    }

    /// Reinstall the built-in handlers, discarding custom registrations
    pub fn reset_handlers(&mut self) -> &mut Self {
        self.handlers.reset();
        self
    }

    /// Replace the default lookups
    pub fn reset_lookups(&mut self, lookups: Vec<Lookup>) -> &mut Self {
        self.lookups = lookups;
        self
    }

    /// Replace the default rules
    pub fn reset_rules(&mut self, rules: Vec<Rule>) -> &mut Self {
        self.rules = rules;
        self
    }

    /// Apply configuration options in order, stopping at the first failure
    pub fn apply_options<I>(&mut self, options: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = TransformOption>,
    {
        for option in options {
            self.apply_option(option)?;
        }
        Ok(self)
    }

    /// Apply a single configuration option
    pub fn apply_option(&mut self, option: TransformOption) -> Result<&mut Self> {
        match option {
            TransformOption::Lookups(lookups) => {
                self.add_lookups(lookups);
            }
            TransformOption::Handler { tag, handler } => {
                self.register_handler(&tag, handler);
            }
            TransformOption::Rules(rules) => {
                self.add_rules(rules);
            }
            TransformOption::StringRules(rules) => {
                self.add_string_rules(&rules)?;
            }
            TransformOption::ExpandEnv => {
                self.expand_env();
            }
        }
        Ok(self)
    }

    /// Register `handler` under `tag`; `None` removes the tag. An empty tag
    /// is ignored.
    pub fn register_handler(&mut self, tag: &str, handler: Option<Handler>) -> &mut Self {
        self.handlers.register(tag, handler);
        self
    }

    /// Register a closure as the handler for `tag`
    pub fn register_fn<F>(&mut self, tag: &str, f: F) -> &mut Self
    where
        F: Fn(&str) -> Result<String> + Send + Sync + 'static,
    {
        self.register_handler(tag, Some(Handler::custom(f)))
    }

    /// Append default lookup sources
    pub fn add_lookups(&mut self, lookups: impl IntoIterator<Item = Lookup>) -> &mut Self {
        self.lookups.extend(lookups);
        self
    }

    /// Append default rules
    pub fn add_rules(&mut self, rules: impl IntoIterator<Item = Rule>) -> &mut Self {
        self.rules.extend(rules);
        self
    }

    /// Parse a single `tag[:argument]` rule against the handler registry
    pub fn parse_string_rule(&self, rule: &str) -> Result<Rule> {
        parse_rule(&self.handlers, rule)
    }

    /// Parse comma-separated rule strings and append them as default rules.
    ///
    /// Stops at the first invalid rule; rules parsed before it stay appended.
    pub fn add_string_rules<I, S>(&mut self, rules: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for spec in rules {
            for rule in split_rules([spec.as_ref()]) {
                let parsed = self.parse_string_rule(rule)?;
                self.rules.push(parsed);
            }
        }
        Ok(self)
    }

    /// Build an expansion rule from a compiled pattern. Expansions without
    /// their own lookups resolve through [`Transform::lookups`] at run time.
    pub fn expand(&self, pattern: Regex, lookups: Vec<Lookup>) -> Result<Rule> {
        Expansion::new(pattern, lookups).map(Rule::Expand)
    }

    /// Append a `${KEY}` expansion rule and an environment lookup.
    ///
    /// # Panics
    ///
    /// Panics if the built-in [`SHELL_VAR`] pattern fails to compile.
    pub fn expand_env(&mut self) -> &mut Self {
        let rule = self
            .parse_string_rule(&format!("{}:{}", EXPAND_TAG, SHELL_VAR))
            .unwrap_or_else(|e| panic!("built-in shell variable rule is invalid: {}", e));
        self.rules.push(rule);
        self.lookups.push(Lookup::Env);
        self
    }

    /// Apply the default rules to `s`
    pub fn transform(&self, s: &str) -> Result<String> {
        self.run(s, &self.rules)
    }

    /// Apply `rules` to `s`, or the default rules when `rules` is empty
    pub fn transform_with(&self, s: &str, rules: &[Rule]) -> Result<String> {
        if rules.is_empty() {
            self.run(s, &self.rules)
        } else {
            self.run(s, rules)
        }
    }

    /// Number of default rules
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    fn run(&self, s: &str, rules: &[Rule]) -> Result<String> {
        let span = tracing::debug_span!("transform", rules = rules.len());
        let _guard = span.enter();

        let mut current = s.to_string();
        for (index, rule) in rules.iter().enumerate() {
            log::trace!("Applying rule #{} '{}'", index, rule);
            current = rule.apply(&current, &self.lookups).map_err(|e| {
                log::debug!("Rule #{} '{}' failed: {}", index, rule, e);
                Error::rule(e)
            })?;
        }
        Ok(current)
    }
}
