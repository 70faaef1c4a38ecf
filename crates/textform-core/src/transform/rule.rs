//! Rule string parsing
//!
//! Rules are declared as `tag` or `tag:argument`. Several rules may share one
//! string, separated by commas:
//!
//! ```text
//! trim, upcase
//! expand:(?P<key>[A-Z]+)=
//! ```
//!
//! Copyright (c) 2025 Textform Team
//! Licensed under the Apache-2.0 license

use crate::{Error, Result};
use super::expand::Expansion;
use super::handlers::Handlers;
use super::types::Rule;

/// Tag of the parameterized expansion rule
pub const EXPAND_TAG: &str = "expand";

/// A rule string split into its tag and optional argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSpec<'a> {
    /// Trimmed, lowercased tag
    pub tag: String,
    /// Everything after the first colon, untouched
    pub argument: Option<&'a str>,
}

impl<'a> RuleSpec<'a> {
    /// Split a rule on its first colon
    pub fn parse(rule: &'a str) -> Self {
        let (tag, argument) = match rule.split_once(':') {
            Some((tag, argument)) => (tag, Some(argument)),
            None => (rule, None),
        };
        Self {
            tag: tag.trim().to_lowercase(),
            argument,
        }
    }
}

/// Parse one rule against a handler registry.
///
/// A registered tag always wins and its argument is ignored. Otherwise the
/// `expand` tag compiles its argument into an [`Expansion`].
pub fn parse_rule(handlers: &Handlers, rule: &str) -> Result<Rule> {
    let spec = RuleSpec::parse(rule);

    if let Some(handler) = handlers.get(&spec.tag) {
        return Ok(Rule::Handler {
            tag: spec.tag,
            handler: handler.clone(),
        });
    }

    if spec.tag == EXPAND_TAG {
        let pattern = spec.argument.ok_or(Error::MissingRegex)?;
        let expansion = Expansion::parse(pattern)?;
        log::debug!("Parsed expansion rule with pattern '{}'", pattern);
        return Ok(Rule::Expand(expansion));
    }

    Err(Error::UnknownTransform { tag: spec.tag })
}

/// Split rule strings into their non-empty, trimmed comma-separated parts
pub fn split_rules<'a, I>(rules: I) -> impl Iterator<Item = &'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    rules
        .into_iter()
        .flat_map(|rule| rule.split(','))
        .map(str::trim)
        .filter(|rule| !rule.is_empty())
}
