//! Definition tokenizer
//!
//! Splits a raw field definition into its name, type token and option tokens

use super::types::OptionKey;
use crate::error::ParseError;
use log::debug;

/// Type assumed when a definition has no type segment
pub const DEFAULT_TYPE: &str = "string";

/// Raw segments of one definition, borrowed from the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionTokens<'a> {
    pub name: &'a str,
    pub type_token: &'a str,
    pub option_tokens: Vec<&'a str>,

    /// Set when the type was not written and `DEFAULT_TYPE` was substituted
    pub implicit_type: bool,
}

pub fn tokenize(definition: &str) -> Result<DefinitionTokens<'_>, ParseError> {
    let segments = split_trimmed(definition, ':', 3);

    let name = match segments.first() {
        Some(name) if !name.is_empty() => *name,
        _ => return Err(ParseError::MissingName),
    };

    let (type_token, options_segment, implicit_type) = match segments.get(1) {
        None => (DEFAULT_TYPE, None, true),
        Some(segment) if names_option(segment) => {
            // `name:hkey` - the second segment is an option list, not a type
            if let Some(dropped) = segments.get(2) {
                debug!("Ignoring trailing segment '{}' of {}", dropped, name);
            }
            debug!("No type given for {}, treating '{}' as options", name, segment);
            (DEFAULT_TYPE, Some(*segment), true)
        }
        Some(segment) => (*segment, segments.get(2).copied(), false),
    };

    let option_tokens = options_segment
        .map(|segment| split_trimmed(segment, ',', usize::MAX))
        .unwrap_or_default();

    Ok(DefinitionTokens {
        name,
        type_token,
        option_tokens,
        implicit_type,
    })
}

/// Whether a segment mentions any option keyword
fn names_option(segment: &str) -> bool {
    OptionKey::ALL
        .iter()
        .any(|key| segment.contains(key.keyword()))
}

/// Split into at most `limit` parts, dropping empty trailing parts
fn split_trimmed(input: &str, separator: char, limit: usize) -> Vec<&str> {
    let mut parts: Vec<&str> = input.splitn(limit, separator).collect();
    // Separators left at the end of a capped last part are trailing empties too
    if parts.len() == limit {
        if let Some(last) = parts.last_mut() {
            *last = last.trim_end_matches(separator);
        }
    }
    while parts.last().is_some_and(|part| part.is_empty()) {
        parts.pop();
    }
    parts
}
