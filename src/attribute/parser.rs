//! Definition parser - resolves tokens into an attribute descriptor

use super::lexer;
use super::types::*;
use crate::error::ParseError;
use log::{debug, trace};
use std::str::FromStr;

/// Parse one field definition such as `age:int:hkey,default_value{0}`
pub fn parse(definition: &str) -> Result<AttributeDescriptor, ParseError> {
    let tokens = lexer::tokenize(definition)?;

    let attr_type = resolve_type(tokens.name, tokens.type_token)?;
    let options = resolve_options(tokens.name, &tokens.option_tokens)?;
    validate_options(tokens.name, attr_type, &options)?;

    Ok(AttributeDescriptor::new(tokens.name, attr_type, options))
}

impl FromStr for AttributeDescriptor {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

fn resolve_type(name: &str, token: &str) -> Result<AttributeType, ParseError> {
    AttributeType::from_alias(token).ok_or_else(|| ParseError::InvalidType {
        name: name.to_string(),
        token: token.to_string(),
    })
}

/// One entry of the option table
struct OptionRule {
    key: OptionKey,
    matcher: fn(&str) -> Option<OptionValue>,
}

// Checked top to bottom, first match wins
const OPTION_RULES: &[OptionRule] = &[
    OptionRule {
        key: OptionKey::HashKey,
        matcher: match_hash_key,
    },
    OptionRule {
        key: OptionKey::RangeKey,
        matcher: match_range_key,
    },
    OptionRule {
        key: OptionKey::PersistNil,
        matcher: match_persist_nil,
    },
    OptionRule {
        key: OptionKey::DatabaseAttributeName,
        matcher: match_database_attribute_name,
    },
    OptionRule {
        key: OptionKey::DynamodbType,
        matcher: match_dynamodb_type,
    },
    OptionRule {
        key: OptionKey::DefaultValue,
        matcher: match_default_value,
    },
];

fn resolve_options(name: &str, tokens: &[&str]) -> Result<AttributeOptions, ParseError> {
    let mut options = AttributeOptions::new();

    for token in tokens {
        let (key, value) = resolve_option(name, token)?;
        trace!("{}: {} => {} = {}", name, token, key, value);

        if let Some(previous) = options.insert(key, value) {
            debug!("{}: later {} replaces earlier value {}", name, key, previous);
        }
    }

    Ok(options)
}

fn resolve_option(name: &str, token: &str) -> Result<(OptionKey, OptionValue), ParseError> {
    OPTION_RULES
        .iter()
        .find_map(|rule| (rule.matcher)(token).map(|value| (rule.key, value)))
        .ok_or_else(|| ParseError::InvalidOption {
            name: name.to_string(),
            token: token.to_string(),
        })
}

fn validate_options(
    name: &str,
    attr_type: AttributeType,
    options: &AttributeOptions,
) -> Result<(), ParseError> {
    if options.is_empty() {
        return Ok(());
    }

    let is_hash_key = options.contains_key(&OptionKey::HashKey);
    let is_range_key = options.contains_key(&OptionKey::RangeKey);

    if is_hash_key && is_range_key {
        return Err(ParseError::HashAndRangeKey {
            name: name.to_string(),
        });
    }

    if is_hash_key && attr_type.is_collection() {
        return Err(ParseError::HashKeyOnCollection {
            name: name.to_string(),
            attr_type,
        });
    }

    Ok(())
}

fn match_hash_key(token: &str) -> Option<OptionValue> {
    match_flag(token, OptionKey::HashKey)
}

fn match_range_key(token: &str) -> Option<OptionValue> {
    match_flag(token, OptionKey::RangeKey)
}

fn match_persist_nil(token: &str) -> Option<OptionValue> {
    match_flag(token, OptionKey::PersistNil)
}

fn match_database_attribute_name(token: &str) -> Option<OptionValue> {
    braced_payload(token, OptionKey::DatabaseAttributeName.keyword(), false)
        .filter(|payload| is_word(payload))
        .map(|payload| OptionValue::Quoted(payload.to_string()))
}

fn match_dynamodb_type(token: &str) -> Option<OptionValue> {
    braced_payload(token, OptionKey::DynamodbType.keyword(), true)
        .map(str::to_ascii_uppercase)
        .filter(|code| DYNAMODB_TYPE_CODES.contains(&code.as_str()))
        .map(OptionValue::Quoted)
}

fn match_default_value(token: &str) -> Option<OptionValue> {
    braced_payload(token, OptionKey::DefaultValue.keyword(), false)
        .filter(|payload| !payload.is_empty())
        .map(|payload| OptionValue::Raw(payload.to_string()))
}

fn match_flag(token: &str, key: OptionKey) -> Option<OptionValue> {
    (token == key.keyword()).then_some(OptionValue::Flag(true))
}

/// Text between the braces of `keyword{...}`, if the whole token has that shape
fn braced_payload<'a>(token: &'a str, keyword: &str, ignore_case: bool) -> Option<&'a str> {
    let head = token.get(..keyword.len())?;
    let matches = if ignore_case {
        head.eq_ignore_ascii_case(keyword)
    } else {
        head == keyword
    };

    if !matches {
        return None;
    }

    token[keyword.len()..].strip_prefix('{')?.strip_suffix('}')
}

fn is_word(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
