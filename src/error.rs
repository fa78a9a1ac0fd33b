//! Error types for definition parsing and configuration loading

use crate::attribute::AttributeType;
use thiserror::Error;

/// Failure to turn a definition string into an attribute descriptor
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The definition has no name before the first `:`
    #[error("Field definition is missing a name")]
    MissingName,

    /// Type token does not match any known alias
    #[error("Invalid type for {name}: {token}")]
    InvalidType { name: String, token: String },

    /// Option token does not match any option rule
    #[error("You provided an invalid option for {name}: {token}")]
    InvalidOption { name: String, token: String },

    #[error("Field {name} cannot be a range key and hash key simultaneously")]
    HashAndRangeKey { name: String },

    #[error("Field {name} cannot be a hash key and be of type {attr_type}")]
    HashKeyOnCollection {
        name: String,
        attr_type: AttributeType,
    },
}

impl ParseError {
    /// Name of the field the error refers to, if one was parsed
    pub fn field_name(&self) -> Option<&str> {
        match self {
            ParseError::MissingName => None,
            ParseError::InvalidType { name, .. }
            | ParseError::InvalidOption { name, .. }
            | ParseError::HashAndRangeKey { name }
            | ParseError::HashKeyOnCollection { name, .. } => Some(name),
        }
    }
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
