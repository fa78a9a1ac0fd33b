//! Attribute descriptor types
//!
//! Data structures produced by parsing one field definition

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Storage type codes accepted by `ddb_type{...}`
pub const DYNAMODB_TYPE_CODES: [&str; 9] = ["S", "N", "B", "BOOL", "SS", "NS", "BS", "M", "L"];

/// Option mapping of a descriptor, ordered by key
pub type AttributeOptions = BTreeMap<OptionKey, OptionValue>;

/// Canonical kind assigned to a field
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    Boolean,
    Date,
    Datetime,
    Float,
    Integer,
    List,
    Map,
    NumericSet,
    StringSet,
    #[default]
    String,
}

impl AttributeType {
    pub const ALL: [AttributeType; 10] = [
        AttributeType::Boolean,
        AttributeType::Date,
        AttributeType::Datetime,
        AttributeType::Float,
        AttributeType::Integer,
        AttributeType::List,
        AttributeType::Map,
        AttributeType::NumericSet,
        AttributeType::StringSet,
        AttributeType::String,
    ];

    /// Look up a type token, ignoring case
    pub fn from_alias(token: &str) -> Option<Self> {
        let token = token.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|ty| ty.aliases().contains(&token.as_str()))
    }

    /// Spellings accepted in the type segment
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            AttributeType::Boolean => &["bool", "boolean"],
            AttributeType::Date => &["date"],
            AttributeType::Datetime => &["datetime"],
            AttributeType::Float => &["float"],
            AttributeType::Integer => &["int", "integer"],
            AttributeType::List => &["list"],
            AttributeType::Map => &["map"],
            AttributeType::NumericSet => &["num_set", "numeric_set", "nset"],
            AttributeType::StringSet => &["string_set", "s_set", "sset"],
            AttributeType::String => &["string"],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeType::Boolean => "boolean",
            AttributeType::Date => "date",
            AttributeType::Datetime => "datetime",
            AttributeType::Float => "float",
            AttributeType::Integer => "integer",
            AttributeType::List => "list",
            AttributeType::Map => "map",
            AttributeType::NumericSet => "numeric_set",
            AttributeType::StringSet => "string_set",
            AttributeType::String => "string",
        }
    }

    /// Attribute kind symbol emitted by record model generators
    pub fn generator_name(&self) -> &'static str {
        match self {
            AttributeType::Boolean => "boolean_attr",
            AttributeType::Date => "date_attr",
            AttributeType::Datetime => "datetime_attr",
            AttributeType::Float => "float_attr",
            AttributeType::Integer => "integer_attr",
            AttributeType::List => "list_attr",
            AttributeType::Map => "map_attr",
            AttributeType::NumericSet => "numeric_set_attr",
            AttributeType::StringSet => "string_set_attr",
            AttributeType::String => "string_attr",
        }
    }

    /// Container kinds, which cannot serve as a hash key
    pub fn is_collection(&self) -> bool {
        matches!(
            self,
            AttributeType::Map
                | AttributeType::List
                | AttributeType::NumericSet
                | AttributeType::StringSet
        )
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recognized option keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionKey {
    HashKey,
    RangeKey,
    PersistNil,
    DatabaseAttributeName,
    DynamodbType,
    DefaultValue,
}

impl OptionKey {
    pub const ALL: [OptionKey; 6] = [
        OptionKey::HashKey,
        OptionKey::RangeKey,
        OptionKey::PersistNil,
        OptionKey::DatabaseAttributeName,
        OptionKey::DynamodbType,
        OptionKey::DefaultValue,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKey::HashKey => "hash_key",
            OptionKey::RangeKey => "range_key",
            OptionKey::PersistNil => "persist_nil",
            OptionKey::DatabaseAttributeName => "database_attribute_name",
            OptionKey::DynamodbType => "dynamodb_type",
            OptionKey::DefaultValue => "default_value",
        }
    }

    /// Spelling of the option in a field definition
    pub fn keyword(&self) -> &'static str {
        match self {
            OptionKey::HashKey => "hkey",
            OptionKey::RangeKey => "rkey",
            OptionKey::PersistNil => "persist_nil",
            OptionKey::DatabaseAttributeName => "db_attr_name",
            OptionKey::DynamodbType => "ddb_type",
            OptionKey::DefaultValue => "default_value",
        }
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized option value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum OptionValue {
    /// Marker option such as `hkey`
    Flag(bool),

    /// Text emitted as a quoted string literal
    Quoted(String),

    /// Text emitted verbatim
    Raw(String),
}

impl OptionValue {
    /// Literal text a generator emits for this value
    pub fn literal(&self) -> String {
        match self {
            OptionValue::Flag(flag) => flag.to_string(),
            OptionValue::Quoted(text) => format!("\"{}\"", text),
            OptionValue::Raw(text) => text.clone(),
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            OptionValue::Flag(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Unquoted payload of a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            OptionValue::Quoted(text) | OptionValue::Raw(text) => Some(text),
            OptionValue::Flag(_) => None,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.literal())
    }
}

/// Parsed field definition
///
/// Built once per parse and handed to the generator. `Display` renders the
/// canonical definition text, which parses back to an equal descriptor.
///
/// The non-empty name and hash key rules are only guaranteed for descriptors
/// returned by [`parse`](crate::attribute::parse); `new`, `options_mut` and
/// deserialization do not check them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeDescriptor {
    name: String,

    #[serde(rename = "type")]
    attr_type: AttributeType,

    #[serde(default)]
    options: AttributeOptions,
}

impl AttributeDescriptor {
    pub fn new(name: impl Into<String>, attr_type: AttributeType, options: AttributeOptions) -> Self {
        Self {
            name: name.into(),
            attr_type,
            options,
        }
    }

    /// Plain string attribute without options
    pub fn with_name(name: impl Into<String>) -> Self {
        Self::new(name, AttributeType::default(), AttributeOptions::new())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attr_type(&self) -> AttributeType {
        self.attr_type
    }

    pub fn options(&self) -> &AttributeOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut AttributeOptions {
        &mut self.options
    }

    pub fn option(&self, key: OptionKey) -> Option<&OptionValue> {
        self.options.get(&key)
    }

    pub fn is_hash_key(&self) -> bool {
        self.flag(OptionKey::HashKey)
    }

    pub fn is_range_key(&self) -> bool {
        self.flag(OptionKey::RangeKey)
    }

    fn flag(&self, key: OptionKey) -> bool {
        self.option(key)
            .and_then(OptionValue::as_flag)
            .unwrap_or(false)
    }
}

/// Definition-language form of one option; `None` for a cleared flag
fn render_option(key: OptionKey, value: &OptionValue) -> Option<String> {
    match value {
        OptionValue::Flag(true) => Some(key.keyword().to_string()),
        OptionValue::Flag(false) => None,
        OptionValue::Quoted(text) | OptionValue::Raw(text) => {
            Some(format!("{}{{{}}}", key.keyword(), text))
        }
    }
}

impl fmt::Display for AttributeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.attr_type)?;

        let rendered: Vec<String> = self
            .options
            .iter()
            .filter_map(|(key, value)| render_option(*key, value))
            .collect();

        if !rendered.is_empty() {
            write!(f, ":{}", rendered.join(","))?;
        }
        Ok(())
    }
}
