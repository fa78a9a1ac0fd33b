//! Field definition parsing
//!
//! Turns one definition string such as `age:int:hkey,default_value{0}` into an
//! [`AttributeDescriptor`] for a record model generator.
//!
//! Architecture:
//! - Lexer: splits the definition into name, type and option tokens
//! - Parser: resolves the type alias and option rules, then cross-checks options
//! - Types: the descriptor handed to the generator

pub mod lexer;
pub mod parser;
pub mod types;

pub use parser::parse;
pub use types::{
    AttributeDescriptor, AttributeOptions, AttributeType, OptionKey, OptionValue,
    DYNAMODB_TYPE_CODES,
};
