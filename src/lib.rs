//! attrgen: field definition parser for record model generators
//!
//! attrgen reads the compact field definitions that model generators accept on
//! the command line and turns each one into an [`AttributeDescriptor`]: a name,
//! one of a fixed set of attribute types, and a set of normalized options.
//!
//! ## Definition Language
//!
//! ```text
//! definition := name [ ':' type ] [ ':' options ]
//! options    := option (',' option)*
//! option     := hkey | rkey | persist_nil
//!             | db_attr_name{TEXT} | ddb_type{CODE} | default_value{TEXT}
//! ```
//!
//! The type defaults to `string`. When the second segment holds options
//! (`id:hkey`) the type is omitted rather than misspelled.
//!
//! ## Quick Start
//!
//! ```rust
//! use attrgen::{parse, AttributeType, OptionKey};
//!
//! let attr = parse("age:int:hkey,default_value{0}").unwrap();
//! assert_eq!(attr.name(), "age");
//! assert_eq!(attr.attr_type(), AttributeType::Integer);
//! assert!(attr.is_hash_key());
//! assert_eq!(attr.option(OptionKey::DefaultValue).unwrap().literal(), "0");
//!
//! // Collections cannot be hash keys
//! assert!(parse("tags:map:hkey").is_err());
//! ```
//!
//! ### As a Command-Line Tool
//!
//! ```bash
//! attrgen parse id:string:hkey age:int:default_value{0} --format json
//! attrgen check title:string:db_attr_name{Title}
//! attrgen types
//! ```

pub mod attribute;
pub mod batch;
pub mod config;
pub mod error;
pub mod output;

// Re-export core types
pub use attribute::{
    parse, AttributeDescriptor, AttributeOptions, AttributeType, OptionKey, OptionValue,
};
pub use batch::BatchSummary;
pub use config::{AttrgenConfig, OutputConfig, OutputFormat};
pub use error::{ConfigError, ParseError};
