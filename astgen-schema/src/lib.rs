//! # astgen Schema
//!
//! Declarative description of AST families.
//!
//! This crate provides:
//! - Validated schema types (fields, variants, families)
//! - XML schema loading
//! - The built-in Lox schema

pub mod builtin;
pub mod error;
pub mod parser;
pub mod types;
pub mod validation;

pub use builtin::default_schema;
pub use error::{ParseError, SchemaError};
pub use parser::{load_schema, parse_schema};
pub use types::{AstSchema, DEFAULT_PACKAGE, FamilySpec, FieldSpec, VariantSpec};
pub use validation::is_valid_identifier;
