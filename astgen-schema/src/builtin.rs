//! Built-in Lox AST schema.

use crate::error::ParseError;
use crate::parser::parse_schema;
use crate::types::AstSchema;

/// XML source of the built-in schema.
pub const LOX_SCHEMA_XML: &str = include_str!("../schemas/lox.xml");

/// Returns the built-in schema: the `Expr` and `Stmt` families of Lox.
///
/// # Errors
/// Returns `ParseError` if the embedded document fails to parse.
pub fn default_schema() -> Result<AstSchema, ParseError> {
    parse_schema(LOX_SCHEMA_XML)
}
