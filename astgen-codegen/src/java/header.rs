//! File header generation: package and imports.

use crate::error::CodegenError;
use crate::writer::CodeWriter;
use astgen_schema::{AstSchema, FamilySpec};
use std::collections::BTreeSet;

/// Collection types imported automatically when a field type mentions them.
const COLLECTIONS: &[&str] = &["List", "Map", "Set"];

/// Generator for the package declaration and import list.
pub struct HeaderGenerator<'a> {
    schema: &'a AstSchema,
    family: &'a FamilySpec,
}

impl<'a> HeaderGenerator<'a> {
    /// Creates a new header generator.
    #[must_use]
    pub fn new(schema: &'a AstSchema, family: &'a FamilySpec) -> Self {
        Self { schema, family }
    }

    /// Returns the sorted imports: declared ones plus the collection types
    /// referenced by field declarations.
    #[must_use]
    pub fn imports(&self) -> BTreeSet<String> {
        let mut imports: BTreeSet<String> = self.schema.imports().iter().cloned().collect();
        let wildcard = imports.contains("java.util.*");

        for variant in self.family.variants() {
            for field in variant.fields() {
                for token in type_tokens(field.type_name()) {
                    if COLLECTIONS.contains(&token) && !wildcard {
                        imports.insert(format!("java.util.{token}"));
                    }
                }
            }
        }

        imports
    }

    /// Writes the header.
    ///
    /// # Errors
    /// Propagates writer errors.
    pub fn generate(&self, w: &mut CodeWriter) -> Result<(), CodegenError> {
        w.line(&format!("package {};", self.schema.package()));
        w.blank_line();

        for import in self.imports() {
            w.line(&format!("import {import};"));
        }
        w.blank_line();

        Ok(())
    }
}

/// Splits a type expression into its simple-name tokens.
///
/// Qualified names (`java.util.List`) stay whole, so they never match a
/// simple collection name.
fn type_tokens(type_name: &str) -> impl Iterator<Item = &str> {
    type_name
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '$' || c == '.'))
        .filter(|token| !token.is_empty())
}
