//! Visitor contract and double-dispatch generation.

use crate::error::CodegenError;
use crate::java::keywords::{VISITOR_INTERFACE, is_reserved};
use crate::writer::CodeWriter;
use astgen_schema::{FamilySpec, VariantSpec};

/// Signature of the double-dispatch entry point.
pub const ACCEPT_SIGNATURE: &str = "<R> R accept(Visitor<R> visitor)";

/// Generator for the visitor interface and `accept` methods of a family.
pub struct VisitorGenerator<'a> {
    family: &'a FamilySpec,
}

impl<'a> VisitorGenerator<'a> {
    /// Creates a new visitor generator.
    #[must_use]
    pub fn new(family: &'a FamilySpec) -> Self {
        Self { family }
    }

    /// Name of the parameter of each visit method: the base name in lower
    /// camel case, e.g. `expr` for `Expr`.
    #[must_use]
    pub fn parameter_name(&self) -> String {
        let base = self.family.base_name();
        let mut chars = base.chars();
        let name = match chars.next() {
            Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
            None => String::new(),
        };
        if is_reserved(&name) || name == "visitor" {
            "node".to_string()
        } else {
            name
        }
    }

    /// Writes the `Visitor<R>` interface with one method per variant.
    ///
    /// # Errors
    /// Propagates writer errors.
    pub fn generate_interface(&self, w: &mut CodeWriter) -> Result<(), CodegenError> {
        let parameter = self.parameter_name();

        w.block(&format!("interface {VISITOR_INTERFACE}<R>"), |w| {
            for variant in self.family.variants() {
                w.line(&format!(
                    "R {}({} {});",
                    self.family.visit_method_name(variant),
                    variant.name(),
                    parameter
                ));
            }
            Ok(())
        })?;

        Ok(())
    }

    /// Writes the `accept` override of `variant`, dispatching to its own
    /// visit method.
    ///
    /// # Errors
    /// Propagates writer errors.
    pub fn generate_accept(
        &self,
        w: &mut CodeWriter,
        variant: &VariantSpec,
    ) -> Result<(), CodegenError> {
        w.line("@Override");
        w.block(ACCEPT_SIGNATURE, |w| {
            w.line(&format!(
                "return visitor.{}(this);",
                self.family.visit_method_name(variant)
            ));
            Ok(())
        })?;

        Ok(())
    }

    /// Writes the abstract `accept` declaration of the base type.
    pub fn generate_abstract_accept(&self, w: &mut CodeWriter) {
        w.line(&format!("abstract {ACCEPT_SIGNATURE};"));
    }
}
