//! Concrete variant class generation.

use crate::error::CodegenError;
use crate::java::visitor::VisitorGenerator;
use crate::writer::CodeWriter;
use astgen_schema::{FamilySpec, FieldSpec, VariantSpec};

/// Generator for the nested classes of a family.
pub struct VariantGenerator<'a> {
    family: &'a FamilySpec,
    visitor: VisitorGenerator<'a>,
}

impl<'a> VariantGenerator<'a> {
    /// Creates a new variant generator.
    #[must_use]
    pub fn new(family: &'a FamilySpec) -> Self {
        Self {
            family,
            visitor: VisitorGenerator::new(family),
        }
    }

    /// Writes every variant class, separated by blank lines.
    ///
    /// # Errors
    /// Propagates writer errors.
    pub fn generate(&self, w: &mut CodeWriter) -> Result<(), CodegenError> {
        for variant in self.family.variants() {
            self.generate_variant(w, variant)?;
            w.blank_line();
        }
        Ok(())
    }

    /// Writes one variant class: constructor, `accept` override, fields.
    ///
    /// # Errors
    /// Propagates writer errors.
    pub fn generate_variant(
        &self,
        w: &mut CodeWriter,
        variant: &VariantSpec,
    ) -> Result<(), CodegenError> {
        let header = format!(
            "static class {} extends {}",
            variant.name(),
            self.family.base_name()
        );

        w.block(&header, |w| {
            self.generate_constructor(w, variant)?;
            w.blank_line();

            if self.family.emits_visitor() {
                self.visitor.generate_accept(w, variant)?;
                w.blank_line();
            }

            for field in variant.fields() {
                w.line(&format!("final {field};"));
            }
            Ok(())
        })?;

        Ok(())
    }

    /// Writes the constructor, assigning parameters to fields positionally.
    fn generate_constructor(
        &self,
        w: &mut CodeWriter,
        variant: &VariantSpec,
    ) -> Result<(), CodegenError> {
        let parameters = variant
            .fields()
            .iter()
            .map(FieldSpec::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        w.block(&format!("{}({})", variant.name(), parameters), |w| {
            for field in variant.fields() {
                w.line(&format!("this.{0} = {0};", field.name()));
            }
            Ok(())
        })?;

        Ok(())
    }
}
