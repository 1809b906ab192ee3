//! Java code generation modules.
//!
//! A family becomes one `.java` file holding an abstract base class with the
//! visitor interface, one static nested class per variant and the abstract
//! `accept` entry point.

pub mod header;
pub mod keywords;
pub mod variants;
pub mod visitor;

pub use header::HeaderGenerator;
pub use variants::VariantGenerator;
pub use visitor::VisitorGenerator;

use crate::error::CodegenError;
use crate::writer::CodeWriter;
use astgen_schema::{AstSchema, FamilySpec};

/// Extension of generated source files.
pub const FILE_EXTENSION: &str = "java";

/// Renders the complete source file of `family`.
///
/// # Errors
/// Returns `CodegenError` if a name is a reserved word, collides with a
/// generated member, or the block structure ends unbalanced.
pub fn render_family(schema: &AstSchema, family: &FamilySpec) -> Result<String, CodegenError> {
    keywords::check_family(family)?;

    let mut w = CodeWriter::new();
    HeaderGenerator::new(schema, family).generate(&mut w)?;

    let visitor = VisitorGenerator::new(family);
    w.block(&format!("abstract class {}", family.base_name()), |w| {
        if family.emits_visitor() {
            visitor.generate_interface(w)?;
            w.blank_line();
        }

        VariantGenerator::new(family).generate(w)?;

        if family.emits_visitor() {
            visitor.generate_abstract_accept(w);
        }
        Ok(())
    })?;

    w.finish()
}
