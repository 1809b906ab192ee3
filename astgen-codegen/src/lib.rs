//! # astgen Codegen
//!
//! Code generation from AST schemas.
//!
//! This crate provides:
//! - An indentation-aware writer with stack-tracked blocks
//! - Java base class, visitor and variant class generation
//! - Artifact output that never leaves partial files

pub mod error;
pub mod generator;
pub mod java;
pub mod output;
pub mod writer;

pub use error::CodegenError;
pub use generator::{GenerationRequest, Generator};
pub use writer::CodeWriter;

/// Generates the source of every family in an XML schema.
///
/// # Arguments
/// * `xml` - AST schema XML content
///
/// # Returns
/// `(base name, source)` pairs in schema order.
///
/// # Errors
/// Returns `CodegenError` if parsing or generation fails.
pub fn generate_from_xml(xml: &str) -> Result<Vec<(String, String)>, CodegenError> {
    let schema = astgen_schema::parse_schema(xml)?;
    let generator = Generator::new(&schema);
    schema
        .families()
        .iter()
        .map(|family| {
            let source = generator.generate_family(family)?;
            Ok((family.base_name().to_string(), source))
        })
        .collect()
}

/// Generates the source of every family in an XML schema file.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, or generation fails.
pub fn generate_from_file(path: &std::path::Path) -> Result<Vec<(String, String)>, CodegenError> {
    let xml = std::fs::read_to_string(path)?;
    generate_from_xml(&xml)
}
