//! Family generation driver.

use crate::error::CodegenError;
use crate::java;
use crate::output::write_artifact;
use astgen_schema::{AstSchema, FamilySpec};
use std::path::{Path, PathBuf};

/// One unit of work: a family and the directory its artifact goes to.
#[derive(Debug, Clone, Copy)]
pub struct GenerationRequest<'a> {
    /// Directory the artifact is written into.
    pub output_dir: &'a Path,
    /// Family to generate.
    pub family: &'a FamilySpec,
}

impl<'a> GenerationRequest<'a> {
    /// Creates a request.
    #[must_use]
    pub fn new(output_dir: &'a Path, family: &'a FamilySpec) -> Self {
        Self { output_dir, family }
    }

    /// Returns `<output_dir>/<Base>.java`.
    #[must_use]
    pub fn artifact_path(&self) -> PathBuf {
        self.output_dir.join(format!(
            "{}.{}",
            self.family.base_name(),
            java::FILE_EXTENSION
        ))
    }
}

/// Generates source files for the families of a schema.
pub struct Generator<'a> {
    schema: &'a AstSchema,
}

impl<'a> Generator<'a> {
    /// Creates a generator for `schema`.
    #[must_use]
    pub fn new(schema: &'a AstSchema) -> Self {
        Self { schema }
    }

    /// Renders the source of one family without touching the filesystem.
    ///
    /// # Errors
    /// Returns `CodegenError` if the family cannot be rendered.
    pub fn generate_family(&self, family: &FamilySpec) -> Result<String, CodegenError> {
        tracing::debug!(
            "Rendering family {} ({} variants, visitor: {})",
            family.base_name(),
            family.variants().len(),
            family.emits_visitor()
        );
        java::render_family(self.schema, family)
    }

    /// Renders a family and writes its artifact, returning the artifact path.
    ///
    /// Rendering completes before anything is written.
    ///
    /// # Errors
    /// Returns `CodegenError` if rendering or writing fails.
    pub fn write_family(&self, request: &GenerationRequest<'_>) -> Result<PathBuf, CodegenError> {
        let source = self.generate_family(request.family)?;
        let path = request.artifact_path();
        write_artifact(&path, &source)?;

        tracing::info!("Wrote {} ({} bytes)", path.display(), source.len());
        Ok(path)
    }

    /// Writes the artifacts of every family into `output_dir`, in schema
    /// order. The first failure stops generation.
    ///
    /// # Errors
    /// Returns `CodegenError` for the first family that fails.
    pub fn write_all(&self, output_dir: &Path) -> Result<Vec<PathBuf>, CodegenError> {
        self.schema
            .families()
            .iter()
            .map(|family| self.write_family(&GenerationRequest::new(output_dir, family)))
            .collect()
    }
}
