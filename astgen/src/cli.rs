//! Command line interface.
//!
//! `astgen [OUTPUT_DIR]` writes one Java file per schema family and prints a
//! `Created <path>` line for each. The schema is the built-in Lox schema
//! unless `ASTGEN_SCHEMA` names an XML schema file.

use anyhow::Context;
use astgen_codegen::{GenerationRequest, Generator};
use astgen_schema::{AstSchema, default_schema, load_schema};
use clap::Parser;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Output directory used when none is given.
pub const DEFAULT_OUTPUT_DIR: &str = "java/com/drank/lox";

/// Environment variable naming an XML schema file to use instead of the
/// built-in one.
pub const SCHEMA_ENV: &str = "ASTGEN_SCHEMA";

/// Generate Java AST classes with visitors from a schema
#[derive(Parser, Debug)]
#[command(name = "astgen", version)]
pub struct Cli {
    /// directory the generated sources are written into
    #[arg(default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,
}

impl Cli {
    /// Loads the schema and generates every family into the output directory.
    ///
    /// # Errors
    /// Returns an error naming the failing family if loading, rendering, or
    /// writing fails.
    pub fn run(&self) -> anyhow::Result<()> {
        let schema = resolve_schema()?;
        let stdout = io::stdout();
        generate(&schema, &self.output_dir, &mut stdout.lock())?;
        Ok(())
    }
}

/// Returns the schema named by `ASTGEN_SCHEMA`, or the built-in schema.
///
/// # Errors
/// Returns an error if the schema file cannot be loaded.
pub fn resolve_schema() -> anyhow::Result<AstSchema> {
    match std::env::var_os(SCHEMA_ENV) {
        Some(path) => {
            let path = PathBuf::from(path);
            tracing::debug!("Loading schema from {}", path.display());
            load_schema(&path)
                .with_context(|| format!("failed to load schema '{}'", path.display()))
        }
        None => default_schema().context("built-in schema is invalid"),
    }
}

/// Generates every family of `schema` into `output_dir`, writing one
/// confirmation line per artifact to `out` as soon as it is written.
///
/// # Errors
/// Returns an error for the first family that fails; artifacts written
/// before it are kept.
pub fn generate(
    schema: &AstSchema,
    output_dir: &Path,
    out: &mut impl Write,
) -> anyhow::Result<Vec<PathBuf>> {
    let generator = Generator::new(schema);
    let mut written = Vec::with_capacity(schema.families().len());

    for family in schema.families() {
        let path = generator
            .write_family(&GenerationRequest::new(output_dir, family))
            .with_context(|| format!("failed to generate family '{}'", family.base_name()))?;
        writeln!(out, "Created {}", path.display())?;
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use astgen_schema::parse_schema;

    #[test]
    fn test_default_output_dir() {
        let cli = Cli::try_parse_from(["astgen"]).unwrap();
        assert_eq!(cli.output_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
    }

    #[test]
    fn test_positional_output_dir() {
        let cli = Cli::try_parse_from(["astgen", "build/generated"]).unwrap();
        assert_eq!(cli.output_dir, PathBuf::from("build/generated"));
    }

    #[test]
    fn test_rejects_flags_and_extra_arguments() {
        assert!(Cli::try_parse_from(["astgen", "--schema", "ast.xml"]).is_err());
        assert!(Cli::try_parse_from(["astgen", "a", "b"]).is_err());
    }

    #[test]
    fn test_generate_reports_each_artifact() {
        let schema = default_schema().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();

        let paths = generate(&schema, dir.path(), &mut out).unwrap();

        let expected: String = paths
            .iter()
            .map(|path| format!("Created {}\n", path.display()))
            .collect();
        assert_eq!(String::from_utf8(out).unwrap(), expected);
        assert_eq!(
            paths,
            [dir.path().join("Expr.java"), dir.path().join("Stmt.java")]
        );
    }

    #[test]
    fn test_generate_names_failing_family() {
        let schema = parse_schema(
            r#"<astSchema>
    <family base="Expr"><variant name="Literal" fields="Object value"/></family>
    <family base="Stmt"><variant name="Print" fields="Expr return"/></family>
</astSchema>"#,
        )
        .unwrap();
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();

        let err = generate(&schema, dir.path(), &mut out).unwrap_err();
        let message = format!("{err:#}");

        assert!(message.starts_with("failed to generate family 'Stmt'"));
        assert!(message.contains("'return' is a reserved word"));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("Created {}\n", dir.path().join("Expr.java").display())
        );
        assert!(!dir.path().join("Stmt.java").exists());
    }
}
