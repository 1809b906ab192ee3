//! Error types for code generation.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema parsing error.
    #[error("schema parse error: {0}")]
    Parse(#[from] astgen_schema::ParseError),

    /// Schema validation error.
    #[error("schema error: {0}")]
    Schema(#[from] astgen_schema::SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The artifact could not be written.
    #[error("failed to write '{}': {source}", .path.display())]
    Write {
        /// Artifact path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Rendering finished with blocks still open.
    #[error("unbalanced block structure: {depth} block(s) left open, innermost '{innermost}'")]
    Unbalanced {
        /// Number of open blocks.
        depth: usize,
        /// Header of the innermost open block.
        innermost: String,
    },

    /// A block was closed with none open.
    #[error("unbalanced block structure: block closed with no open block")]
    UnmatchedClose,

    /// A name is a reserved word of the target language.
    #[error("{family}: {kind} name '{name}' is a reserved word")]
    ReservedWord {
        /// Base type name of the family.
        family: String,
        /// What the name identifies.
        kind: &'static str,
        /// Offending name.
        name: String,
    },

    /// A base or variant name clashes with a generated member.
    #[error("{family}: {kind} name '{name}' collides with the generated {member}")]
    NameCollision {
        /// Base type name of the family.
        family: String,
        /// What the name identifies (base type or variant).
        kind: &'static str,
        /// Offending name.
        name: String,
        /// Generated member it collides with.
        member: &'static str,
    },
}
