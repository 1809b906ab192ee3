//! # astgen
//!
//! Schema-driven generator for AST class hierarchies.
//!
//! A schema lists families (such as `Expr` or `Stmt`), each with its
//! variants and their typed fields. For every family astgen writes one Java
//! file containing an abstract base class, a `Visitor<R>` interface with one
//! method per variant, and a nested class per variant that dispatches to its
//! own visit method.
//!
//! ## Quick Start
//!
//! ```no_run
//! use astgen::prelude::*;
//! use std::path::Path;
//!
//! let schema = default_schema()?;
//! let paths = Generator::new(&schema).write_all(Path::new("java/com/drank/lox"))?;
//! assert_eq!(paths.len(), schema.families().len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Schema types, validation and XML loading
//! - [`codegen`] - Java generation and artifact output
//! - [`cli`] - The `astgen` command line

pub mod cli;
pub mod prelude;

/// Schema types, validation and loading.
pub mod schema {
    pub use astgen_schema::*;
}

/// Code generation from schemas.
pub mod codegen {
    pub use astgen_codegen::*;
}
