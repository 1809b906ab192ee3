//! Prelude module for convenient imports.
//!
//! ```ignore
//! use astgen::prelude::*;
//! ```

// Schema types
pub use astgen_schema::{
    AstSchema, FamilySpec, FieldSpec, ParseError, SchemaError, VariantSpec, default_schema,
    load_schema, parse_schema,
};

// Generation
pub use astgen_codegen::{CodeWriter, CodegenError, GenerationRequest, Generator};
