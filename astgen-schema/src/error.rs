//! Error types for schema loading and validation.

use thiserror::Error;

/// Error type for schema loading operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// XML parsing error.
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// XML escape sequence error.
    #[error("XML escape error: {0}")]
    Escape(#[from] quick_xml::escape::EscapeError),

    /// Missing required attribute.
    #[error("missing required attribute '{attribute}' on element '{element}'")]
    MissingAttribute {
        /// Element name.
        element: String,
        /// Attribute name.
        attribute: String,
    },

    /// Invalid attribute value.
    #[error("invalid value '{value}' for attribute '{attribute}' on element '{element}'")]
    InvalidAttribute {
        /// Element name.
        element: String,
        /// Attribute name.
        attribute: String,
        /// Invalid value.
        value: String,
    },

    /// Unknown element encountered.
    #[error("unknown element '{element}' in context '{context}'")]
    UnknownElement {
        /// Element name.
        element: String,
        /// Parent context.
        context: String,
    },

    /// Invalid schema structure.
    #[error("invalid schema structure: {message}")]
    InvalidStructure {
        /// Error message.
        message: String,
    },

    /// The document parsed but describes an invalid schema.
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 decoding error.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// Error type for schema validation.
///
/// Raised by the validating constructors of the schema types, so an
/// invalid family never reaches the emitter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A name is not a valid identifier.
    #[error("invalid {kind} name '{name}'")]
    InvalidIdentifier {
        /// What the name identifies (field, variant, base type, ...).
        kind: &'static str,
        /// Offending name.
        name: String,
    },

    /// A field was declared without a type.
    #[error("field '{field}' has a blank type")]
    BlankFieldType {
        /// Field name.
        field: String,
    },

    /// A `"<Type> <name>"` declaration could not be split.
    #[error("malformed field declaration '{declaration}'")]
    MalformedField {
        /// Raw declaration.
        declaration: String,
    },

    /// A variant declares no fields.
    #[error("variant '{variant}' has no fields")]
    EmptyVariant {
        /// Variant name.
        variant: String,
    },

    /// Two fields of one variant share a name.
    #[error("duplicate field '{field}' in variant '{variant}'")]
    DuplicateField {
        /// Variant name.
        variant: String,
        /// Field name.
        field: String,
    },

    /// A family declares no variants.
    #[error("family '{family}' has no variants")]
    EmptyFamily {
        /// Base type name.
        family: String,
    },

    /// Two variants of one family share a name.
    #[error("duplicate variant '{variant}' in family '{family}'")]
    DuplicateVariant {
        /// Base type name.
        family: String,
        /// Variant name.
        variant: String,
    },

    /// A variant reuses the base type name.
    #[error("variant '{family}' has the same name as its base type")]
    BaseNameCollision {
        /// Base type name.
        family: String,
    },

    /// Two families share a base type name.
    #[error("duplicate family '{family}'")]
    DuplicateFamily {
        /// Base type name.
        family: String,
    },

    /// The package is not a dot-separated list of identifiers.
    #[error("invalid package name '{package}'")]
    InvalidPackage {
        /// Package name.
        package: String,
    },

    /// An import is not a dot-separated list of identifiers.
    #[error("invalid import '{import}'")]
    InvalidImport {
        /// Import path.
        import: String,
    },

    /// An error located inside a family or variant.
    #[error("{path}: {inner}")]
    Context {
        /// Dotted location, e.g. `Expr.Binary`.
        path: String,
        /// Underlying error.
        inner: Box<SchemaError>,
    },
}

impl ParseError {
    /// Creates a missing attribute error.
    pub fn missing_attr(element: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::MissingAttribute {
            element: element.into(),
            attribute: attribute.into(),
        }
    }

    /// Creates an invalid attribute error.
    pub fn invalid_attr(
        element: impl Into<String>,
        attribute: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::InvalidAttribute {
            element: element.into(),
            attribute: attribute.into(),
            value: value.into(),
        }
    }

    /// Creates an unknown element error.
    pub fn unknown_element(element: impl Into<String>, context: impl Into<String>) -> Self {
        Self::UnknownElement {
            element: element.into(),
            context: context.into(),
        }
    }
}

impl SchemaError {
    /// Creates an invalid identifier error.
    pub fn invalid_ident(kind: &'static str, name: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            kind,
            name: name.into(),
        }
    }

    /// Prefixes the error with the location it occurred in.
    ///
    /// Nested calls build an outer-to-inner path: wrapping an error already
    /// located at `Binary` in `Expr` yields `Expr.Binary`.
    #[must_use]
    pub fn within(self, location: impl Into<String>) -> Self {
        let location = location.into();
        match self {
            Self::Context { path, inner } => Self::Context {
                path: format!("{location}.{path}"),
                inner,
            },
            other => Self::Context {
                path: location,
                inner: Box::new(other),
            },
        }
    }

    /// Returns the innermost error, without location context.
    #[must_use]
    pub fn root(&self) -> &SchemaError {
        match self {
            Self::Context { inner, .. } => inner.root(),
            other => other,
        }
    }
}
