//! Java reserved words and name checks.

use crate::error::CodegenError;
use astgen_schema::FamilySpec;

/// Java keywords and literals that cannot be used as identifiers.
const RESERVED: &[&str] = &[
    "_", "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class",
    "const", "continue", "default", "do", "double", "else", "enum", "extends", "false", "final",
    "finally", "float", "for", "goto", "if", "implements", "import", "instanceof", "int",
    "interface", "long", "native", "new", "null", "package", "private", "protected", "public",
    "return", "short", "static", "strictfp", "super", "switch", "synchronized", "this", "throw",
    "throws", "transient", "true", "try", "void", "volatile", "while",
];

/// Contextual keywords that Java rejects as type names.
const RESTRICTED_TYPE_NAMES: &[&str] = &["permits", "record", "sealed", "var", "yield"];

/// Name of the generated visitor interface.
pub const VISITOR_INTERFACE: &str = "Visitor";

/// Type parameter of the visitor interface and of `accept`.
pub const TYPE_PARAMETER: &str = "R";

/// Returns true if `name` is a reserved Java word.
#[must_use]
pub fn is_reserved(name: &str) -> bool {
    RESERVED.contains(&name)
}

/// Returns true if `name` cannot name a Java class.
#[must_use]
pub fn is_reserved_type_name(name: &str) -> bool {
    is_reserved(name) || RESTRICTED_TYPE_NAMES.contains(&name)
}

/// Checks that every name of `family` can be used as a Java identifier.
///
/// # Errors
/// Returns `CodegenError::ReservedWord` for keywords and
/// `CodegenError::NameCollision` for a base or variant shadowing the visitor
/// interface or its type parameter.
pub fn check_family(family: &FamilySpec) -> Result<(), CodegenError> {
    let reserved = |kind: &'static str, name: &str| CodegenError::ReservedWord {
        family: family.base_name().to_string(),
        kind,
        name: name.to_string(),
    };
    let collision = |kind: &'static str, name: &str, member: &'static str| {
        CodegenError::NameCollision {
            family: family.base_name().to_string(),
            kind,
            name: name.to_string(),
            member,
        }
    };

    if is_reserved_type_name(family.base_name()) {
        return Err(reserved("base type", family.base_name()));
    }
    if family.emits_visitor() && family.base_name() == VISITOR_INTERFACE {
        return Err(collision("base type", family.base_name(), "visitor interface"));
    }

    for variant in family.variants() {
        if is_reserved_type_name(variant.name()) {
            return Err(reserved("variant", variant.name()));
        }
        if family.emits_visitor() {
            if variant.name() == VISITOR_INTERFACE {
                return Err(collision("variant", variant.name(), "visitor interface"));
            }
            if variant.name() == TYPE_PARAMETER {
                return Err(collision("variant", variant.name(), "visitor type parameter"));
            }
        }
        for field in variant.fields() {
            if is_reserved(field.name()) {
                return Err(reserved("field", field.name()));
            }
        }
    }

    Ok(())
}
