//! Schema validation utilities.
//!
//! The schema types call into these from their constructors; they are public
//! so callers can pre-check names before building a schema.

use crate::error::SchemaError;
use crate::types::{FamilySpec, FieldSpec, VariantSpec};
use std::collections::HashSet;

/// Returns true if `name` is a valid identifier.
///
/// The first character must be an ASCII letter, `_` or `$`; the rest may
/// also contain ASCII digits.
#[must_use]
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Validates that `name` is an identifier, tagging failures with `kind`.
///
/// # Errors
/// Returns `SchemaError::InvalidIdentifier` if the name is not an identifier.
pub fn validate_identifier(kind: &'static str, name: &str) -> Result<(), SchemaError> {
    if is_valid_identifier(name) {
        Ok(())
    } else {
        Err(SchemaError::invalid_ident(kind, name))
    }
}

/// Validates a dotted path such as `com.drank.lox`.
///
/// With `allow_wildcard`, the last segment may be `*` (`java.util.*`).
fn is_valid_path(path: &str, allow_wildcard: bool) -> bool {
    let segments: Vec<&str> = path.split('.').collect();
    let last = segments.len() - 1;
    segments.iter().enumerate().all(|(i, segment)| {
        is_valid_identifier(segment) || (allow_wildcard && i == last && i > 0 && *segment == "*")
    })
}

/// Validates a package name.
///
/// # Errors
/// Returns `SchemaError::InvalidPackage` for anything but dotted identifiers.
pub fn validate_package(package: &str) -> Result<(), SchemaError> {
    if is_valid_path(package, false) {
        Ok(())
    } else {
        Err(SchemaError::InvalidPackage {
            package: package.to_string(),
        })
    }
}

/// Validates an import path.
///
/// # Errors
/// Returns `SchemaError::InvalidImport` for anything but dotted identifiers.
pub fn validate_import(import: &str) -> Result<(), SchemaError> {
    if is_valid_path(import, true) {
        Ok(())
    } else {
        Err(SchemaError::InvalidImport {
            import: import.to_string(),
        })
    }
}

/// Validates the field list of a variant.
pub(crate) fn validate_variant(name: &str, fields: &[FieldSpec]) -> Result<(), SchemaError> {
    validate_identifier("variant", name)?;

    if fields.is_empty() {
        return Err(SchemaError::EmptyVariant {
            variant: name.to_string(),
        });
    }

    let mut seen = HashSet::new();
    for field in fields {
        if !seen.insert(field.name()) {
            return Err(SchemaError::DuplicateField {
                variant: name.to_string(),
                field: field.name().to_string(),
            });
        }
    }

    Ok(())
}

/// Validates the variant list of a family.
pub(crate) fn validate_family(
    base_name: &str,
    variants: &[VariantSpec],
) -> Result<(), SchemaError> {
    validate_identifier("base type", base_name)?;

    if variants.is_empty() {
        return Err(SchemaError::EmptyFamily {
            family: base_name.to_string(),
        });
    }

    let mut seen = HashSet::new();
    for variant in variants {
        if variant.name() == base_name {
            return Err(SchemaError::BaseNameCollision {
                family: base_name.to_string(),
            });
        }
        if !seen.insert(variant.name()) {
            return Err(SchemaError::DuplicateVariant {
                family: base_name.to_string(),
                variant: variant.name().to_string(),
            });
        }
    }

    Ok(())
}

/// Validates a whole schema: package, imports and family uniqueness.
pub(crate) fn validate_schema(
    package: &str,
    imports: &[String],
    families: &[FamilySpec],
) -> Result<(), SchemaError> {
    validate_package(package)?;

    for import in imports {
        validate_import(import)?;
    }

    let mut seen = HashSet::new();
    for family in families {
        if !seen.insert(family.base_name()) {
            return Err(SchemaError::DuplicateFamily {
                family: family.base_name().to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_identifier() {
        assert!(is_valid_identifier("left"));
        assert!(is_valid_identifier("thenBranch"));
        assert!(is_valid_identifier("_tmp"));
        assert!(is_valid_identifier("$x1"));

        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("1left"));
        assert!(!is_valid_identifier("then branch"));
        assert!(!is_valid_identifier("a-b"));
        assert!(!is_valid_identifier("naïve"));
    }

    #[test]
    fn test_validate_package() {
        assert!(validate_package("com.drank.lox").is_ok());
        assert!(validate_package("lox").is_ok());
        assert!(validate_package("com..lox").is_err());
        assert!(validate_package("com.drank.*").is_err());
        assert!(validate_package("").is_err());
    }

    #[test]
    fn test_validate_import() {
        assert!(validate_import("java.util.List").is_ok());
        assert!(validate_import("java.util.*").is_ok());
        assert!(validate_import("*").is_err());
        assert!(validate_import("java.*.List").is_err());
    }
}
