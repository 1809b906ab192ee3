//! Schema type definitions.
//!
//! This module contains the data structures describing AST families: the
//! fields of a variant, the variants of a family, and the schema that groups
//! families under one package. All of them are validated on construction and
//! immutable afterwards.

use crate::error::SchemaError;
use crate::validation::{
    validate_family, validate_identifier, validate_schema, validate_variant,
};
use std::fmt;

/// Default package for generated sources.
pub const DEFAULT_PACKAGE: &str = "com.drank.lox";

/// A typed field of a variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldSpec {
    type_name: String,
    name: String,
}

impl FieldSpec {
    /// Creates a field from its declared type and name.
    ///
    /// The type is an opaque token and is only checked for being non-blank.
    ///
    /// # Errors
    /// Returns `SchemaError` if the type is blank or the name is not an
    /// identifier.
    pub fn new(type_name: impl Into<String>, name: impl Into<String>) -> Result<Self, SchemaError> {
        let type_name = type_name.into().trim().to_string();
        let name = name.into();

        validate_identifier("field", &name)?;
        if type_name.is_empty() {
            return Err(SchemaError::BlankFieldType { field: name });
        }

        Ok(Self { type_name, name })
    }

    /// Parses a `"<Type> <name>"` declaration.
    ///
    /// The split happens at the last whitespace run, so generic types with
    /// spaces (`Map<String, Expr> fields`) keep their full type.
    ///
    /// # Errors
    /// Returns `SchemaError::MalformedField` if there is no type/name split,
    /// or the errors of [`FieldSpec::new`].
    pub fn parse(declaration: &str) -> Result<Self, SchemaError> {
        let trimmed = declaration.trim();
        let (type_name, name) = trimmed
            .rsplit_once(char::is_whitespace)
            .ok_or_else(|| SchemaError::MalformedField {
                declaration: declaration.to_string(),
            })?;
        Self::new(type_name, name)
    }

    /// Returns the declared type, verbatim.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Returns the field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.type_name, self.name)
    }
}

/// One concrete node shape within a family.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VariantSpec {
    name: String,
    fields: Vec<FieldSpec>,
}

impl VariantSpec {
    /// Creates a variant from its name and ordered fields.
    ///
    /// # Errors
    /// Returns `SchemaError` if the name is invalid, the field list is empty
    /// or two fields share a name.
    pub fn new(name: impl Into<String>, fields: Vec<FieldSpec>) -> Result<Self, SchemaError> {
        let name = name.into();
        validate_variant(&name, &fields)?;
        Ok(Self { name, fields })
    }

    /// Creates a variant from `"<Type> <name>"` declarations.
    ///
    /// # Errors
    /// Same as [`VariantSpec::new`], with field errors located at the variant.
    pub fn from_declarations<I, S>(
        name: impl Into<String>,
        declarations: I,
    ) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = name.into();
        let fields = declarations
            .into_iter()
            .map(|decl| FieldSpec::parse(decl.as_ref()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| e.within(name.as_str()))?;
        Self::new(name, fields)
    }

    /// Returns the variant name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the fields in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }
}

/// A named hierarchy of variants sharing one base type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FamilySpec {
    base_name: String,
    variants: Vec<VariantSpec>,
    visitor: bool,
}

impl FamilySpec {
    /// Creates a family with visitor emission enabled.
    ///
    /// # Errors
    /// Returns `SchemaError` if the base name is invalid, the variant list is
    /// empty, two variants share a name or a variant reuses the base name.
    pub fn new(
        base_name: impl Into<String>,
        variants: Vec<VariantSpec>,
    ) -> Result<Self, SchemaError> {
        let base_name = base_name.into();
        validate_family(&base_name, &variants)?;
        Ok(Self {
            base_name,
            variants,
            visitor: true,
        })
    }

    /// Enables or disables the visitor contract for this family.
    #[must_use]
    pub fn with_visitor(mut self, visitor: bool) -> Self {
        self.visitor = visitor;
        self
    }

    /// Returns the base type name.
    #[must_use]
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// Returns the variants in declaration order.
    #[must_use]
    pub fn variants(&self) -> &[VariantSpec] {
        &self.variants
    }

    /// Returns true if the visitor contract is emitted.
    #[must_use]
    pub fn emits_visitor(&self) -> bool {
        self.visitor
    }

    /// Looks up a variant by name.
    #[must_use]
    pub fn variant(&self, name: &str) -> Option<&VariantSpec> {
        self.variants.iter().find(|v| v.name == name)
    }

    /// Returns the visitor method dispatched to by `variant`.
    #[must_use]
    pub fn visit_method_name(&self, variant: &VariantSpec) -> String {
        format!("visit{}{}", variant.name, self.base_name)
    }
}

/// A set of families generated into one package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AstSchema {
    package: String,
    imports: Vec<String>,
    families: Vec<FamilySpec>,
}

impl AstSchema {
    /// Creates a schema.
    ///
    /// # Errors
    /// Returns `SchemaError` if the package or an import is malformed or two
    /// families share a base name.
    pub fn new(
        package: impl Into<String>,
        imports: Vec<String>,
        families: Vec<FamilySpec>,
    ) -> Result<Self, SchemaError> {
        let package = package.into();
        validate_schema(&package, &imports, &families)?;
        Ok(Self {
            package,
            imports,
            families,
        })
    }

    /// Returns the package of generated sources.
    #[must_use]
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Returns the explicitly declared imports.
    #[must_use]
    pub fn imports(&self) -> &[String] {
        &self.imports
    }

    /// Returns the families in declaration order.
    #[must_use]
    pub fn families(&self) -> &[FamilySpec] {
        &self.families
    }

    /// Looks up a family by base name.
    #[must_use]
    pub fn family(&self, base_name: &str) -> Option<&FamilySpec> {
        self.families.iter().find(|f| f.base_name == base_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binary() -> VariantSpec {
        VariantSpec::from_declarations("Binary", ["Expr left", "Token operator", "Expr right"])
            .expect("valid variant")
    }

    #[test]
    fn test_field_parse() {
        let field = FieldSpec::parse("Expr left").unwrap();
        assert_eq!(field.type_name(), "Expr");
        assert_eq!(field.name(), "left");
        assert_eq!(field.to_string(), "Expr left");
    }

    #[test]
    fn test_field_parse_generic_type() {
        let field = FieldSpec::parse("Map<String, Expr>  fields").unwrap();
        assert_eq!(field.type_name(), "Map<String, Expr>");
        assert_eq!(field.name(), "fields");

        let field = FieldSpec::parse("List<Stmt> statements").unwrap();
        assert_eq!(field.type_name(), "List<Stmt>");
    }

    #[test]
    fn test_field_rejections() {
        assert!(matches!(
            FieldSpec::parse("left"),
            Err(SchemaError::MalformedField { .. })
        ));
        assert!(matches!(
            FieldSpec::new("Expr", "1left"),
            Err(SchemaError::InvalidIdentifier { kind: "field", .. })
        ));
        assert!(matches!(
            FieldSpec::new("   ", "left"),
            Err(SchemaError::BlankFieldType { .. })
        ));
    }

    #[test]
    fn test_variant_preserves_field_order() {
        let variant = binary();
        let names: Vec<&str> = variant.fields().iter().map(FieldSpec::name).collect();
        assert_eq!(names, ["left", "operator", "right"]);
    }

    #[test]
    fn test_variant_rejects_empty_fields() {
        let err = VariantSpec::new("Nil", Vec::new()).unwrap_err();
        assert_eq!(
            err,
            SchemaError::EmptyVariant {
                variant: "Nil".to_string()
            }
        );
    }

    #[test]
    fn test_variant_rejects_duplicate_fields() {
        let err = VariantSpec::from_declarations("Binary", ["Expr left", "Expr left"]).unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateField { ref field, .. } if field == "left"));
    }

    #[test]
    fn test_variant_field_error_is_located() {
        let err = VariantSpec::from_declarations("Binary", ["Expr 2left"]).unwrap_err();
        assert_eq!(err.to_string(), "Binary: invalid field name '2left'");
    }

    #[test]
    fn test_family_rejects_duplicate_variants() {
        let err = FamilySpec::new("Expr", vec![binary(), binary()]).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::DuplicateVariant { ref variant, .. } if variant == "Binary"
        ));
    }

    #[test]
    fn test_family_rejects_empty_and_collisions() {
        assert!(matches!(
            FamilySpec::new("Expr", Vec::new()),
            Err(SchemaError::EmptyFamily { .. })
        ));

        let expr = VariantSpec::from_declarations("Expr", ["Expr inner"]).unwrap();
        assert!(matches!(
            FamilySpec::new("Expr", vec![expr]),
            Err(SchemaError::BaseNameCollision { .. })
        ));
    }

    #[test]
    fn test_family_visit_method_name() {
        let family = FamilySpec::new("Expr", vec![binary()]).unwrap();
        let variant = family.variant("Binary").unwrap();
        assert_eq!(family.visit_method_name(variant), "visitBinaryExpr");
        assert!(family.emits_visitor());
        assert!(!family.with_visitor(false).emits_visitor());
    }

    #[test]
    fn test_schema_rejects_duplicate_families() {
        let family = FamilySpec::new("Expr", vec![binary()]).unwrap();
        let err =
            AstSchema::new(DEFAULT_PACKAGE, Vec::new(), vec![family.clone(), family]).unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateFamily { .. }));
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(binary(), binary());
        let other = VariantSpec::from_declarations(
            "Binary",
            ["Expr right", "Token operator", "Expr left"],
        )
        .unwrap();
        assert_ne!(binary(), other);
    }
}
