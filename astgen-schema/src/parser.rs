//! AST schema XML loader.
//!
//! This module parses the XML description of AST families into an
//! [`AstSchema`]:
//!
//! ```xml
//! <astSchema package="com.drank.lox">
//!     <import>java.util.List</import>
//!     <family base="Expr">
//!         <variant name="Binary">
//!             <field type="Expr" name="left"/>
//!             <field type="Token" name="operator"/>
//!             <field type="Expr" name="right"/>
//!         </variant>
//!         <variant name="Grouping" fields="Expr expression"/>
//!     </family>
//! </astSchema>
//! ```

use crate::error::{ParseError, SchemaError};
use crate::types::{AstSchema, DEFAULT_PACKAGE, FamilySpec, FieldSpec, VariantSpec};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::path::Path;

/// Parses an AST schema from an XML string.
///
/// # Arguments
/// * `xml` - XML schema content
///
/// # Returns
/// Validated schema or parse error.
///
/// # Errors
/// Returns `ParseError` if the XML is malformed, contains unknown elements,
/// or describes a schema that fails validation.
pub fn parse_schema(xml: &str) -> Result<AstSchema, ParseError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut package: Option<String> = None;
    let mut imports = Vec::new();
    let mut families = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_bytes)?;
                match name {
                    "astSchema" => package = Some(parse_package(e)?),
                    "import" if package.is_some() => imports.push(parse_import(&mut reader)?),
                    "family" if package.is_some() => families.push(parse_family(&mut reader, e)?),
                    _ => return Err(ParseError::unknown_element(name, "astSchema")),
                }
            }
            Ok(Event::Empty(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_bytes)?;
                match name {
                    "astSchema" => package = Some(parse_package(e)?),
                    "family" if package.is_some() => {
                        let (base, visitor) = parse_family_attrs(e)?;
                        let family = FamilySpec::new(base, Vec::new())?.with_visitor(visitor);
                        families.push(family);
                    }
                    _ => return Err(ParseError::unknown_element(name, "astSchema")),
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    let package = package.ok_or_else(|| ParseError::InvalidStructure {
        message: "No astSchema element found".to_string(),
    })?;

    tracing::debug!(
        "Parsed schema for package {} with {} families",
        package,
        families.len()
    );

    Ok(AstSchema::new(package, imports, families)?)
}

/// Loads an AST schema from an XML file.
///
/// # Errors
/// Returns `ParseError` if reading or parsing fails.
pub fn load_schema(path: &Path) -> Result<AstSchema, ParseError> {
    let xml = std::fs::read_to_string(path)?;
    parse_schema(&xml)
}

/// Reads the attributes of an element as unescaped `(key, value)` pairs.
fn attributes(e: &BytesStart<'_>) -> Result<Vec<(String, String)>, ParseError> {
    let mut pairs = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let value = std::str::from_utf8(&attr.value)?;
        let value = quick_xml::escape::unescape(value)?;
        pairs.push((key.to_string(), value.into_owned()));
    }
    Ok(pairs)
}

/// Parses the astSchema element attributes.
fn parse_package(e: &BytesStart<'_>) -> Result<String, ParseError> {
    let mut package = DEFAULT_PACKAGE.to_string();
    for (key, value) in attributes(e)? {
        if key == "package" {
            package = value;
        }
    }
    Ok(package)
}

/// Parses an import element's text content.
fn parse_import(reader: &mut Reader<&[u8]>) -> Result<String, ParseError> {
    let mut import = String::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Text(ref t)) => {
                import.push_str(std::str::from_utf8(t.as_ref())?.trim());
            }
            Ok(Event::End(_)) => break,
            Ok(Event::Eof) => {
                return Err(ParseError::InvalidStructure {
                    message: "unterminated import element".to_string(),
                });
            }
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    if import.is_empty() {
        return Err(ParseError::InvalidStructure {
            message: "empty import element".to_string(),
        });
    }

    Ok(import)
}

/// Parses the family element attributes into `(base, visitor)`.
fn parse_family_attrs(e: &BytesStart<'_>) -> Result<(String, bool), ParseError> {
    let mut base = None;
    let mut visitor = true;

    for (key, value) in attributes(e)? {
        match key.as_str() {
            "base" => base = Some(value),
            "visitor" => {
                visitor = match value.as_str() {
                    "true" => true,
                    "false" => false,
                    _ => return Err(ParseError::invalid_attr("family", "visitor", value)),
                }
            }
            _ => {}
        }
    }

    let base = base.ok_or_else(|| ParseError::missing_attr("family", "base"))?;
    Ok((base, visitor))
}

/// Parses a family element and its variants.
fn parse_family(reader: &mut Reader<&[u8]>, e: &BytesStart<'_>) -> Result<FamilySpec, ParseError> {
    let (base, visitor) = parse_family_attrs(e)?;
    let mut variants = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_bytes)?;
                if name != "variant" {
                    return Err(ParseError::unknown_element(name, "family"));
                }
                let variant = parse_variant(reader, e, true)
                    .map_err(|err| locate(err, &base))?;
                variants.push(variant);
            }
            Ok(Event::Empty(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_bytes)?;
                if name != "variant" {
                    return Err(ParseError::unknown_element(name, "family"));
                }
                let variant = parse_variant(reader, e, false)
                    .map_err(|err| locate(err, &base))?;
                variants.push(variant);
            }
            Ok(Event::End(_)) => break,
            Ok(Event::Eof) => {
                return Err(ParseError::InvalidStructure {
                    message: format!("unterminated family element '{}'", base),
                });
            }
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    tracing::debug!("Parsed family {} with {} variants", base, variants.len());

    Ok(FamilySpec::new(base, variants)?.with_visitor(visitor))
}

/// Parses a variant element.
///
/// Fields come from the `fields` shorthand attribute first, then from any
/// nested `field` elements. `has_body` is false for self-closing elements.
fn parse_variant(
    reader: &mut Reader<&[u8]>,
    e: &BytesStart<'_>,
    has_body: bool,
) -> Result<VariantSpec, ParseError> {
    let mut name = None;
    let mut shorthand = None;

    for (key, value) in attributes(e)? {
        match key.as_str() {
            "name" => name = Some(value),
            "fields" => shorthand = Some(value),
            _ => {}
        }
    }

    let name = name.ok_or_else(|| ParseError::missing_attr("variant", "name"))?;

    let mut fields = Vec::new();
    if let Some(shorthand) = shorthand {
        for decl in split_declarations(&shorthand) {
            let field = FieldSpec::parse(decl).map_err(|err| err.within(name.as_str()))?;
            fields.push(field);
        }
    }

    if has_body {
        let mut buf = Vec::new();
        let mut depth = 1;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    depth += 1;
                    fields.push(parse_field(e, &name)?);
                }
                Ok(Event::Empty(ref e)) => {
                    fields.push(parse_field(e, &name)?);
                }
                Ok(Event::End(_)) => {
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                }
                Ok(Event::Eof) => {
                    return Err(ParseError::InvalidStructure {
                        message: format!("unterminated variant element '{}'", name),
                    });
                }
                Err(e) => return Err(ParseError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }
    }

    Ok(VariantSpec::new(name, fields)?)
}

/// Parses a field element of variant `variant`.
fn parse_field(e: &BytesStart<'_>, variant: &str) -> Result<FieldSpec, ParseError> {
    let elem_bytes = e.name().as_ref().to_vec();
    let elem = std::str::from_utf8(&elem_bytes)?;
    if elem != "field" {
        return Err(ParseError::unknown_element(elem, "variant"));
    }

    let mut type_name = None;
    let mut name = None;

    for (key, value) in attributes(e)? {
        match key.as_str() {
            "type" => type_name = Some(value),
            "name" => name = Some(value),
            _ => {}
        }
    }

    let type_name = type_name.ok_or_else(|| ParseError::missing_attr("field", "type"))?;
    let name = name.ok_or_else(|| ParseError::missing_attr("field", "name"))?;

    FieldSpec::new(type_name, name).map_err(|err| ParseError::Schema(err.within(variant)))
}

/// Adds the family location to schema errors raised inside it.
fn locate(err: ParseError, family: &str) -> ParseError {
    match err {
        ParseError::Schema(inner) => ParseError::Schema(inner.within(family)),
        other => other,
    }
}

/// Splits a `fields` shorthand list at top-level commas.
///
/// Commas nested inside `<...>` belong to a generic type and do not split.
fn split_declarations(list: &str) -> Vec<&str> {
    let mut declarations = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in list.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                declarations.push(list[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    declarations.push(list[start..].trim());

    declarations.retain(|decl| !decl.is_empty());
    declarations
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPR_SCHEMA: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<astSchema package="com.example.ast">
    <import>java.util.List</import>
    <family base="Expr">
        <variant name="Binary">
            <field type="Expr" name="left"/>
            <field type="Token" name="operator"/>
            <field type="Expr" name="right"/>
        </variant>
        <variant name="Grouping" fields="Expr expression"/>
        <variant name="Call" fields="Expr callee, Token paren, List&lt;Expr&gt; arguments"/>
    </family>
    <family base="Stmt" visitor="false">
        <variant name="Print" fields="Expr expression"/>
    </family>
</astSchema>"#;

    #[test]
    fn test_parse_schema() {
        let schema = parse_schema(EXPR_SCHEMA).expect("Failed to parse schema");

        assert_eq!(schema.package(), "com.example.ast");
        assert_eq!(schema.imports(), ["java.util.List"]);
        assert_eq!(schema.families().len(), 2);
    }

    #[test]
    fn test_parse_family() {
        let schema = parse_schema(EXPR_SCHEMA).expect("Failed to parse schema");
        let expr = schema.family("Expr").unwrap();

        let names: Vec<&str> = expr.variants().iter().map(VariantSpec::name).collect();
        assert_eq!(names, ["Binary", "Grouping", "Call"]);
        assert!(expr.emits_visitor());

        let binary = expr.variant("Binary").unwrap();
        assert_eq!(binary.fields()[1], FieldSpec::new("Token", "operator").unwrap());

        let call = expr.variant("Call").unwrap();
        assert_eq!(call.fields()[2].type_name(), "List<Expr>");

        assert!(!schema.family("Stmt").unwrap().emits_visitor());
    }

    #[test]
    fn test_default_package() {
        let xml = r#"<astSchema><family base="Expr"><variant name="Literal" fields="Object value"/></family></astSchema>"#;
        let schema = parse_schema(xml).unwrap();
        assert_eq!(schema.package(), DEFAULT_PACKAGE);
    }

    #[test]
    fn test_split_declarations() {
        assert_eq!(
            split_declarations("Expr left, Map<String, Expr> fields ,Token op"),
            ["Expr left", "Map<String, Expr> fields", "Token op"]
        );
        assert!(split_declarations("  ").is_empty());
    }

    #[test]
    fn test_rejects_empty_variant() {
        let xml = r#"<astSchema><family base="Expr"><variant name="Nil"/></family></astSchema>"#;
        let err = parse_schema(xml).unwrap_err();
        match err {
            ParseError::Schema(inner) => {
                assert!(matches!(inner.root(), SchemaError::EmptyVariant { .. }));
                assert!(inner.to_string().starts_with("Expr: "));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_duplicate_variant() {
        let xml = r#"<astSchema>
    <family base="Expr">
        <variant name="Literal" fields="Object value"/>
        <variant name="Literal" fields="Object other"/>
    </family>
</astSchema>"#;
        let err = parse_schema(xml).unwrap_err();
        assert!(matches!(
            err,
            ParseError::Schema(SchemaError::DuplicateVariant { .. })
        ));
    }

    #[test]
    fn test_rejects_invalid_field_name_with_location() {
        let xml = r#"<astSchema>
    <family base="Expr">
        <variant name="Unary"><field type="Token" name="operator"/><field type="Expr" name="right side"/></variant>
    </family>
</astSchema>"#;
        let err = parse_schema(xml).unwrap_err();
        assert_eq!(
            err.to_string(),
            "schema error: Expr.Unary: invalid field name 'right side'"
        );
    }

    #[test]
    fn test_rejects_unknown_element() {
        let xml = r#"<astSchema><family base="Expr"><node name="X"/></family></astSchema>"#;
        assert!(matches!(
            parse_schema(xml),
            Err(ParseError::UnknownElement { .. })
        ));
    }

    #[test]
    fn test_rejects_bad_visitor_flag() {
        let xml = r#"<astSchema><family base="Expr" visitor="yes"><variant name="Literal" fields="Object value"/></family></astSchema>"#;
        assert!(matches!(
            parse_schema(xml),
            Err(ParseError::InvalidAttribute { .. })
        ));
    }

    #[test]
    fn test_rejects_duplicate_attribute() {
        let xml = r#"<astSchema>
    <family base="Expr">
        <variant name="Literal"><field type="Object" name="value" name="other"/></variant>
    </family>
</astSchema>"#;
        assert!(matches!(parse_schema(xml), Err(ParseError::Xml(_))));
    }

    #[test]
    fn test_missing_root() {
        assert!(matches!(
            parse_schema(""),
            Err(ParseError::InvalidStructure { .. })
        ));
    }

    #[test]
    fn test_load_schema_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ast.xml");
        std::fs::write(&path, EXPR_SCHEMA).unwrap();

        let schema = load_schema(&path).unwrap();
        assert_eq!(schema, parse_schema(EXPR_SCHEMA).unwrap());
    }
}
