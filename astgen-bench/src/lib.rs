//! # astgen Bench
//!
//! Benchmarking utilities for astgen schema loading and generation.

use astgen_schema::{AstSchema, FamilySpec, FieldSpec, SchemaError, VariantSpec};

/// Builds a schema of `families` families with `variants` variants of
/// `fields` fields each.
///
/// # Errors
/// Returns `SchemaError` if a count is zero.
pub fn synthetic_schema(
    families: usize,
    variants: usize,
    fields: usize,
) -> Result<AstSchema, SchemaError> {
    let families = (0..families)
        .map(|f| {
            let base = format!("Node{f}");
            let variants = (0..variants)
                .map(|v| {
                    let fields = (0..fields)
                        .map(|i| {
                            let ty = if i % 2 == 0 { base.as_str() } else { "List<Token>" };
                            FieldSpec::new(ty, format!("field{i}"))
                        })
                        .collect::<Result<Vec<_>, _>>()?;
                    VariantSpec::new(format!("Variant{v}"), fields)
                })
                .collect::<Result<Vec<_>, _>>()?;
            FamilySpec::new(base, variants)
        })
        .collect::<Result<Vec<_>, _>>()?;

    AstSchema::new("bench.ast", Vec::new(), families)
}

/// Renders an XML schema document equivalent to [`synthetic_schema`].
#[must_use]
pub fn synthetic_schema_xml(families: usize, variants: usize, fields: usize) -> String {
    let mut xml = String::from("<astSchema package=\"bench.ast\">\n");
    for f in 0..families {
        xml.push_str(&format!("    <family base=\"Node{f}\">\n"));
        for v in 0..variants {
            xml.push_str(&format!("        <variant name=\"Variant{v}\">\n"));
            for i in 0..fields {
                let ty = if i % 2 == 0 {
                    format!("Node{f}")
                } else {
                    "List&lt;Token&gt;".to_string()
                };
                xml.push_str(&format!("            <field type=\"{ty}\" name=\"field{i}\"/>\n"));
            }
            xml.push_str("        </variant>\n");
        }
        xml.push_str("    </family>\n");
    }
    xml.push_str("</astSchema>\n");
    xml
}
