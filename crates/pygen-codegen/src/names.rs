//! Identifier mapping between Go and the Python-facing convention.

/// Convert an exported Go identifier to its Python-side spelling:
/// every uppercase letter becomes an underscore followed by its
/// lowercase form, so "RegionSet" maps to "_region_set".
///
/// One irregular case: "String" maps to "Str", keeping the display
/// hook clear of the runtime's own string type name.
pub fn py_name(name: &str) -> String {
    if name == "String" {
        return "Str".to_string();
    }

    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('_');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
