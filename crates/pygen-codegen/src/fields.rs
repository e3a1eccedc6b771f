//! Field accessor emission.

use std::collections::BTreeSet;

use pygen_core::{FieldDef, StructDef};

use crate::marshal::{box_return, unbox};
use crate::module::Block;
use crate::names::py_name;

/// Emit a getter/setter pair per exported, non-excluded field, in
/// declaration order. Embedded fields are never exposed. A field whose
/// type cannot be mapped is skipped with a diagnostic, which makes it
/// invisible to the scripting side rather than erroring at call time.
pub fn generate_fields(def: &StructDef, exclude: &BTreeSet<String>) -> Vec<Block> {
    let mut out = Vec::new();

    for f in &def.fields {
        if f.anonymous || !f.is_exported() || exclude.contains(&f.name) {
            continue;
        }

        let getter = box_return(&f.ty);
        let label = format!("{}.{}", def.name, f.name);
        let setter = unbox("v", &format!("o.data.{}", f.name), &label, false, &f.ty);

        match (getter, setter) {
            (Ok(get), Ok(set)) => out.push(accessor_pair(def, f, get, set)),
            (Err(e), _) | (_, Err(e)) => {
                tracing::warn!("Skipping field {}.{}: {}", def.name, f.name, e);
            }
        }
    }

    out
}

fn accessor_pair(def: &StructDef, f: &FieldDef, getter: Block, setter: Block) -> Block {
    let mapped = py_name(&f.name);

    let mut get_body = Block::new();
    get_body.line(format!("ret := o.data.{}", f.name));
    get_body.append(getter);

    let mut set_body = setter;
    set_body.line("return nil");

    let mut b = Block::new();
    b.line(format!(
        "func (o *{}) PyGet{}() (py.Object, error) {{",
        def.name, mapped
    ));
    b.indented(get_body);
    b.line("}");
    b.blank();
    b.line(format!(
        "func (o *{}) PySet{}(v py.Object) error {{",
        def.name, mapped
    ));
    b.indented(set_body);
    b.line("}");
    b
}

#[cfg(test)]
mod tests {
    use super::*;
    use pygen_core::{StructRef, TypeDesc};

    fn region_with_fields() -> StructDef {
        StructDef::new("Region")
            .package("primitives")
            .field(FieldDef::new("A", TypeDesc::Int))
            .field(FieldDef::new("B", TypeDesc::Int))
    }

    #[test]
    fn test_accessor_pair() {
        let blocks = generate_fields(&region_with_fields(), &BTreeSet::new());
        assert_eq!(blocks.len(), 2);

        let text = blocks[0].render();
        assert!(text.contains("func (o *Region) PyGet_a() (py.Object, error) {"));
        assert!(text.contains("ret := o.data.A"));
        assert!(text.contains("pyret = py.NewInt(ret)"));
        assert!(text.contains("return pyret, err"));
        assert!(text.contains("func (o *Region) PySet_a(v py.Object) error {"));
        assert!(text.contains("Expected type *py.Int for Region.A, not %s"));
        assert!(text.contains("o.data.A = v2.Int()"));
        assert!(text.contains("return nil"));
    }

    #[test]
    fn test_setter_reads_back_through_same_slot() {
        // Get-after-set round-trips through o.data.<Field> in both
        // directions.
        let blocks = generate_fields(&region_with_fields(), &BTreeSet::new());
        let text = blocks[1].render();
        assert!(text.contains("o.data.B = v2.Int()"));
        assert!(text.contains("ret := o.data.B"));
    }

    #[test]
    fn test_unsupported_field_skipped() {
        let def = StructDef::new("View")
            .package("backend")
            .field(FieldDef::new("Tags", TypeDesc::slice(TypeDesc::Str)))
            .field(FieldDef::new("Name", TypeDesc::Str));
        let blocks = generate_fields(&def, &BTreeSet::new());

        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].render().contains("PyGet_name"));
    }

    #[test]
    fn test_anonymous_unexported_and_excluded_fields_hidden() {
        let def = StructDef::new("View")
            .package("backend")
            .field(FieldDef::anonymous(
                "HasSettings",
                TypeDesc::Struct(StructRef::in_package("HasSettings", "backend")),
            ))
            .field(FieldDef::new("scratch", TypeDesc::Bool))
            .field(FieldDef::new("Name", TypeDesc::Str));
        let exclude: BTreeSet<String> = ["Name".to_string()].into();

        assert!(generate_fields(&def, &exclude).is_empty());
    }

    #[test]
    fn test_struct_field_accessors() {
        let def = StructDef::new("Selection").package("backend").field(FieldDef::new(
            "Primary",
            TypeDesc::Struct(StructRef::in_package("Region", "primitives")),
        ));
        let blocks = generate_fields(&def, &BTreeSet::new());
        let text = blocks[0].render();

        assert!(text.contains("pyret, err = _regionClass.Alloc(1)"));
        assert!(text.contains("o.data.Primary = v2.data"));
    }
}
