//! Wrapper module assembly.
//!
//! Each binding spec becomes one self-contained generated module:
//! class registration, wrapper struct, constructor bridge (or a
//! rejection stub), then method and field wrappers. Emission is a
//! straight pipeline; each stage's output is appended in order.

use pygen_core::{BindingSpec, GenConfig, StructDef};

use crate::fields::generate_fields;
use crate::marshal::unbox;
use crate::methods::generate_methods;
use crate::module::{Block, Module};
use crate::names::py_name;

/// Assemble the complete wrapper module for one binding spec.
pub fn generate_wrapper(spec: &BindingSpec, cfg: &GenConfig) -> Module {
    let def = &spec.def;

    let mut module = Module::new(&cfg.package);
    for path in &cfg.imports {
        module.import(path);
    }
    for expr in &cfg.anchors {
        module.anchor(expr);
    }

    module.decl(class_decl(def, spec, cfg));
    module.decl(constructor(def, spec));
    for block in generate_methods(def, spec.pointer, &spec.exclude) {
        module.decl(block);
    }
    for block in generate_fields(def, &spec.exclude) {
        module.decl(block);
    }

    module
}

/// Class registration record plus the wrapper struct. The storage slot
/// holds the native value inline for creatable types and a reference
/// otherwise.
fn class_decl(def: &StructDef, spec: &BindingSpec, cfg: &GenConfig) -> Block {
    let storage = if spec.creatable {
        def.qualified()
    } else {
        format!("*{}", def.qualified())
    };

    let mut class_body = Block::new();
    class_body.line(format!("Name:    \"{}.{}\",", cfg.namespace, def.name));
    class_body.line(format!("Pointer: (*{})(nil),", def.name));

    let mut struct_body = Block::new();
    struct_body.line("py.BaseObject");
    struct_body.line(format!("data {}", storage));

    let mut b = Block::new();
    b.line(format!("var {}Class = py.Class{{", py_name(&def.name)));
    b.indented(class_body);
    b.line("}");
    b.blank();
    b.line(format!("type {} struct {{", def.name));
    b.indented(struct_body);
    b.line("}");
    b
}

/// Constructor bridge, all-or-nothing: if any field's type cannot be
/// converted, the whole bridge is replaced by the rejection stub.
/// Non-creatable types always get the stub.
fn constructor(def: &StructDef, spec: &BindingSpec) -> Block {
    if spec.creatable {
        if let Some(bridge) = constructor_bridge(def) {
            return bridge;
        }
    }
    rejection_stub(def)
}

fn constructor_bridge(def: &StructDef) -> Option<Block> {
    let n = def.fields.len();

    let mut body = Block::new();
    let mut bound = Block::new();
    bound.line(format!(
        "return fmt.Errorf(\"Expected at most {} arguments\")",
        n
    ));
    body.line(format!("if args.Size() > {} {{", n));
    body.indented(bound);
    body.line("}");

    for (i, f) in def.fields.iter().enumerate() {
        let conv = unbox(
            "v",
            &format!("o.data.{}", f.name),
            &format!("{}.{}", def.name, f.name),
            false,
            &f.ty,
        )
        .ok()?;

        let mut fail = Block::new();
        fail.line("return err");
        let mut extract = Block::new();
        extract.line(format!("if v, err := args.GetItem({}); err != nil {{", i));
        extract.indented(fail);
        extract.line("} else {");
        extract.indented(conv);
        extract.line("}");

        body.line(format!("if args.Size() > {} {{", i));
        body.indented(extract);
        body.line("}");
    }
    body.line("return nil");

    let mut b = Block::new();
    b.line(format!(
        "func (o *{}) PyInit(args *py.Tuple, kwds *py.Dict) error {{",
        def.name
    ));
    b.indented(body);
    b.line("}");
    Some(b)
}

fn rejection_stub(def: &StructDef) -> Block {
    let mut body = Block::new();
    body.line(format!(
        "return fmt.Errorf(\"Can't initialize type {}\")",
        def.name
    ));

    let mut b = Block::new();
    b.line(format!(
        "func (o *{}) PyInit(args *py.Tuple, kwds *py.Dict) error {{",
        def.name
    ));
    b.indented(body);
    b.line("}");
    b
}

#[cfg(test)]
mod tests {
    use super::*;
    use pygen_core::{FieldDef, MethodDef, TypeDesc};

    fn test_config() -> GenConfig {
        GenConfig {
            package: "sublime".to_string(),
            namespace: "sublime".to_string(),
            imports: vec!["fmt".to_string(), "lime/backend/primitives".to_string()],
            anchors: vec!["primitives.Region{}".to_string()],
            formatter: None,
            bindings: Vec::new(),
        }
    }

    fn region() -> StructDef {
        StructDef::new("Region")
            .package("primitives")
            .field(FieldDef::new("A", TypeDesc::Int))
            .field(FieldDef::new("B", TypeDesc::Int))
            .method(MethodDef::new("Begin").returning(TypeDesc::Int))
            .method(MethodDef::new("String").returning(TypeDesc::Str))
    }

    #[test]
    fn test_creatable_wrapper() {
        let spec = BindingSpec::new(region(), "region.go").creatable();
        let text = generate_wrapper(&spec, &test_config()).render();

        assert!(text.contains("var _regionClass = py.Class{"));
        assert!(text.contains("Name:    \"sublime.Region\","));
        assert!(text.contains("Pointer: (*Region)(nil),"));
        // Creatable storage holds the value inline.
        assert!(text.contains("data primitives.Region"));
        assert!(!text.contains("data *primitives.Region"));

        assert!(text.contains("func (o *Region) PyInit(args *py.Tuple, kwds *py.Dict) error {"));
        assert!(text.contains("if args.Size() > 2 {"));
        assert!(text.contains("return fmt.Errorf(\"Expected at most 2 arguments\")"));
        assert!(text.contains("Expected type *py.Int for Region.A, not %s"));
        assert!(text.contains("Expected type *py.Int for Region.B, not %s"));

        assert!(text.contains("Py_begin"));
        assert!(text.contains("func (o *Region) PyStr() string {"));
        assert!(text.contains("PyGet_a"));
        assert!(text.contains("PySet_b"));
    }

    #[test]
    fn test_non_creatable_gets_stub_and_reference_storage() {
        let spec = BindingSpec::new(region(), "region.go").by_pointer();
        let text = generate_wrapper(&spec, &test_config()).render();

        assert!(text.contains("data *primitives.Region"));
        assert!(text.contains("return fmt.Errorf(\"Can't initialize type Region\")"));
        assert!(!text.contains("Expected at most"));
    }

    #[test]
    fn test_constructor_all_or_nothing() {
        // One untranslatable field poisons the whole bridge; the other
        // field must not get a partial constructor of its own.
        let def = StructDef::new("View")
            .package("backend")
            .field(FieldDef::new("Name", TypeDesc::Str))
            .field(FieldDef::new("Tags", TypeDesc::slice(TypeDesc::Str)));
        let spec = BindingSpec::new(def, "view.go").creatable();
        let text = generate_wrapper(&spec, &test_config()).render();

        assert!(text.contains("return fmt.Errorf(\"Can't initialize type View\")"));
        assert!(!text.contains("args.GetItem(0)"));
        assert!(!text.contains("Expected at most"));
    }

    #[test]
    fn test_exclusions_apply_to_methods_and_fields() {
        let def = region().method(
            MethodDef::new("Adjust")
                .param(TypeDesc::Int)
                .param(TypeDesc::Int),
        );
        let spec = BindingSpec::new(def, "region.go")
            .creatable()
            .exclude("Adjust")
            .exclude("B");
        let text = generate_wrapper(&spec, &test_config()).render();

        assert!(!text.contains("Py_adjust"));
        assert!(!text.contains("PyGet_b"));
        // The constructor still covers every field, exclusions only
        // remove accessors.
        assert!(text.contains("Expected type *py.Int for Region.B, not %s"));
    }

    #[test]
    fn test_preamble() {
        let spec = BindingSpec::new(region(), "region.go");
        let text = generate_wrapper(&spec, &test_config()).render();

        assert!(text.starts_with(
            "// This file was generated as part of a build step and shouldn't be manually modified\npackage sublime\n"
        ));
        assert!(text.contains("\t\"lime/backend/primitives\"\n"));
        assert!(text.contains("\t_ = primitives.Region{}\n"));
    }
}
