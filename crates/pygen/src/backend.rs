//! Descriptor definitions for the editor backend surface.
//!
//! This is the static configuration side of the generator: every type
//! the binding list may name is enumerated here explicitly, fields and
//! methods in declaration order. Members the generator cannot map
//! (slices, callbacks, interfaces) are listed anyway; they come out as
//! skip diagnostics, which keeps this inventory honest about what the
//! backend actually exposes.

use pygen_core::{DescriptorRegistry, FieldDef, MethodDef, StructDef, StructRef, TypeDesc};

/// Build the registry of every bindable backend type.
pub fn registry() -> DescriptorRegistry {
    let mut reg = DescriptorRegistry::new();
    reg.register(region());
    reg.register(region_set());
    reg.register(edit());
    reg.register(view());
    reg.register(window());
    reg.register(settings());
    reg
}

fn region_ty() -> TypeDesc {
    TypeDesc::Struct(StructRef::in_package("Region", "primitives"))
}

fn region_set_ty() -> TypeDesc {
    TypeDesc::ptr(TypeDesc::Struct(StructRef::in_package(
        "RegionSet",
        "primitives",
    )))
}

fn edit_ty() -> TypeDesc {
    TypeDesc::ptr(TypeDesc::Struct(StructRef::in_package("Edit", "backend")))
}

fn view_ty() -> TypeDesc {
    TypeDesc::ptr(TypeDesc::Struct(StructRef::in_package("View", "backend")))
}

fn settings_ty() -> TypeDesc {
    TypeDesc::ptr(TypeDesc::Struct(StructRef::in_package(
        "Settings", "backend",
    )))
}

fn region() -> StructDef {
    StructDef::new("Region")
        .package("primitives")
        .field(FieldDef::new("A", TypeDesc::Int))
        .field(FieldDef::new("B", TypeDesc::Int))
        .method(MethodDef::new("Begin").returning(TypeDesc::Int))
        .method(MethodDef::new("End").returning(TypeDesc::Int))
        .method(MethodDef::new("Contains").param(TypeDesc::Int).returning(TypeDesc::Bool))
        .method(MethodDef::new("Covers").param(region_ty()).returning(TypeDesc::Bool))
        .method(MethodDef::new("Empty").returning(TypeDesc::Bool))
        .method(MethodDef::new("Size").returning(TypeDesc::Int))
        .method(MethodDef::new("Clip").param(region_ty()).returning(region_ty()))
        .method(MethodDef::new("Intersects").param(region_ty()).returning(TypeDesc::Bool))
        .method(MethodDef::new("Intersection").param(region_ty()).returning(region_ty()))
        .method(MethodDef::new("String").returning(TypeDesc::Str))
}

fn region_set() -> StructDef {
    StructDef::new("RegionSet")
        .package("primitives")
        .method(MethodDef::on_pointer("Add").param(region_ty()))
        .method(MethodDef::on_pointer("AddAll").param(TypeDesc::slice(region_ty())))
        .method(MethodDef::on_pointer("Adjust").param(TypeDesc::Int).param(TypeDesc::Int))
        .method(MethodDef::on_pointer("Clear"))
        .method(MethodDef::on_pointer("Contains").param(region_ty()).returning(TypeDesc::Bool))
        .method(MethodDef::on_pointer("Get").param(TypeDesc::Int).returning(region_ty()))
        .method(MethodDef::new("Len").returning(TypeDesc::Int))
        .method(MethodDef::new("Less").param(TypeDesc::Int).param(TypeDesc::Int).returning(TypeDesc::Bool))
        .method(MethodDef::on_pointer("Swap").param(TypeDesc::Int).param(TypeDesc::Int))
        .method(MethodDef::on_pointer("Regions").returning(TypeDesc::slice(region_ty())))
        .method(MethodDef::on_pointer("Subtract").param(region_ty()))
}

fn edit() -> StructDef {
    StructDef::new("Edit")
        .package("backend")
        .method(MethodDef::on_pointer("Apply"))
        .method(MethodDef::on_pointer("Undo"))
        .method(MethodDef::new("String").returning(TypeDesc::Str))
}

fn view() -> StructDef {
    StructDef::new("View")
        .package("backend")
        .method(MethodDef::on_pointer("Buffer").returning(TypeDesc::ptr(TypeDesc::Struct(
            StructRef::in_package("Buffer", "primitives"),
        ))))
        .method(MethodDef::on_pointer("Syntax").returning(TypeDesc::Str))
        .method(MethodDef::on_pointer("Settings").returning(settings_ty()))
        .method(MethodDef::on_pointer("Sel").returning(region_set_ty()))
        .method(MethodDef::on_pointer("BeginEdit").returning(edit_ty()))
        .method(MethodDef::on_pointer("EndEdit").param(edit_ty()))
        .method(
            MethodDef::on_pointer("Insert")
                .param(edit_ty())
                .param(TypeDesc::Int)
                .param(TypeDesc::Str)
                .returning(TypeDesc::Int),
        )
        .method(MethodDef::on_pointer("Erase").param(edit_ty()).param(region_ty()))
        .method(
            MethodDef::on_pointer("Replace")
                .param(edit_ty())
                .param(region_ty())
                .param(TypeDesc::Str),
        )
        .method(MethodDef::on_pointer("Size").returning(TypeDesc::Int))
        .method(MethodDef::on_pointer("Substr").param(region_ty()).returning(TypeDesc::Str))
        .method(MethodDef::on_pointer("Line").param(TypeDesc::Int).returning(region_ty()))
        .method(MethodDef::on_pointer("SetSyntaxFile").param(TypeDesc::Str))
}

fn window() -> StructDef {
    StructDef::new("Window")
        .package("backend")
        .method(MethodDef::on_pointer("NewFile").returning(view_ty()))
        .method(MethodDef::on_pointer("OpenFile").param(TypeDesc::Str).param(TypeDesc::Int).returning(view_ty()))
        .method(MethodDef::on_pointer("ActiveView").returning(view_ty()))
        .method(MethodDef::on_pointer("Views").returning(TypeDesc::slice(view_ty())))
}

fn settings() -> StructDef {
    StructDef::new("Settings")
        .package("backend")
        .method(MethodDef::on_pointer("Has").param(TypeDesc::Str).returning(TypeDesc::Bool))
        .method(MethodDef::on_pointer("Erase").param(TypeDesc::Str))
        .method(MethodDef::on_pointer("Merge").param(TypeDesc::string_any_map()))
        .method(MethodDef::on_pointer("Get").param(TypeDesc::Str).returning(TypeDesc::Any))
        .method(MethodDef::on_pointer("Set").param(TypeDesc::Str).param(TypeDesc::Any))
        .method(MethodDef::on_pointer("Parent").returning(settings_ty()))
        .method(MethodDef::on_pointer("AddOnChange").param(TypeDesc::Str).param(TypeDesc::Any))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pygen_codegen::generate_wrapper;
    use pygen_core::{BindingSpec, GenConfig};

    #[test]
    fn test_registry_covers_binding_surface() {
        let reg = registry();
        for name in ["Region", "RegionSet", "Edit", "View", "Window", "Settings"] {
            assert!(reg.get(name).is_some(), "missing descriptor for {}", name);
        }
        assert_eq!(reg.len(), 6);
    }

    #[test]
    fn test_view_buffer_suppressed_by_exclusion_alone() {
        // Buffer returns a struct pointer; it only stays off the
        // scripting surface because the binding list excludes it.
        let reg = registry();
        let view = reg.get("View").unwrap().clone();
        let buffer = view.methods.iter().find(|m| m.name == "Buffer").unwrap();
        assert_eq!(
            buffer.returns[0],
            TypeDesc::ptr(TypeDesc::Struct(StructRef::in_package("Buffer", "primitives")))
        );

        let cfg = GenConfig {
            package: "sublime".to_string(),
            namespace: "sublime".to_string(),
            imports: Vec::new(),
            anchors: Vec::new(),
            formatter: None,
            bindings: Vec::new(),
        };
        let spec = BindingSpec::new(view, "view.go")
            .by_pointer()
            .exclude("Buffer")
            .exclude("Syntax");
        let text = generate_wrapper(&spec, &cfg).render();

        assert!(!text.contains("Py_buffer"));
        assert!(!text.contains("_bufferClass"));
    }

    #[test]
    fn test_region_shape() {
        let reg = registry();
        let region = reg.get("Region").unwrap();
        assert_eq!(region.fields.len(), 2);
        assert_eq!(region.fields[0].name, "A");
        assert!(region.methods.iter().any(|m| m.name == "String"));
    }
}
