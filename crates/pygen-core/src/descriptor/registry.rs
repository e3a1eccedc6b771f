use std::collections::HashMap;

use super::structure::StructDef;

/// Name-keyed registry of bindable type descriptors.
///
/// The driver registers every type it knows about up front; the
/// configuration's binding list is then resolved against this registry.
/// Built once per run and read-only afterwards, so no locking.
#[derive(Debug, Default)]
pub struct DescriptorRegistry {
    types: HashMap<String, StructDef>,
}

impl DescriptorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type definition, replacing any previous one with the
    /// same name.
    pub fn register(&mut self, def: StructDef) {
        self.types.insert(def.name.clone(), def);
    }

    /// Look up a type by name.
    pub fn get(&self, name: &str) -> Option<&StructDef> {
        self.types.get(name)
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{FieldDef, TypeDesc};

    #[test]
    fn test_registry_basic() {
        let mut registry = DescriptorRegistry::new();
        registry.register(
            StructDef::new("Region")
                .package("primitives")
                .field(FieldDef::new("A", TypeDesc::Int)),
        );

        let def = registry.get("Region").unwrap();
        assert_eq!(def.qualified(), "primitives.Region");
        assert!(registry.get("Window").is_none());
        assert_eq!(registry.len(), 1);
    }
}
