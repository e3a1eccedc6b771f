use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::config::BindingEntry;

use super::structure::StructDef;

/// One generation unit: a resolved type descriptor plus the
/// configuration that controls how it is wrapped.
#[derive(Debug, Clone)]
pub struct BindingSpec {
    /// The type being wrapped.
    pub def: StructDef,

    /// Wrap through a pointer. Pointer bindings see pointer-receiver
    /// methods in addition to value-receiver ones.
    pub pointer: bool,

    /// Emit a constructor bridge so the scripting side can instantiate
    /// the type. Creatable types store their native value inline;
    /// non-creatable ones hold a reference.
    pub creatable: bool,

    /// Member names removed from generation regardless of visibility.
    pub exclude: BTreeSet<String>,

    /// Where the generated module is written.
    pub output: PathBuf,
}

impl BindingSpec {
    /// Create a spec with defaults: value-wrapped, non-creatable, no
    /// exclusions.
    pub fn new(def: StructDef, output: impl Into<PathBuf>) -> Self {
        Self {
            def,
            pointer: false,
            creatable: false,
            exclude: BTreeSet::new(),
            output: output.into(),
        }
    }

    /// Build a spec from a configuration entry and its resolved type.
    pub fn from_entry(def: StructDef, entry: &BindingEntry) -> Self {
        Self {
            def,
            pointer: entry.pointer,
            creatable: entry.creatable,
            exclude: entry.exclude.iter().cloned().collect(),
            output: entry.output.clone(),
        }
    }

    /// Mark the type creatable.
    pub fn creatable(mut self) -> Self {
        self.creatable = true;
        self
    }

    /// Wrap through a pointer.
    pub fn by_pointer(mut self) -> Self {
        self.pointer = true;
        self
    }

    /// Exclude a member by name.
    pub fn exclude(mut self, name: impl Into<String>) -> Self {
        self.exclude.insert(name.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_builder() {
        let spec = BindingSpec::new(StructDef::new("RegionSet"), "regionset.go")
            .by_pointer()
            .exclude("Adjust")
            .exclude("Less");

        assert!(spec.pointer);
        assert!(!spec.creatable);
        assert!(spec.exclude.contains("Adjust"));
        assert!(!spec.exclude.contains("Swap"));
    }

    #[test]
    fn test_spec_from_entry() {
        let entry = BindingEntry {
            type_name: "RegionSet".to_string(),
            output: "regionset.go".into(),
            creatable: false,
            pointer: true,
            exclude: vec!["Adjust".to_string()],
        };
        let spec = BindingSpec::from_entry(StructDef::new("RegionSet"), &entry);
        assert!(spec.pointer);
        assert_eq!(spec.output, PathBuf::from("regionset.go"));
        assert!(spec.exclude.contains("Adjust"));
    }
}
