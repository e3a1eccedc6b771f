use std::fmt;

/// Flat tag identifying a descriptor's shape.
///
/// `Display` renders the Go `reflect.Kind` spelling so skip notices read
/// the same as the reflection-based tooling they replace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Int,
    String,
    Bool,
    Float,
    Struct,
    Ptr,
    Slice,
    Map,
    Interface,
}

impl Kind {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Int => "int",
            Kind::String => "string",
            Kind::Bool => "bool",
            Kind::Float => "float64",
            Kind::Struct => "struct",
            Kind::Ptr => "ptr",
            Kind::Slice => "slice",
            Kind::Map => "map",
            Kind::Interface => "interface",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lightweight handle to a bindable struct type.
///
/// Used wherever one descriptor refers to another struct (parameters,
/// returns, fields); only the name matters for translation, so full
/// member lists are not carried around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructRef {
    /// Bare type name ("Region").
    pub name: String,

    /// Package qualifier ("primitives"), if the type lives outside the
    /// generated package.
    pub package: Option<String>,
}

impl StructRef {
    /// Reference a struct in the generated package.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: None,
        }
    }

    /// Reference a struct in another package.
    pub fn in_package(name: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: Some(package.into()),
        }
    }

    /// Package-qualified name as it appears in Go source.
    pub fn qualified(&self) -> String {
        match &self.package {
            Some(pkg) => format!("{}.{}", pkg, self.name),
            None => self.name.clone(),
        }
    }
}

/// Static description of one native type's shape.
///
/// This is a closed variant: every shape the generator can encounter is
/// enumerated here, and anything a binding needs must be registered
/// explicitly. Descriptors are built once by the driver, consumed during
/// a single generation pass, and discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDesc {
    /// Go `int`.
    Int,
    /// Go `string`.
    Str,
    /// Go `bool`.
    Bool,
    /// Go `float64`.
    Float,
    /// A named struct type.
    Struct(StructRef),
    /// Pointer to another type.
    Ptr(Box<TypeDesc>),
    /// Slice of another type.
    Slice(Box<TypeDesc>),
    /// Map from key type to value type.
    Map {
        key: Box<TypeDesc>,
        value: Box<TypeDesc>,
    },
    /// Go `interface{}`.
    Any,
}

impl TypeDesc {
    /// Pointer to `inner`.
    pub fn ptr(inner: TypeDesc) -> Self {
        TypeDesc::Ptr(Box::new(inner))
    }

    /// Slice of `elem`.
    pub fn slice(elem: TypeDesc) -> Self {
        TypeDesc::Slice(Box::new(elem))
    }

    /// Map from `key` to `value`.
    pub fn map(key: TypeDesc, value: TypeDesc) -> Self {
        TypeDesc::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    /// The `map[string]interface{}` shape the marshaller special-cases.
    pub fn string_any_map() -> Self {
        Self::map(TypeDesc::Str, TypeDesc::Any)
    }

    /// The shape tag for this descriptor.
    pub fn kind(&self) -> Kind {
        match self {
            TypeDesc::Int => Kind::Int,
            TypeDesc::Str => Kind::String,
            TypeDesc::Bool => Kind::Bool,
            TypeDesc::Float => Kind::Float,
            TypeDesc::Struct(_) => Kind::Struct,
            TypeDesc::Ptr(_) => Kind::Ptr,
            TypeDesc::Slice(_) => Kind::Slice,
            TypeDesc::Map { .. } => Kind::Map,
            TypeDesc::Any => Kind::Interface,
        }
    }

    /// Whether this is a string-keyed map, regardless of value type.
    ///
    /// Such parameters are treated as optional by the emitted wrappers
    /// and need their destination pre-initialized with `make`.
    pub fn is_string_keyed_map(&self) -> bool {
        matches!(self, TypeDesc::Map { key, .. } if **key == TypeDesc::Str)
    }

    /// Render the native Go type expression for this descriptor.
    pub fn go_string(&self) -> String {
        match self {
            TypeDesc::Int => "int".to_string(),
            TypeDesc::Str => "string".to_string(),
            TypeDesc::Bool => "bool".to_string(),
            TypeDesc::Float => "float64".to_string(),
            TypeDesc::Struct(r) => r.qualified(),
            TypeDesc::Ptr(inner) => format!("*{}", inner.go_string()),
            TypeDesc::Slice(elem) => format!("[]{}", elem.go_string()),
            TypeDesc::Map { key, value } => {
                format!("map[{}]{}", key.go_string(), value.go_string())
            }
            TypeDesc::Any => "interface{}".to_string(),
        }
    }
}
