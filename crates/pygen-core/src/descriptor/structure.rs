use super::types::{StructRef, TypeDesc};

/// Receiver form a method is declared on.
///
/// Pointer-configured bindings take their method set from both receiver
/// forms; value bindings only see value receivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Receiver {
    Value,
    Pointer,
}

/// Definition of one struct field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    /// Field name as declared in Go.
    pub name: String,

    /// Field type.
    pub ty: TypeDesc,

    /// Embedded field, never exposed through accessors.
    pub anonymous: bool,
}

impl FieldDef {
    /// Create a named field.
    pub fn new(name: impl Into<String>, ty: TypeDesc) -> Self {
        Self {
            name: name.into(),
            ty,
            anonymous: false,
        }
    }

    /// Create an embedded field.
    pub fn anonymous(name: impl Into<String>, ty: TypeDesc) -> Self {
        Self {
            name: name.into(),
            ty,
            anonymous: true,
        }
    }

    /// Go export rule: exported names start with an uppercase letter.
    pub fn is_exported(&self) -> bool {
        is_exported(&self.name)
    }
}

/// Definition of one method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDef {
    /// Method name as declared in Go.
    pub name: String,

    /// Receiver form.
    pub receiver: Receiver,

    /// Parameter types, in declaration order. The receiver is not
    /// included.
    pub params: Vec<TypeDesc>,

    /// Return types, in declaration order.
    pub returns: Vec<TypeDesc>,
}

impl MethodDef {
    /// Create a value-receiver method.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            receiver: Receiver::Value,
            params: Vec::new(),
            returns: Vec::new(),
        }
    }

    /// Create a pointer-receiver method.
    pub fn on_pointer(name: impl Into<String>) -> Self {
        Self {
            receiver: Receiver::Pointer,
            ..Self::new(name)
        }
    }

    /// Add a parameter.
    pub fn param(mut self, ty: TypeDesc) -> Self {
        self.params.push(ty);
        self
    }

    /// Add a return value.
    pub fn returning(mut self, ty: TypeDesc) -> Self {
        self.returns.push(ty);
        self
    }

    /// Go export rule: exported names start with an uppercase letter.
    pub fn is_exported(&self) -> bool {
        is_exported(&self.name)
    }
}

/// Full shape of one bindable struct type: its identity plus ordered
/// field and method lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructDef {
    /// Bare type name ("Region").
    pub name: String,

    /// Package qualifier ("primitives"), if any.
    pub package: Option<String>,

    /// Fields, in declaration order.
    pub fields: Vec<FieldDef>,

    /// Methods, in declaration order.
    pub methods: Vec<MethodDef>,
}

impl StructDef {
    /// Create an empty struct definition.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: None,
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Set the package qualifier.
    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    /// Add a field.
    pub fn field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// Add a method.
    pub fn method(mut self, method: MethodDef) -> Self {
        self.methods.push(method);
        self
    }

    /// Lightweight reference to this type.
    pub fn struct_ref(&self) -> StructRef {
        StructRef {
            name: self.name.clone(),
            package: self.package.clone(),
        }
    }

    /// Descriptor for a value of this type.
    pub fn ty(&self) -> TypeDesc {
        TypeDesc::Struct(self.struct_ref())
    }

    /// Package-qualified name as it appears in Go source.
    pub fn qualified(&self) -> String {
        self.struct_ref().qualified()
    }
}

fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}
