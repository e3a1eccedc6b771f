mod binding;
mod registry;
mod structure;
mod types;

pub use binding::BindingSpec;
pub use registry::DescriptorRegistry;
pub use structure::{FieldDef, MethodDef, Receiver, StructDef};
pub use types::{Kind, StructRef, TypeDesc};
