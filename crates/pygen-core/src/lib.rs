pub mod config;
pub mod descriptor;

pub use config::{BindingEntry, ConfigError, GenConfig};
pub use descriptor::{
    BindingSpec, DescriptorRegistry, FieldDef, Kind, MethodDef, Receiver, StructDef, StructRef,
    TypeDesc,
};
