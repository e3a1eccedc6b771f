//! Binding code generator for the gopy embedding runtime.
//!
//! Takes explicit type descriptors from `pygen-core` and emits one Go
//! source module per binding spec, wiring the described type into the
//! runtime's object model: a registered `py.Class`, a wrapper struct
//! holding the native value, a constructor bridge, and per-member
//! method and field wrappers with marshalling in both directions.
//!
//! Members whose types cannot be mapped are skipped with a diagnostic;
//! generation never fails for a single member.

pub mod fields;
pub mod marshal;
pub mod methods;
pub mod module;
pub mod names;
pub mod translate;
pub mod wrapper;

pub use module::{Block, Module};
pub use names::py_name;
pub use translate::{plan, py_type, ConversionPlan};
pub use wrapper::generate_wrapper;

use pygen_core::Kind;

/// Per-member conversion failure.
///
/// These are recovered locally: the offending method, field, or
/// constructor is dropped with a diagnostic and generation continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Can't handle type {0}")]
    Unsupported(Kind),

    #[error("Can't handle return type {0}")]
    UnsupportedReturn(Kind),

    #[error("Only supports struct pointers: {0}")]
    NonStructPointer(Kind),
}

impl Error {
    /// Reframe a boxing failure for a method return value, which
    /// carries its own message.
    pub(crate) fn in_return_position(self) -> Self {
        match self {
            Error::Unsupported(k) => Error::UnsupportedReturn(k),
            other => other,
        }
    }
}
