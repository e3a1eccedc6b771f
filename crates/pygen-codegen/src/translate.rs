//! Descriptor classification.
//!
//! `plan` is the single source of truth for whether a member can be
//! bound at all; every other component treats its error as a skip
//! signal, never a fatal abort.

use pygen_core::{StructRef, TypeDesc};

use crate::Error;

/// Successful mapping of one descriptor to the runtime's object model:
/// the boxed type a value is asserted against, and the expression that
/// unboxes it back into native form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionPlan {
    /// Boxed runtime type name ("*py.Int", "*Region").
    pub py_type: String,

    /// Accessor appended to the asserted value (".Int()", ".data").
    pub accessor: &'static str,
}

/// Map a descriptor to its conversion plan.
///
/// Pointer-to-struct dereferences to the struct rule; any other
/// pointer is rejected. Structs map to a boxed reference to their
/// generated wrapper class. Int, string, and bool map to the three
/// fixed boxed primitives. Everything else is unsupported.
pub fn plan(ty: &TypeDesc) -> Result<ConversionPlan, Error> {
    match ty {
        TypeDesc::Ptr(inner) => match inner.as_ref() {
            TypeDesc::Struct(r) => Ok(struct_plan(r)),
            other => Err(Error::NonStructPointer(other.kind())),
        },
        TypeDesc::Struct(r) => Ok(struct_plan(r)),
        TypeDesc::Int => Ok(ConversionPlan {
            py_type: "*py.Int".to_string(),
            accessor: ".Int()",
        }),
        TypeDesc::Str => Ok(ConversionPlan {
            py_type: "*py.String".to_string(),
            accessor: ".String()",
        }),
        TypeDesc::Bool => Ok(ConversionPlan {
            py_type: "*py.Bool".to_string(),
            accessor: ".Bool()",
        }),
        other => Err(Error::Unsupported(other.kind())),
    }
}

/// The boxed runtime type name for a descriptor.
pub fn py_type(ty: &TypeDesc) -> Result<String, Error> {
    Ok(plan(ty)?.py_type)
}

fn struct_plan(r: &StructRef) -> ConversionPlan {
    ConversionPlan {
        py_type: format!("*{}", r.name),
        accessor: ".data",
    }
}
