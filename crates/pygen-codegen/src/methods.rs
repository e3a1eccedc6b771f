//! Method wrapper emission.

use std::collections::BTreeSet;

use pygen_core::{MethodDef, Receiver, StructDef, TypeDesc};

use crate::marshal::{box_value, unbox};
use crate::module::Block;
use crate::names::py_name;
use crate::Error;

/// Emit one callable wrapper per exported, non-excluded method, in
/// declaration order.
///
/// Pointer bindings see both receiver sets; duplicate names are
/// resolved first-wins. Any skip is a diagnostic, never fatal.
pub fn generate_methods(
    def: &StructDef,
    pointer: bool,
    exclude: &BTreeSet<String>,
) -> Vec<Block> {
    let mut out = Vec::new();
    let mut seen: BTreeSet<&str> = BTreeSet::new();

    for m in &def.methods {
        if m.receiver == Receiver::Pointer && !pointer {
            continue;
        }
        if !m.is_exported() {
            tracing::warn!("Skipping method {}.{}: not exported", def.qualified(), m.name);
            continue;
        }
        if exclude.contains(&m.name) {
            tracing::warn!("Skipping method {}.{}: in exclusion list", def.qualified(), m.name);
            continue;
        }
        if !seen.insert(&m.name) {
            tracing::warn!("Skipping method {}.{}: duplicate name", def.qualified(), m.name);
            continue;
        }
        match method_wrapper(def, m) {
            Ok(block) => out.push(block),
            Err(e) => {
                seen.remove(m.name.as_str());
                tracing::warn!("Skipping method {}.{}: {}", def.qualified(), m.name, e);
            }
        }
    }

    out
}

/// Emit the wrapper for a single method. Fails (and discards all
/// partial output) if any parameter or return type cannot be mapped.
fn method_wrapper(def: &StructDef, m: &MethodDef) -> Result<Block, Error> {
    // A method literally named "String" is the display hook: its
    // wrapper returns a plain native string with no marshalling.
    let is_display = m.name == "String";

    let args_sig = if m.params.is_empty() {
        ""
    } else {
        "tu *py.Tuple, kw *py.Dict"
    };
    let ret_sig = if is_display { "string" } else { "(py.Object, error)" };

    let mut body = Block::new();
    if !m.params.is_empty() {
        body.append(declare_args(m));
        for (i, ty) in m.params.iter().enumerate() {
            body.append(extract_arg(def, m, i, ty, is_display)?);
        }
    }

    let call = native_call(m);
    if is_display {
        body.line(format!("return {}", call));
    } else if m.returns.is_empty() {
        body.line(call);
        body.line("return py.None, nil");
    } else {
        body.append(marshal_returns(m, &call)?);
    }

    let mut b = Block::new();
    b.line(format!(
        "func (o *{}) Py{}({}) {} {{",
        def.name,
        py_name(&m.name),
        args_sig,
        ret_sig
    ));
    b.indented(body);
    b.line("}");
    Ok(b)
}

fn declare_args(m: &MethodDef) -> Block {
    let mut decls = Block::new();
    for (i, ty) in m.params.iter().enumerate() {
        decls.line(format!("arg{} {}", i + 1, ty.go_string()));
    }

    let mut b = Block::new();
    b.line("var (");
    b.indented(decls);
    b.line(")");
    b
}

/// Extract and convert positional argument `i` from the tuple.
///
/// String-keyed map parameters are optional: the destination is
/// pre-initialized with `make` and conversion only runs when the tuple
/// slot is present. All other parameters are required and extraction
/// failure returns the tuple's own error.
fn extract_arg(
    def: &StructDef,
    m: &MethodDef,
    i: usize,
    ty: &TypeDesc,
    is_display: bool,
) -> Result<Block, Error> {
    let name = format!("arg{}", i + 1);
    // Argument labels carry the package-qualified type name; field
    // labels elsewhere use the bare name.
    let label = format!("{}.{}() {}", def.qualified(), m.name, name);
    let conv = unbox("v", &name, &label, !is_display, ty)?;

    let mut b = Block::new();
    if ty.is_string_keyed_map() {
        b.line(format!("{} = make({})", name, ty.go_string()));
        b.line(format!("if v, err := tu.GetItem({}); err == nil {{", i));
        b.indented(conv);
        b.line("}");
    } else {
        let ret = if is_display { "" } else { "nil, " };
        let mut fail = Block::new();
        fail.line(format!("return {}err", ret));
        b.line(format!("if v, err := tu.GetItem({}); err != nil {{", i));
        b.indented(fail);
        b.line("} else {");
        b.indented(conv);
        b.line("}");
    }
    Ok(b)
}

fn native_call(m: &MethodDef) -> String {
    let args = (1..=m.params.len())
        .map(|i| format!("arg{}", i))
        .collect::<Vec<_>>()
        .join(", ");
    format!("o.data.{}({})", m.name, args)
}

/// Box every return value independently, in declaration order, packing
/// multiple values into a runtime tuple.
fn marshal_returns(m: &MethodDef, call: &str) -> Result<Block, Error> {
    let rets = (0..m.returns.len())
        .map(|j| format!("ret{}", j))
        .collect::<Vec<_>>()
        .join(", ");

    let mut b = Block::new();
    b.line(format!("{} := {}", rets, call));
    b.line("var err error");
    for (j, ty) in m.returns.iter().enumerate() {
        b.line(format!("var pyret{} py.Object", j));
        b.append(box_value(&format!("ret{}", j), ty).map_err(Error::in_return_position)?);
        let mut fail = Block::new();
        // The release question for partially-allocated objects is left
        // open in the emitted text; the generator does not track the
        // runtime's ownership rules.
        fail.line("// TODO: do the py objs need to be freed?");
        fail.line("return nil, err");
        b.line("if err != nil {");
        b.indented(fail);
        b.line("}");
    }

    if m.returns.len() == 1 {
        b.line("return pyret0, err");
    } else {
        let packed = (0..m.returns.len())
            .map(|j| format!("pyret{}", j))
            .collect::<Vec<_>>()
            .join(", ");
        b.line(format!("return py.PackTuple({})", packed));
    }
    Ok(b)
}
