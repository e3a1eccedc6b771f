//! Value marshalling, as emitted code.
//!
//! Both directions produce Go fragments that run at the *target's*
//! call time; the generator only decides their shape. host→target
//! builds a boxed runtime value from a native one, target→host asserts
//! and unboxes a runtime value into a native destination.

use pygen_core::{StructRef, TypeDesc};

use crate::module::Block;
use crate::names::py_name;
use crate::translate::plan;
use crate::Error;

/// Emit code assigning the boxed form of native value `<name>` into
/// `py<name>`. The surrounding fragment is expected to declare
/// `py<name> py.Object` and `err error`.
pub fn box_value(name: &str, ty: &TypeDesc) -> Result<Block, Error> {
    let mut b = Block::new();
    match ty {
        TypeDesc::Ptr(inner) => match inner.as_ref() {
            TypeDesc::Struct(r) => box_struct(&mut b, name, r),
            other => return Err(Error::NonStructPointer(other.kind())),
        },
        TypeDesc::Struct(r) => box_struct(&mut b, name, r),
        TypeDesc::Bool => {
            let mut arm = Block::new();
            arm.line(format!("py{} = py.True", name));
            let mut other = Block::new();
            other.line(format!("py{} = py.False", name));
            b.line(format!("if {} {{", name));
            b.indented(arm);
            b.line("} else {");
            b.indented(other);
            b.line("}");
        }
        TypeDesc::Int => {
            b.line(format!("py{} = py.NewInt({})", name, name));
        }
        TypeDesc::Str => {
            // String construction validates encoding and can fail.
            b.line(format!("py{}, err = py.NewString({})", name, name));
        }
        other => return Err(Error::Unsupported(other.kind())),
    }
    Ok(b)
}

/// Allocation is expected to return the declared wrapper type; the
/// assertion is a guard against a misregistered class.
fn box_struct(b: &mut Block, name: &str, r: &StructRef) {
    let mut fail = Block::new();
    fail.line(format!(
        "return nil, fmt.Errorf(\"Unable to convert return value to the right type?!: %s\", py{}.Type())",
        name
    ));
    let mut assign = Block::new();
    assign.line(format!("v2.data = {}", name));

    b.line(format!("py{}, err = {}Class.Alloc(1)", name, py_name(&r.name)));
    b.line("if err != nil {");
    b.line(format!(
        "}} else if v2, ok := py{}.(*{}); !ok {{",
        name, r.name
    ));
    b.indented(fail);
    b.line("} else {");
    b.indented(assign);
    b.line("}");
}

/// Emit a complete `(py.Object, error)` tail for a single native value
/// already bound to `ret`: declarations, boxing, and the return.
pub fn box_return(ty: &TypeDesc) -> Result<Block, Error> {
    let boxed = box_value("ret", ty)?;
    let mut b = Block::new();
    b.line("var pyret py.Object");
    b.line("var err error");
    b.append(boxed);
    b.line("return pyret, err");
    Ok(b)
}

/// Emit code asserting boxed value `src` against the expected runtime
/// type and assigning its unboxed form into `dest`.
///
/// `label` identifies the destination in emitted error messages.
/// `produces_value` selects between `return nil, err` (callers
/// expecting a value/error pair) and `return err` (in-place
/// assignment).
pub fn unbox(
    src: &str,
    dest: &str,
    label: &str,
    produces_value: bool,
    ty: &TypeDesc,
) -> Result<Block, Error> {
    if let TypeDesc::Map { key, value } = ty {
        if **key == TypeDesc::Str && **value == TypeDesc::Any {
            return Ok(unbox_dict(src, dest, label, produces_value));
        }
    }

    let plan = plan(ty)?;
    let ret = if produces_value { "nil, " } else { "" };

    let mut fail = Block::new();
    fail.line(format!(
        "return {}fmt.Errorf(\"Expected type {} for {}, not %s\", {}.Type())",
        ret, plan.py_type, label, src
    ));
    let mut assign = Block::new();
    assign.line(format!("{} = v2{}", dest, plan.accessor));

    let mut b = Block::new();
    b.line(format!("if v2, ok := {}.({}); !ok {{", src, plan.py_type));
    b.indented(fail);
    b.line("} else {");
    b.indented(assign);
    b.line("}");
    Ok(b)
}

/// The one supported dynamic shape: `map[string]interface{}`,
/// converted entry by entry from a runtime dict. Only the four boxed
/// tags below are accepted; anything else fails the whole call. This
/// is a deliberate supported-subset boundary, not a fallback path.
fn unbox_dict(src: &str, dest: &str, label: &str, produces_value: bool) -> Block {
    let ret = if produces_value { "nil, " } else { "" };

    let mut switch = Block::new();
    switch.line("switch t := v.(type) {");
    switch.line("case *py.Int:");
    let mut arm = Block::new();
    arm.line(format!("{}[k] = t.Int()", dest));
    switch.indented(arm);
    switch.line("case *py.Bool:");
    let mut arm = Block::new();
    arm.line(format!("{}[k] = t.Bool()", dest));
    switch.indented(arm);
    switch.line("case *py.String:");
    let mut arm = Block::new();
    arm.line(format!("{}[k] = t.String()", dest));
    switch.indented(arm);
    switch.line("case *py.Float:");
    let mut arm = Block::new();
    arm.line(format!("{}[k] = t.Float64()", dest));
    switch.indented(arm);
    switch.line("default:");
    let mut arm = Block::new();
    arm.line(format!(
        "return {}fmt.Errorf(\"Can't set key \\\"%s\\\" with a type of %s\", k, v.Type())",
        ret
    ));
    switch.indented(arm);
    switch.line("}");

    let mut range = Block::new();
    range.line("for k, v := range m {");
    range.indented(switch);
    range.line("}");

    let mut map_fail = Block::new();
    map_fail.line(format!("return {}err", ret));

    let mut convert = Block::new();
    convert.line("if m, err := v2.MapString(); err != nil {");
    convert.indented(map_fail);
    convert.line("} else {");
    convert.indented(range);
    convert.line("}");

    let mut assert_fail = Block::new();
    assert_fail.line(format!(
        "return {}fmt.Errorf(\"Expected type *py.Dict for {}, not %s\", {}.Type())",
        ret, label, src
    ));

    let mut b = Block::new();
    b.line(format!("if v2, ok := {}.(*py.Dict); !ok {{", src));
    b.indented(assert_fail);
    b.line("} else {");
    b.indented(convert);
    b.line("}");
    b
}
