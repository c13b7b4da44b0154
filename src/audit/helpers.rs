use ruff_python_ast as ast;

/// Returns the callee name of a call to a bare name, e.g. `eval(...)`.
#[inline]
pub fn bare_call_target(call: &ast::ExprCall) -> Option<&str> {
    match call.func.as_ref() {
        ast::Expr::Name(ast::ExprName { id, .. }) => Some(id.as_str()),
        _ => None,
    }
}

/// Returns `(object, method)` for a direct two-part call target such as
/// `os.system(...)`. Deeper attribute chains and computed receivers are
/// deliberately not resolved.
#[inline]
pub fn dotted_call_target(call: &ast::ExprCall) -> Option<(&str, &str)> {
    let ast::Expr::Attribute(attr) = call.func.as_ref() else {
        return None;
    };
    let ast::Expr::Name(object) = attr.value.as_ref() else {
        return None;
    };
    Some((object.id.as_str(), attr.attr.as_str()))
}
