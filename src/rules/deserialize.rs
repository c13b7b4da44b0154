use crate::audit::checker::Checker;
use crate::audit::helpers::dotted_call_target;
use crate::audit::result::{AuditItem, Rule};
use once_cell::sync::Lazy;
use ruff_python_ast as ast;

static PICKLE_LOADERS: Lazy<&[&str]> = Lazy::new(|| &["loads", "load"]);

/// Deserialization of untrusted data through `pickle.load()`/`pickle.loads()`.
pub fn unsafe_deserialization(checker: &mut Checker, call: &ast::ExprCall) {
    let Some((module, method)) = dotted_call_target(call) else {
        return;
    };
    if module != "pickle" || !PICKLE_LOADERS.contains(&method) {
        return;
    }
    let description = format!("'pickle.{}()' used on untrusted input. This is unsafe.", method);
    checker.audit_results.push(AuditItem {
        label: format!("pickle.{}", method),
        rule: Rule::UnsafeDeserialization,
        description,
        line: checker.locator.line_index(call.range.start()),
        location: call.range,
    });
}
