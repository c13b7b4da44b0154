use crate::audit::checker::Checker;
use crate::rules::deserialize::unsafe_deserialization;
use crate::rules::exec::{code_exec, shell_exec};
use crate::rules::fstring::interpolated_string;
use crate::rules::identifier::input_reference;
use crate::rules::sql::sql_execute;
use ruff_python_ast::Expr;

pub fn analyze(expr: &Expr, checker: &mut Checker) {
    match expr {
        Expr::Call(call) => {
            code_exec(checker, call);
            shell_exec(checker, call);
            unsafe_deserialization(checker, call);
            sql_execute(checker, call);
        }
        Expr::FString(fstring) => {
            interpolated_string(checker, fstring);
        }
        Expr::Name(name) => {
            input_reference(checker, name);
        }
        _ => {}
    }
}
