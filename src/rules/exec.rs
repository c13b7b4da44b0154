use crate::audit::checker::Checker;
use crate::audit::helpers::{bare_call_target, dotted_call_target};
use crate::audit::result::{AuditItem, Rule};
use ruff_python_ast as ast;

#[inline]
fn is_code_exec(name: &str) -> bool {
    matches!(name, "eval" | "exec")
}

#[inline]
fn is_os_shell(method: &str) -> bool {
    matches!(method, "system" | "popen")
}

#[inline]
fn is_subprocess_exec(method: &str) -> bool {
    matches!(method, "Popen" | "call" | "run")
}

/// Calls to the `eval`/`exec` builtins by their bare name.
pub fn code_exec(checker: &mut Checker, call: &ast::ExprCall) {
    let Some(name) = bare_call_target(call) else {
        return;
    };
    if !is_code_exec(name) {
        return;
    }
    let description = format!("Dangerous function '{}()' used. Consider alternatives.", name);
    checker.audit_results.push(AuditItem {
        label: name.to_string(),
        rule: Rule::CodeExec,
        description,
        line: checker.locator.line_index(call.range.start()),
        location: call.range,
    });
}

/// Shell and process execution through `os.<method>()` or
/// `subprocess.<method>()`. Only direct two-part call targets are matched;
/// aliased imports and deeper chains are out of reach on purpose.
pub fn shell_exec(checker: &mut Checker, call: &ast::ExprCall) {
    let Some((module, method)) = dotted_call_target(call) else {
        return;
    };
    match module {
        "os" if is_os_shell(method) => {
            let description = format!("'os.{}()' used. This can lead to RCE.", method);
            checker.audit_results.push(AuditItem {
                label: format!("os.{}", method),
                rule: Rule::ShellExec,
                description,
                line: checker.locator.line_index(call.range.start()),
                location: call.range,
            });
        }
        "subprocess" if is_subprocess_exec(method) => {
            let description = format!(
                "'subprocess.{}()' used. Validate inputs to prevent RCE.",
                method
            );
            checker.audit_results.push(AuditItem {
                label: format!("subprocess.{}", method),
                rule: Rule::SubprocessExec,
                description,
                line: checker.locator.line_index(call.range.start()),
                location: call.range,
            });
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use crate::audit::result::Rule;
    use crate::rules::test::*;
    use test_case::test_case;

    #[test_case("exec_01.py", Rule::CodeExec, vec!["eval", "exec"])]
    #[test_case("exec_01.py", Rule::ShellExec, vec!["os.system", "os.popen"])]
    #[test_case(
        "exec_01.py",
        Rule::SubprocessExec,
        vec!["subprocess.Popen", "subprocess.call", "subprocess.run"]
    )]
    #[test_case("exec_02.py", Rule::CodeExec, vec![])]
    #[test_case("exec_02.py", Rule::ShellExec, vec![])]
    #[test_case("exec_02.py", Rule::SubprocessExec, vec![])]
    fn test_exec(path: &str, rule: Rule, expected_names: Vec<&str>) {
        assert_audit_results_by_name(path, rule, expected_names);
    }

    #[test_case("exec_01.py", Rule::CodeExec, vec![4, 5])]
    #[test_case("exec_01.py", Rule::ShellExec, vec![7, 8])]
    fn test_exec_lines(path: &str, rule: Rule, expected_lines: Vec<usize>) {
        assert_audit_lines(path, rule, expected_lines);
    }
}
