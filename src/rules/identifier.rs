use crate::audit::checker::Checker;
use crate::audit::result::{AuditItem, Rule};
use ruff_python_ast as ast;

/// Any reference to the `input` builtin, called or not. Assigning it to a
/// variable or passing it along is reported the same as a call.
pub fn input_reference(checker: &mut Checker, name: &ast::ExprName) {
    if name.id.as_str() != "input" {
        return;
    }
    checker.audit_results.push(AuditItem {
        label: "input".to_string(),
        rule: Rule::InputUsage,
        description: "'input()' function used. Ensure inputs are validated and sanitized."
            .to_string(),
        line: checker.locator.line_index(name.range.start()),
        location: name.range,
    });
}

#[cfg(test)]
mod tests {
    use crate::audit::result::Rule;
    use crate::rules::test::*;
    use test_case::test_case;

    #[test_case("identifier_01.py", Rule::InputUsage, vec![1, 2, 3])]
    fn test_identifier_lines(path: &str, rule: Rule, expected_lines: Vec<usize>) {
        assert_audit_lines(path, rule, expected_lines);
    }

    #[test_case("clean_01.py", Rule::InputUsage, vec![])]
    fn test_clean(path: &str, rule: Rule, expected_names: Vec<&str>) {
        assert_audit_results_by_name(path, rule, expected_names);
    }
}
