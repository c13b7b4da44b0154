use crate::audit::checker::Checker;
use crate::audit::result::{AuditItem, Rule};
use ruff_python_ast as ast;

/// Every f-string literal, wherever it appears. Fires in addition to the
/// SQL rule when the f-string is an `execute` argument; the double report
/// is intentional.
pub fn interpolated_string(checker: &mut Checker, fstring: &ast::ExprFString) {
    checker.audit_results.push(AuditItem {
        label: "f-string".to_string(),
        rule: Rule::FStringUsage,
        description: "f-string used. Verify that interpolated variables are properly sanitized."
            .to_string(),
        line: checker.locator.line_index(fstring.range.start()),
        location: fstring.range,
    });
}

#[cfg(test)]
mod tests {
    use crate::audit::result::Rule;
    use crate::rules::test::*;
    use test_case::test_case;

    // The nested f-string on line 6 is reported twice, outer then inner.
    #[test_case("fstring_01.py", Rule::FStringUsage, vec![2, 3, 4, 6, 6])]
    fn test_fstring_lines(path: &str, rule: Rule, expected_lines: Vec<usize>) {
        assert_audit_lines(path, rule, expected_lines);
    }
}
