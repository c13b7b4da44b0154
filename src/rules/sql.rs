use crate::audit::checker::Checker;
use crate::audit::helpers::dotted_call_target;
use crate::audit::result::{AuditItem, Rule};
use ruff_python_ast::{self as ast, Expr};

/// SQL execution where the query argument is assembled inline: any
/// `<name>.execute(...)` call whose first positional argument is a string
/// concatenation or an f-string.
///
/// The receiver name is not checked against a cursor type; the `execute`
/// method name alone selects the rule. The argument expression itself is
/// still visited afterwards, so an f-string query additionally produces the
/// generic f-string finding.
pub fn sql_execute(checker: &mut Checker, call: &ast::ExprCall) {
    let Some((object, method)) = dotted_call_target(call) else {
        return;
    };
    if method != "execute" {
        return;
    }
    let Some(first_arg) = call.arguments.args.first() else {
        return;
    };
    let (rule, description) = match first_arg {
        Expr::BinOp(_) => (
            Rule::SqlStringConcat,
            "SQL execution with string concatenation detected. Use parameterized queries.",
        ),
        Expr::FString(_) => (
            Rule::SqlFString,
            "SQL execution with f-string detected. Verify proper sanitization.",
        ),
        _ => return,
    };
    checker.audit_results.push(AuditItem {
        label: format!("{}.execute", object),
        rule,
        description: description.to_string(),
        line: checker.locator.line_index(call.range.start()),
        location: call.range,
    });
}

#[cfg(test)]
mod tests {
    use crate::audit::result::Rule;
    use crate::rules::test::*;
    use test_case::test_case;

    #[test_case("sql_01.py", Rule::SqlStringConcat, vec!["cursor.execute"])]
    #[test_case("sql_01.py", Rule::SqlFString, vec!["cursor.execute"])]
    fn test_sql(path: &str, rule: Rule, expected_names: Vec<&str>) {
        assert_audit_results_by_name(path, rule, expected_names);
    }

    #[test_case("sql_01.py", Rule::SqlStringConcat, vec![1])]
    #[test_case("sql_01.py", Rule::SqlFString, vec![2])]
    fn test_sql_lines(path: &str, rule: Rule, expected_lines: Vec<usize>) {
        assert_audit_lines(path, rule, expected_lines);
    }
}
