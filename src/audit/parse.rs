use crate::audit::checker::Checker;
use crate::audit::result::{AuditOutcome, AuditResult};
use crate::io::list_python_files;
use crate::locator::Locator;
use log::{debug, error};
use std::path::Path;

/// Parse a Python source string and scan it for vulnerable patterns.
///
/// Returns an error with a human-readable diagnostic when the source does
/// not parse; no partial findings are produced in that case.
pub fn audit_source(source: &str) -> Result<AuditOutcome, String> {
    let locator = Locator::new(source);
    let parsed = ruff_python_parser::parse_module(source).map_err(|err| {
        let position = locator.line_column(err.location.start());
        format!(
            "Syntax error at line {}, column {}: {}",
            position.line, position.column, err.error
        )
    })?;

    let mut checker = Checker::new(&locator);
    checker.visit_body(parsed.suite());
    Ok(AuditOutcome::from_items(checker.audit_results))
}

/// Parse a Python file and perform an audit.
pub fn audit_file(file_path: &Path) -> Result<AuditResult, String> {
    debug!("Auditing file: {}", file_path.display());
    let source_code = std::fs::read_to_string(file_path)
        .map_err(|e| format!("Unable to read file {}: {}", file_path.display(), e))?;
    let outcome = audit_source(&source_code)?;
    Ok(AuditResult {
        outcome,
        path: file_path.to_path_buf(),
        source_code,
    })
}

/// Audit every Python file under a path lazily, skipping files that fail.
pub fn audit_path(file_path: &Path) -> Result<impl Iterator<Item = AuditResult>, String> {
    let Some(files) = list_python_files(file_path) else {
        return Err(format!("No Python files found at {}", file_path.display()));
    };
    let iter = files
        .into_iter()
        .filter_map(|path| match audit_file(&path) {
            Ok(result) => Some(result),
            Err(e) => {
                error!("Error auditing file {}: {}", path.display(), e);
                None
            }
        });
    Ok(iter)
}

#[cfg(test)]
mod tests {
    use super::audit_source;
    use crate::audit::result::{AuditOutcome, Rule};
    use unindent::unindent;

    fn scan(source: &str) -> AuditOutcome {
        audit_source(&unindent(source)).expect("source should parse")
    }

    fn lines_and_rules(outcome: &AuditOutcome) -> Vec<(usize, Rule)> {
        outcome
            .items()
            .iter()
            .map(|item| (item.line.get(), item.rule))
            .collect()
    }

    #[test]
    fn clean_source_has_no_issues() {
        let outcome = scan(
            r#"
            import math

            def area(radius):
                return math.pi * radius ** 2

            print(area(2))"#,
        );
        assert!(outcome.is_clean());
        assert!(outcome.items().is_empty());
    }

    #[test]
    fn eval_reports_a_single_finding() {
        let outcome = scan("eval(x)");
        assert_eq!(lines_and_rules(&outcome), vec![(1, Rule::CodeExec)]);
        assert_eq!(
            outcome.items()[0].description,
            "Dangerous function 'eval()' used. Consider alternatives."
        );
    }

    #[test]
    fn exec_reports_a_single_finding() {
        let outcome = scan("exec(payload)");
        assert_eq!(lines_and_rules(&outcome), vec![(1, Rule::CodeExec)]);
    }

    #[test]
    fn os_system_reports_shell_exec() {
        let outcome = scan(
            r#"
            import os
            os.system(cmd)"#,
        );
        assert_eq!(lines_and_rules(&outcome), vec![(2, Rule::ShellExec)]);
        assert_eq!(
            outcome.items()[0].description,
            "'os.system()' used. This can lead to RCE."
        );
    }

    #[test]
    fn execute_with_concatenation_is_a_single_finding() {
        let outcome = scan(r#"cursor.execute("SELECT * FROM t WHERE id=" + x)"#);
        assert_eq!(lines_and_rules(&outcome), vec![(1, Rule::SqlStringConcat)]);
    }

    #[test]
    fn execute_with_f_string_reports_both_findings_in_order() {
        let outcome = scan(r#"cursor.execute(f"SELECT * FROM t WHERE id={x}")"#);
        assert_eq!(
            lines_and_rules(&outcome),
            vec![(1, Rule::SqlFString), (1, Rule::FStringUsage)]
        );
    }

    #[test]
    fn each_input_occurrence_is_reported() {
        let outcome = scan(
            r#"
            name = input()
            age = input()"#,
        );
        assert_eq!(
            lines_and_rules(&outcome),
            vec![(1, Rule::InputUsage), (2, Rule::InputUsage)]
        );
    }

    #[test]
    fn findings_follow_traversal_order() {
        // The outer call is analyzed before its arguments are walked.
        let outcome = scan(r#"exec(eval(code))"#);
        assert_eq!(
            lines_and_rules(&outcome),
            vec![(1, Rule::CodeExec), (1, Rule::CodeExec)]
        );
        assert_eq!(outcome.items()[0].label, "exec");
        assert_eq!(outcome.items()[1].label, "eval");
    }

    #[test]
    fn scanning_twice_yields_identical_output() {
        let source = unindent(
            r#"
            import os
            os.system(f"rm {path}")
            data = input()"#,
        );
        let first = audit_source(&source).unwrap();
        let second = audit_source(&source).unwrap();
        let view = |outcome: &AuditOutcome| {
            outcome
                .items()
                .iter()
                .map(|i| (i.line.get(), i.rule, i.description.clone()))
                .collect::<Vec<_>>()
        };
        assert_eq!(view(&first), view(&second));
    }

    #[test]
    fn deep_attribute_chains_are_not_resolved() {
        let outcome = scan(
            r#"
            import os.path
            a.b.system(cmd)"#,
        );
        assert!(outcome.is_clean());
    }

    #[test]
    fn syntax_errors_abort_with_a_diagnostic() {
        let err = audit_source("def broken(:\n").unwrap_err();
        assert!(err.starts_with("Syntax error at line 1"), "got: {err}");
    }
}
