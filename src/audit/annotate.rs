use crate::audit::result::AuditItem;
use codespan_reporting::diagnostic::{Diagnostic, Label};
use codespan_reporting::files::SimpleFile;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::Buffer;
use std::path::Path;

/// Renders a finding with its surrounding source lines.
pub fn annotate_result(
    item: &AuditItem,
    path: &Path,
    source_code: &str,
    colored: bool,
) -> Result<String, String> {
    let mut buffer = if colored {
        Buffer::ansi()
    } else {
        Buffer::no_color()
    };
    let file_path = path.display();
    let file = SimpleFile::new(&file_path, &source_code);
    let diagnostic = Diagnostic::warning()
        .with_message(&item.description)
        .with_code(item.rule.code())
        .with_labels(vec![
            Label::primary(
                (),
                item.location.start().to_usize()..item.location.end().to_usize(),
            )
            .with_message(item.rule.code()),
        ]);
    let diagnostic = match item.rule.help() {
        Some(help) => diagnostic.with_note(format!("Help: {}", help)),
        None => diagnostic,
    };

    let config = term::Config {
        before_label_lines: 3,
        after_label_lines: 3,
        ..Default::default()
    };
    if let Err(e) = term::emit(&mut buffer, &config, &file, &diagnostic) {
        return Err(e.to_string());
    }
    Ok(String::from_utf8_lossy(buffer.as_slice()).to_string())
}
