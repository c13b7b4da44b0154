use ruff_source_file::OneIndexed;
use ruff_text_size::TextRange;
use serde::{Serialize, Serializer};
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash, EnumIter)]
pub enum Rule {
    // Execution
    CodeExec,
    ShellExec,
    SubprocessExec,

    // Deserialization
    UnsafeDeserialization,

    // SQL injection
    SqlStringConcat,
    SqlFString,

    // Input handling
    FStringUsage,
    InputUsage,
}

impl Serialize for Rule {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Serialize the enum as its code string
        serializer.serialize_str(self.code())
    }
}

impl Rule {
    pub fn iter() -> impl Iterator<Item = Rule> {
        <Self as IntoEnumIterator>::iter()
    }

    pub fn code(&self) -> &'static str {
        match self {
            // Execution: PV1000
            Rule::CodeExec => "PV1000",
            Rule::ShellExec => "PV1010",
            Rule::SubprocessExec => "PV1020",

            // Deserialization: PV2000
            Rule::UnsafeDeserialization => "PV2000",

            // SQL injection: PV3000
            Rule::SqlStringConcat => "PV3000",
            Rule::SqlFString => "PV3010",

            // Input handling: PV4000
            Rule::FStringUsage => "PV4000",
            Rule::InputUsage => "PV4010",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Rule::CodeExec => "Use of a dangerous code execution builtin.",
            Rule::ShellExec => "Execution of a shell command via the os module.",
            Rule::SubprocessExec => "Process execution via the subprocess module.",
            Rule::UnsafeDeserialization => "Deserialization of untrusted data via pickle.",
            Rule::SqlStringConcat => "SQL execution with string concatenation.",
            Rule::SqlFString => "SQL execution with an f-string query.",
            Rule::FStringUsage => "Use of an f-string with interpolated values.",
            Rule::InputUsage => "Reference to the input builtin.",
        }
    }

    pub fn help(&self) -> Option<&str> {
        match self {
            Rule::CodeExec => Some(
                "`eval` and `exec` run arbitrary Python code and are a common injection vector.",
            ),
            Rule::ShellExec | Rule::SubprocessExec => {
                Some("Shell execution with unvalidated input can lead to remote code execution.")
            }
            Rule::UnsafeDeserialization => {
                Some("`pickle` can execute arbitrary code when the data is deserialized.")
            }
            Rule::SqlStringConcat | Rule::SqlFString => {
                Some("Queries built from interpolated strings are vulnerable to SQL injection.")
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AuditItem {
    pub label: String,
    pub rule: Rule,
    pub description: String,
    #[serde(serialize_with = "serialize_line")]
    pub line: OneIndexed,
    #[serde(serialize_with = "serialize_text_range")]
    pub location: TextRange,
}

fn serialize_line<S>(line: &OneIndexed, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u64(line.get() as u64)
}

fn serialize_text_range<S>(range: &TextRange, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let start: u32 = range.start().into();
    let end: u32 = range.end().into();
    (start, end).serialize(serializer)
}

/// Outcome of scanning one source: either no rule matched, or the ordered
/// findings. A separate variant rather than an empty list so that "clean"
/// can never collide with a real finding.
#[derive(Debug)]
pub enum AuditOutcome {
    Clean,
    Issues(Vec<AuditItem>),
}

impl AuditOutcome {
    pub fn from_items(items: Vec<AuditItem>) -> Self {
        if items.is_empty() {
            AuditOutcome::Clean
        } else {
            AuditOutcome::Issues(items)
        }
    }

    pub fn is_clean(&self) -> bool {
        matches!(self, AuditOutcome::Clean)
    }

    pub fn items(&self) -> &[AuditItem] {
        match self {
            AuditOutcome::Clean => &[],
            AuditOutcome::Issues(items) => items,
        }
    }
}

#[derive(Debug)]
pub struct AuditResult {
    pub outcome: AuditOutcome,
    pub path: PathBuf,
    pub source_code: String,
}

#[derive(Debug, Serialize)]
pub struct AuditItemJSON<'a> {
    pub path: String,
    pub label: &'a String,
    pub rule: &'a str,
    pub description: &'a String,
    pub line: usize,
    pub location_start: usize,
    pub location_end: usize,
}

impl<'a> AuditItemJSON<'a> {
    pub fn new(item: &'a AuditItem, path: &Path) -> Self {
        Self {
            path: path.display().to_string(),
            label: &item.label,
            rule: item.rule.code(),
            description: &item.description,
            line: item.line.get(),
            location_start: item.location.start().into(),
            location_end: item.location.end().into(),
        }
    }
}
