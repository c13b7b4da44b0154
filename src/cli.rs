use crate::audit::annotate::annotate_result;
use crate::audit::parse::{audit_path, audit_source};
use crate::audit::result::{AuditItem, AuditItemJSON, AuditOutcome, AuditResult, Rule};
use crate::io::read_interactive_source;
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use log::{error, info};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Instant;

#[derive(Clone, Debug)]
enum OutputFormat {
    Terminal,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" => Ok(OutputFormat::Terminal),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid output format: {}", s)),
        }
    }
}

#[derive(Parser)]
#[command(name = "pyvet")]
#[command(about = "Pyvet Command Line Interface", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(
        long,
        default_value = "error",
        help = "Logging level (trace, debug, info, warn, error)",
        global = true
    )]
    logging_level: String,
}

#[derive(Args, Clone, Debug)]
struct AuditOptions {
    #[arg(
        help = "Input path to a file or directory containing Python files. \
            Reads source code interactively when omitted.",
        index = 1
    )]
    input_path: Option<PathBuf>,

    #[arg(
        long,
        help = "Output path for results. If not specified, results will be printed to stdout."
    )]
    output_path: Option<PathBuf>,

    #[arg(
        long,
        help = "Output format: terminal | json ",
        default_value = "terminal"
    )]
    output_format: OutputFormat,

    #[arg(
        long = "annotate",
        help = "Include source code annotations after each finding (terminal format only)."
    )]
    output_annotations: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Audit a file, a directory, or interactively entered source code.
    Audit {
        #[command(flatten)]
        opts: AuditOptions,
    },

    /// List all available rules and their descriptions.
    Rules,
}

#[allow(clippy::format_in_format_args)]
fn print_rules_markdown() {
    println!("| Code | Name | Description |");
    println!("|---|---|---|");
    for rule in Rule::iter() {
        println!(
            "| {} | {} | {} |",
            rule.code(),
            format!("{:?}", rule),
            rule.description()
        );
    }
}

fn write_annotations(
    file_out: &mut dyn Write,
    item: &AuditItem,
    path: &Path,
    source_code: &str,
    colored: bool,
) {
    match annotate_result(item, path, source_code, colored) {
        Ok(annotation) => {
            writeln!(file_out, "{}", annotation)
                .unwrap_or_else(|e| error!("Failed to write annotation: {:?}", e));
        }
        Err(e) => {
            error!("Failed to annotate result: {}", e);
        }
    }
}

fn write_json(file_out: &mut dyn Write, item: &AuditItem, path: &Path) {
    let item = AuditItemJSON::new(item, path);
    match serde_json::to_string(&item) {
        Ok(json) => {
            writeln!(file_out, "{}", json)
                .unwrap_or_else(|e| error!("Failed to write json: {:?}", e));
        }
        Err(e) => {
            error!("Failed to serialize result to json: {:?}", e);
        }
    }
}

struct AuditOutput {
    writer: Box<dyn Write>,
    format: OutputFormat,
    annotate: bool,
    colored: bool,
}

impl AuditOutput {
    fn new(opts: &AuditOptions) -> Result<Self, std::io::Error> {
        let writer: Box<dyn Write> = if let Some(path) = &opts.output_path {
            Box::new(std::fs::File::create(path)?)
        } else {
            Box::new(std::io::stdout())
        };

        Ok(Self {
            writer,
            format: opts.output_format.clone(),
            annotate: opts.output_annotations,
            colored: opts.output_path.is_none(),
        })
    }

    /// Renders one audit result. `display_path` is absent in interactive
    /// mode, where the report keeps its bare header.
    fn write_result(&mut self, result: &AuditResult, display_path: Option<&Path>) {
        match self.format {
            OutputFormat::Terminal => self.write_report(result, display_path),
            OutputFormat::Json => {
                for item in result.outcome.items() {
                    write_json(&mut *self.writer, item, &result.path);
                }
            }
        }
    }

    fn write_report(&mut self, result: &AuditResult, display_path: Option<&Path>) {
        let out = &mut *self.writer;
        match &result.outcome {
            AuditOutcome::Clean => {
                let written = match display_path {
                    Some(path) => writeln!(out, "{}: Your code is safe!", path.display()),
                    None => writeln!(out, "Your code is safe!"),
                };
                written.unwrap_or_else(|e| error!("Failed to write report: {:?}", e));
            }
            AuditOutcome::Issues(items) => {
                let written = match display_path {
                    Some(path) => {
                        writeln!(out, "Vulnerability Analysis Report: {}", path.display())
                    }
                    None => writeln!(out, "Vulnerability Analysis Report:"),
                };
                written.unwrap_or_else(|e| error!("Failed to write report: {:?}", e));
                for item in items {
                    writeln!(out, "[Line {}] {}", item.line, item.description)
                        .unwrap_or_else(|e| error!("Failed to write report: {:?}", e));
                    if self.annotate {
                        write_annotations(
                            out,
                            item,
                            &result.path,
                            &result.source_code,
                            self.colored,
                        );
                    }
                }
            }
        }
    }
}

fn audit_python_files(opts: &AuditOptions) {
    let mut output = match AuditOutput::new(opts) {
        Ok(output) => output,
        Err(e) => {
            error!("Failed to initialize output: {:?}", e);
            return;
        }
    };

    match &opts.input_path {
        Some(input_path) => match audit_path(input_path) {
            Ok(results) => {
                for result in results {
                    output.write_result(&result, Some(&result.path));
                }
            }
            Err(e) => {
                error!("Can't audit specified path: {}", e);
            }
        },
        None => {
            println!("Enter your code below. End input with an empty line:");
            let source_code = match read_interactive_source(std::io::stdin().lock()) {
                Ok(source) => source,
                Err(e) => {
                    error!("{}", e);
                    return;
                }
            };
            match audit_source(&source_code) {
                Ok(outcome) => {
                    let result = AuditResult {
                        outcome,
                        path: PathBuf::from("<stdin>"),
                        source_code,
                    };
                    output.write_result(&result, None);
                }
                Err(e) => {
                    error!("Error analyzing code: {}", e);
                }
            }
        }
    }
}

pub fn run_cli() {
    let start = Instant::now();
    let cli = Cli::parse();

    let env = Env::default().default_filter_or(cli.logging_level);
    env_logger::Builder::from_env(env).init();

    match cli.command {
        Commands::Audit { opts } => {
            audit_python_files(&opts);
        }
        Commands::Rules => {
            print_rules_markdown();
        }
    }

    let end = Instant::now();
    let duration = end.duration_since(start);
    info!("Total execution time: {duration:?}");
}
