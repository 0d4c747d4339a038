use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod cli;
mod styles;

use clap::Parser;
use cli::{CliArgs, CliError, OutputFormat};
use markup::{MarkupParser, ParseOutcome};
use serde::Serialize;
use std::io::{self, Write};
use std::process::ExitCode;
use styled_text::{AttributeTable, StyledRun};

#[derive(Serialize)]
struct JsonReport<'a> {
    text: String,
    runs: &'a [StyledRun],
    warnings: Vec<String>,
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("tagstring: {err}");
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

fn run(args: &CliArgs) -> Result<(), CliError> {
    let table = match &args.styles {
        Some(path) => styles::load_table(path)?,
        None => AttributeTable::new(),
    };
    let input = read_input(args)?;
    let outcome = MarkupParser::new(args.parse_config()).parse(&input, &table)?;
    for warning in &outcome.warnings {
        eprintln!("warning: {warning}");
    }
    let rendered = render(&outcome, args.format)?;
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|source| CliError::Io { path: None, source })
}

fn read_input(args: &CliArgs) -> Result<String, CliError> {
    match &args.input {
        Some(path) => std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: Some(path.clone()),
            source,
        }),
        None => io::read_to_string(io::stdin()).map_err(|source| CliError::Io { path: None, source }),
    }
}

fn render(outcome: &ParseOutcome, format: OutputFormat) -> Result<String, CliError> {
    let text = &outcome.text;
    Ok(match format {
        OutputFormat::Plain => {
            let mut out = text.text();
            if !out.ends_with('\n') {
                out.push('\n');
            }
            out
        }
        OutputFormat::Runs => {
            let mut out = String::new();
            for (run, (range, attributes)) in text.iter().zip(text.ranges()) {
                if attributes.is_empty() {
                    out.push_str(&format!("{}..{} {:?}\n", range.start, range.end, run.text));
                } else {
                    out.push_str(&format!(
                        "{}..{} {:?} {attributes}\n",
                        range.start, range.end, run.text
                    ));
                }
            }
            out
        }
        OutputFormat::Json => {
            let report = JsonReport {
                text: text.text(),
                runs: text.runs(),
                warnings: outcome.warnings.iter().map(ToString::to_string).collect(),
            };
            let mut out = serde_json::to_string_pretty(&report)?;
            out.push('\n');
            out
        }
    })
}
