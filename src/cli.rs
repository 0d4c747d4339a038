use clap::{Parser, ValueEnum};
use markup::{MarkupError, ParseConfig, UnclosedTagPolicy, UnknownEntityPolicy};
use std::fmt;
use std::path::PathBuf;

/// Convert tag-string markup into attributed runs.
#[derive(Debug, Parser)]
#[command(name = "tagstring", version)]
pub struct CliArgs {
    /// Stylesheet mapping tag names to attributes (`.toml` or rule syntax)
    #[arg(long, short = 's', value_name = "FILE")]
    pub styles: Option<PathBuf>,

    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Runs)]
    pub format: OutputFormat,

    #[arg(long, value_enum, default_value_t = EntityPolicyArg::Drop)]
    pub unknown_entity: EntityPolicyArg,

    /// Fail when tags are still open at the end of input
    #[arg(long)]
    pub reject_unclosed: bool,

    /// Markup file; reads stdin when omitted
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text with markup removed
    Plain,
    /// One line per run
    Runs,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum EntityPolicyArg {
    Drop,
    Preserve,
    Reject,
}

impl CliArgs {
    pub fn parse_config(&self) -> ParseConfig {
        let unknown_entity = match self.unknown_entity {
            EntityPolicyArg::Drop => UnknownEntityPolicy::Drop,
            EntityPolicyArg::Preserve => UnknownEntityPolicy::Preserve,
            EntityPolicyArg::Reject => UnknownEntityPolicy::Reject,
        };
        let unclosed_tags = if self.reject_unclosed {
            UnclosedTagPolicy::Reject
        } else {
            UnclosedTagPolicy::Allow
        };
        ParseConfig::default()
            .with_unknown_entity(unknown_entity)
            .with_unclosed_tags(unclosed_tags)
    }
}

#[derive(Debug)]
pub enum CliError {
    Io {
        path: Option<PathBuf>,
        source: std::io::Error,
    },
    Styles {
        path: PathBuf,
        message: String,
    },
    Json(serde_json::Error),
    Markup(MarkupError),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Markup(_) => 1,
            _ => 2,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io {
                path: Some(path),
                source,
            } => write!(f, "failed to read {}: {source}", path.display()),
            CliError::Io { path: None, source } => write!(f, "failed to read stdin: {source}"),
            CliError::Styles { path, message } => {
                write!(f, "invalid styles file {}: {message}", path.display())
            }
            CliError::Json(err) => write!(f, "failed to encode JSON: {err}"),
            CliError::Markup(err) => write!(f, "markup error: {err}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io { source, .. } => Some(source),
            CliError::Json(err) => Some(err),
            CliError::Markup(err) => Some(err),
            CliError::Styles { .. } => None,
        }
    }
}

impl From<MarkupError> for CliError {
    fn from(err: MarkupError) -> Self {
        CliError::Markup(err)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Json(err)
    }
}
