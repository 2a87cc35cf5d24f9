use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the annot binary.
#[derive(Parser, Debug)]
#[command(
    name = "annot",
    version,
    about = "Resolve the inherited method annotations of a class"
)]
pub struct CliArgs {
    /// Class manifest files, or directories searched for `*.json` manifests.
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Class to resolve.
    #[arg(short = 'c', long = "class")]
    pub class: String,

    /// Only resolve methods whose name contains this text (case-sensitive).
    #[arg(short = 'f', long)]
    pub filter: Option<String>,

    /// Print a single method instead of the whole class.
    #[arg(short = 'm', long)]
    pub method: Option<String>,

    /// Output format.
    #[arg(long, value_enum, ignore_case = true, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long)]
    pub pretty: bool,

    /// Disable colored text output.
    #[arg(long = "no-color", alias = "noColor")]
    pub no_color: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
