use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint, builder::BoolishValueParser};

/// Command-line arguments for the quaderno binary.
#[derive(Debug, Parser)]
#[command(
    name = "quaderno",
    version,
    about = "Render tutorial book payloads into a self-contained HTML document"
)]
pub struct CliArgs {
    /// Optional path to a configuration file.
    #[arg(
        long = "config-file",
        env = "QUADERNO_CONFIG_FILE",
        value_name = "PATH",
        value_hint = ValueHint::FilePath
    )]
    pub config_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Render a book payload into an HTML document.
    Render(RenderArgs),
    /// Show how a book payload decodes, as JSON.
    Inspect(InspectArgs),
}

#[derive(Debug, Args, Clone)]
pub struct RenderArgs {
    /// Subject of the book, used for the fallback title and the landing tagline.
    #[arg(long, value_name = "TOPIC")]
    pub topic: String,

    /// File holding the book payload (structured JSON or numbered-heading markdown).
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub book: PathBuf,

    /// Optional markdown file appended as the curated resource guide.
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub resources: Option<PathBuf>,

    /// Optional markdown file with supplementary assessments.
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub assessments: Option<PathBuf>,

    /// Write the document here instead of stdout.
    #[arg(long, short = 'o', value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: RenderOverrides,
}

#[derive(Debug, Args, Clone)]
pub struct InspectArgs {
    /// File holding the book payload.
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub book: PathBuf,

    #[command(flatten)]
    pub logging: LoggingOverrides,
}

#[derive(Debug, Args, Default, Clone)]
pub struct RenderOverrides {
    /// Override the markdown engine (comrak|plain).
    #[arg(long = "markdown-engine", value_name = "ENGINE")]
    pub markdown_engine: Option<String>,

    /// Override the footer credit line.
    #[arg(long = "footer-credit", value_name = "TEXT")]
    pub footer_credit: Option<String>,

    #[command(flatten)]
    pub logging: LoggingOverrides,
}

#[derive(Debug, Args, Default, Clone)]
pub struct LoggingOverrides {
    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new()
    )]
    pub log_json: Option<bool>,
}
