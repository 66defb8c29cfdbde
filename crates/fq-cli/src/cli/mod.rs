use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat, ProgressMode};
pub use root_commands::Commands;

/// Top-level CLI parser for the `fq` binary.
#[derive(Debug, Parser)]
#[command(
    name = "fq",
    version,
    about = "factquiz - author facts and their multiple-choice questions"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Spinner while requests are in flight: auto, on, off
    #[arg(long, global = true, default_value = "auto")]
    pub progress: ProgressMode,

    /// Backend base URL (overrides api.base_url)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Authoring session file (overrides session.path)
    #[arg(long, global = true)]
    pub session_file: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            progress: self.progress,
            base_url: self.base_url.clone(),
            session_file: self.session_file.clone(),
        }
    }
}
