use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};

/// Question builder commands.
#[derive(Clone, Debug, Subcommand)]
pub enum QuestionsCommands {
    /// Show the question blocks to fill in.
    Form,
    /// Print a blank answers file for the current session.
    Template {
        #[arg(long, default_value = "toml")]
        syntax: AnswersSyntax,
    },
    /// Assemble the answers and submit every question in one request.
    Submit {
        /// Answers file (.toml or .json). Prompts on stdin when omitted.
        #[arg(long)]
        answers: Option<PathBuf>,
        /// Print the payload instead of sending it.
        #[arg(long)]
        dry_run: bool,
    },
    /// Fetch a stored question.
    Get {
        #[arg(long)]
        fact_id: i64,
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },
}

/// File syntax of an answers file.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum AnswersSyntax {
    Toml,
    Json,
}
