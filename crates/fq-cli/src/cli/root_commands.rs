use clap::Subcommand;

use crate::cli::subcommands::{FactCommands, QuestionsCommands, SessionCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Fact entry: create facts, list them.
    Fact {
        #[command(subcommand)]
        action: FactCommands,
    },
    /// Question builder for the fact created last.
    Questions {
        #[command(subcommand)]
        action: QuestionsCommands,
    },
    /// Inspect or reset the authoring session.
    Session {
        #[command(subcommand)]
        action: SessionCommands,
    },
}
