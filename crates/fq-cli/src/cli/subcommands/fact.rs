use clap::Subcommand;
use fq_core::entities::MAX_QUESTIONS;

/// Fact entry commands.
#[derive(Clone, Debug, Subcommand)]
pub enum FactCommands {
    /// Create a fact and start an authoring session for its questions.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
        /// Number of questions to author for this fact.
        #[arg(long, value_parser = clap::value_parser!(u32).range(..=i64::from(MAX_QUESTIONS)))]
        questions: u32,
        /// Abandon a pending authoring session.
        #[arg(long)]
        force: bool,
    },
    /// List facts stored on the backend.
    List,
}
