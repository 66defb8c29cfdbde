use clap::Subcommand;

/// Authoring session commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SessionCommands {
    /// Print the pending session, if any.
    Show,
    /// Delete the pending session.
    Clear,
}
