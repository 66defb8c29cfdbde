pub mod create;
pub mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::FactCommands;
use crate::context::AppContext;

/// Handle `fq fact`.
pub async fn handle(action: &FactCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        FactCommands::Create {
            title,
            content,
            questions,
            force,
        } => create::run(title, content, *questions, *force, ctx, flags).await,
        FactCommands::List => list::run(ctx, flags).await,
    }
}
