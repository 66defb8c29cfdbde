pub mod answers;
pub mod form;
pub mod get;
pub mod submit;
pub mod template;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::QuestionsCommands;
use crate::context::AppContext;

/// Handle `fq questions`.
pub async fn handle(
    action: &QuestionsCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        QuestionsCommands::Form => form::run(ctx, flags),
        QuestionsCommands::Template { syntax } => template::run(*syntax, ctx),
        QuestionsCommands::Submit { answers, dry_run } => {
            submit::run(answers.as_deref(), *dry_run, ctx, flags).await
        }
        QuestionsCommands::Get { fact_id, offset } => get::run(*fact_id, *offset, ctx, flags).await,
    }
}
