use fq_core::responses::SessionResponse;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SessionCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `fq session`.
pub fn handle(action: &SessionCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let path = ctx.store.path().display().to_string();
    match action {
        SessionCommands::Show => {
            let session = ctx.store.peek()?;
            output(&SessionResponse { path, session }, flags.format)
        }
        SessionCommands::Clear => {
            let session = ctx.store.peek().ok().flatten();
            if ctx.store.clear()? {
                tracing::info!(path = %path, "authoring session cleared");
            }
            output(&SessionResponse { path, session }, flags.format)
        }
    }
}
