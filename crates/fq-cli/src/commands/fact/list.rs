use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let facts = with_spinner("fetching facts", ctx.client.list_facts()).await?;
    output(&facts, flags.format)
}
