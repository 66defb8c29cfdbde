use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

pub async fn run(fact_id: i64, offset: u32, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let question =
        with_spinner("fetching question", ctx.client.get_question(fact_id, offset)).await?;
    output(&question, flags.format)
}
