use anyhow::Context;
use fq_client::FactsClient;
use fq_core::entities::{AuthoringSession, NewFact};
use fq_core::responses::FactCreateResponse;
use fq_session::SessionStore;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

pub async fn run(
    title: &str,
    content: &str,
    question_count: u32,
    force: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let fact = NewFact {
        title: title.to_string(),
        content: content.to_string(),
        number_of_question: question_count,
    };

    let session = create_fact(&ctx.client, &ctx.store, &fact, force).await?;

    output(
        &FactCreateResponse {
            fact_id: session.fact_id,
            question_count: session.question_count,
            next: String::from("fq questions submit"),
        },
        flags.format,
    )
}

/// Fact entry: create the fact, then record the authoring session.
///
/// The session store is only written after the backend returned an id; any
/// failure before that leaves it as it was.
pub async fn create_fact(
    client: &FactsClient,
    store: &SessionStore,
    fact: &NewFact,
    force: bool,
) -> anyhow::Result<AuthoringSession> {
    store.ensure_idle(force)?;

    let fact_id = with_spinner("creating fact", client.create_fact(fact))
        .await
        .inspect_err(|error| tracing::error!(%error, title = %fact.title, "fact creation failed"))
        .context("fact creation failed; authoring session left unchanged")?;

    let session = AuthoringSession::new(fact_id, fact.number_of_question);
    store
        .begin(&session, force)
        .with_context(|| format!("fact {fact_id} was created but the session could not be saved"))?;

    tracing::info!(
        fact_id,
        question_count = session.question_count,
        "fact created; question builder is next"
    );
    Ok(session)
}
