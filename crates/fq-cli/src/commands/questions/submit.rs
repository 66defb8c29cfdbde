use std::io;
use std::path::Path;

use anyhow::Context;
use fq_client::FactsClient;
use fq_core::enums::CorrectChoicePolicy;
use fq_core::responses::{QuestionsPreviewResponse, QuestionsSubmitResponse};
use fq_core::{AnswerSheet, QuestionBuilder};
use fq_session::SessionStore;

use crate::cli::GlobalFlags;
use crate::commands::questions::answers::{load_answers, prompt_answers};
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

#[derive(Debug)]
pub enum SubmitOutcome {
    Preview(QuestionsPreviewResponse),
    Submitted(QuestionsSubmitResponse),
}

pub async fn run(
    answers: Option<&Path>,
    dry_run: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    // Snapshot before filling: the payload uses these values even if the
    // stored session changes while answers are being entered.
    let builder = ctx.store.load()?.builder();

    let sheet = match answers {
        Some(path) => load_answers(path)?,
        None => prompt_answers(&builder, &mut io::stdin().lock(), &mut io::stderr())?,
    };

    let outcome = submit(
        &ctx.client,
        &ctx.store,
        &builder,
        &sheet,
        ctx.config.policy.correct_choice,
        dry_run,
    )
    .await?;

    match outcome {
        SubmitOutcome::Preview(preview) => output(&preview, flags.format),
        SubmitOutcome::Submitted(response) => output(&response, flags.format),
    }
}

/// Question builder submission.
///
/// Assembles the payload, applies the correct-choice policy, and sends every
/// question in one request. The session is cleared only after the backend
/// accepted the questions.
pub async fn submit(
    client: &FactsClient,
    store: &SessionStore,
    builder: &QuestionBuilder,
    sheet: &AnswerSheet,
    policy: CorrectChoicePolicy,
    dry_run: bool,
) -> anyhow::Result<SubmitOutcome> {
    let fact_id = builder.fact_id();
    let payload = builder.assemble(sheet)?;
    let without_correct_choice = policy.apply(&payload)?;
    for index in &without_correct_choice {
        tracing::warn!(fact_id, question = index + 1, "no choice marked correct");
    }

    if dry_run {
        return Ok(SubmitOutcome::Preview(QuestionsPreviewResponse {
            fact_id,
            without_correct_choice,
            payload,
        }));
    }

    let server = with_spinner("submitting questions", client.create_questions(&payload))
        .await
        .inspect_err(|error| tracing::error!(%error, fact_id, "question submission failed"))
        .context("question submission failed; authoring session kept for a retry")?;

    if let Err(error) = store.clear_if(fact_id) {
        tracing::warn!(%error, "questions submitted but the session could not be cleared");
    }
    tracing::info!(fact_id, count = payload.len(), "questions submitted; back to fact entry");

    Ok(SubmitOutcome::Submitted(QuestionsSubmitResponse {
        fact_id,
        submitted: payload.len(),
        without_correct_choice,
        server,
        next: String::from("fq fact create"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fact::create::create_fact;
    use crate::test_support::{MockBackend, client_for};
    use fq_core::QuestionAnswer;
    use fq_core::entities::{AuthoringSession, Choice, NewFact, Question};
    use pretty_assertions::assert_eq;

    fn answer(text: &str, correct: Option<usize>) -> QuestionAnswer {
        QuestionAnswer {
            question: text.into(),
            choices: (0..3)
                .map(|j| Choice {
                    content: format!("{text} choice {j}"),
                    is_true: correct == Some(j),
                })
                .collect(),
        }
    }

    fn temp_store() -> (tempfile::TempDir, SessionStore) {
        let tmp = tempfile::TempDir::new().unwrap();
        let store = SessionStore::new(tmp.path().join("session.json"));
        (tmp, store)
    }

    #[tokio::test]
    async fn capitals_end_to_end() {
        let backend = MockBackend::start(vec![
            (201, r#"{"Id": 7}"#),
            (201, r#"{"message": "successfully created"}"#),
        ]);
        let client = client_for(&backend);
        let (_tmp, store) = temp_store();

        let fact = NewFact {
            title: "Capitals".into(),
            content: "Geo quiz".into(),
            number_of_question: 2,
        };
        create_fact(&client, &store, &fact, false).await.unwrap();

        let stored: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(stored["factId"], 7);
        assert_eq!(stored["numberquestion"], 2);

        let builder = store.load().unwrap().builder();
        assert_eq!(builder.blocks().len(), 2);
        assert!(builder.blocks().iter().all(|b| b.choices.len() == 3));

        let sheet = AnswerSheet {
            questions: vec![answer("Q0", Some(2)), answer("Q1", Some(0))],
        };
        let outcome = submit(
            &client,
            &store,
            &builder,
            &sheet,
            CorrectChoicePolicy::Warn,
            false,
        )
        .await
        .unwrap();
        let SubmitOutcome::Submitted(response) = outcome else {
            panic!("expected a submission");
        };
        assert_eq!(response.submitted, 2);
        assert!(response.without_correct_choice.is_empty());

        let requests = backend.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1].method, "POST");
        assert_eq!(requests[1].url, "/api/v1/fact/createQuestions");
        let sent: Vec<Question> = serde_json::from_str(&requests[1].body).unwrap();
        let flags: Vec<Vec<bool>> = sent
            .iter()
            .map(|q| q.choices.iter().map(|c| c.is_true).collect())
            .collect();
        assert!(sent.iter().all(|q| q.fact_id == 7));
        assert_eq!(sent[0].question, "Q0");
        assert_eq!(flags, vec![vec![false, false, true], vec![true, false, false]]);

        assert!(store.peek().unwrap().is_none(), "session cleared after submit");
    }

    #[tokio::test]
    async fn payload_uses_snapshot_fact_id() {
        let backend = MockBackend::start(vec![(201, "{}")]);
        let (_tmp, store) = temp_store();
        store.store(&AuthoringSession::new(7, 1)).unwrap();

        let builder = store.load().unwrap().builder();
        store.store(&AuthoringSession::new(99, 5)).unwrap();

        let sheet = AnswerSheet {
            questions: vec![answer("Q", Some(1))],
        };
        submit(
            &client_for(&backend),
            &store,
            &builder,
            &sheet,
            CorrectChoicePolicy::Off,
            false,
        )
        .await
        .unwrap();

        let sent: Vec<Question> = serde_json::from_str(&backend.requests()[0].body).unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].fact_id, 7);
        assert_eq!(store.load().unwrap().fact_id, 99, "newer session kept");
    }

    #[tokio::test]
    async fn failed_submit_keeps_session() {
        let backend = MockBackend::start(vec![(400, r#"{"error": "bad"}"#)]);
        let (_tmp, store) = temp_store();
        store.store(&AuthoringSession::new(7, 1)).unwrap();
        let builder = store.load().unwrap().builder();

        let sheet = AnswerSheet {
            questions: vec![answer("Q", Some(0))],
        };
        let err = submit(
            &client_for(&backend),
            &store,
            &builder,
            &sheet,
            CorrectChoicePolicy::Warn,
            false,
        )
        .await
        .unwrap_err();

        assert!(err.to_string().contains("kept for a retry"));
        assert_eq!(store.load().unwrap().fact_id, 7);
    }

    #[tokio::test]
    async fn require_policy_blocks_before_sending() {
        let backend = MockBackend::start(Vec::new());
        let (_tmp, store) = temp_store();
        let builder = QuestionBuilder::new(7, 2);
        let sheet = AnswerSheet {
            questions: vec![answer("Q0", Some(0)), answer("Q1", None)],
        };

        let err = submit(
            &client_for(&backend),
            &store,
            &builder,
            &sheet,
            CorrectChoicePolicy::Require,
            false,
        )
        .await
        .unwrap_err();

        assert!(err.to_string().contains("Question 2"));
        assert_eq!(backend.request_count(), 0);
    }

    #[tokio::test]
    async fn dry_run_reports_without_sending() {
        let backend = MockBackend::start(Vec::new());
        let (_tmp, store) = temp_store();
        store.store(&AuthoringSession::new(7, 2)).unwrap();
        let builder = store.load().unwrap().builder();
        let sheet = AnswerSheet {
            questions: vec![answer("Q0", None), answer("Q1", Some(2))],
        };

        let outcome = submit(
            &client_for(&backend),
            &store,
            &builder,
            &sheet,
            CorrectChoicePolicy::Warn,
            true,
        )
        .await
        .unwrap();

        let SubmitOutcome::Preview(preview) = outcome else {
            panic!("expected a preview");
        };
        assert_eq!(preview.payload.len(), 2);
        assert_eq!(preview.without_correct_choice, vec![0]);
        assert_eq!(backend.request_count(), 0);
        assert!(store.peek().unwrap().is_some(), "dry run keeps the session");
    }
}
