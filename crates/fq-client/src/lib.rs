//! # fq-client
//!
//! HTTP client for the factquiz backend.
//!
//! Covers the `/fact` routes under the configured prefix:
//! - `POST /fact/create`: create a fact, returns its identifier
//! - `POST /fact/createQuestions`: submit all questions of a fact in one request
//! - `GET /fact/getFact`: list facts
//! - `GET /fact/GetQuestion`: fetch a question by fact id and offset
//!
//! Every call is a single awaited request with no retries. Failures come back
//! as [`ClientError`].

mod error;
mod http;

pub use error::ClientError;

use std::time::Duration;

use fq_config::ApiConfig;
use fq_core::entities::{Fact, FactCreated, NewFact, Question};

use crate::http::{check_response, read_json};

/// HTTP client for the fact/question endpoints.
#[derive(Debug, Clone)]
pub struct FactsClient {
    http: reqwest::Client,
    root: String,
}

impl FactsClient {
    /// Build a client from the `[api]` config section.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            root: config.endpoint_root(),
        })
    }

    /// Base of every endpoint URL (base URL plus prefix).
    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    fn url(&self, route: &str) -> String {
        format!("{}/fact/{route}", self.root)
    }

    /// Create a fact and return the identifier the backend assigned.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, a non-success status,
    /// a non-JSON body, or a body without `id`/`Id`.
    pub async fn create_fact(&self, fact: &NewFact) -> Result<i64, ClientError> {
        let url = self.url("create");
        tracing::debug!(%url, title = %fact.title, count = fact.number_of_question, "creating fact");

        let resp = check_response(self.http.post(&url).json(fact).send().await?).await?;
        let body: serde_json::Value = read_json(resp).await?;
        let created: FactCreated = serde_json::from_value(body.clone())
            .map_err(|e| ClientError::Parse(format!("{e}: {body}")))?;

        created
            .id
            .ok_or_else(|| ClientError::MissingId(body.to_string()))
    }

    /// Submit every question of a fact in one request.
    ///
    /// The response body is not interpreted; it is returned as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, a non-success status,
    /// or a non-JSON body.
    pub async fn create_questions(
        &self,
        questions: &[Question],
    ) -> Result<serde_json::Value, ClientError> {
        let url = self.url("createQuestions");
        tracing::debug!(%url, count = questions.len(), "submitting questions");

        let resp = check_response(self.http.post(&url).json(questions).send().await?).await?;
        read_json(resp).await
    }

    /// List facts.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body is not a
    /// list of facts.
    pub async fn list_facts(&self) -> Result<Vec<Fact>, ClientError> {
        let url = self.url("getFact");
        tracing::debug!(%url, "listing facts");

        let resp = check_response(self.http.get(&url).send().await?).await?;
        let facts: Option<Vec<Fact>> = read_json(resp).await?;
        Ok(facts.unwrap_or_default())
    }

    /// Fetch the question at `offset` for fact `fact_id`.
    ///
    /// The backend's response shape for this route is loose, so the body is
    /// returned as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, a non-success status,
    /// or a non-JSON body.
    pub async fn get_question(
        &self,
        fact_id: i64,
        offset: u32,
    ) -> Result<serde_json::Value, ClientError> {
        let url = format!("{}?id={fact_id}&offset={offset}", self.url("GetQuestion"));
        tracing::debug!(%url, "fetching question");

        let resp = check_response(self.http.get(&url).send().await?).await?;
        read_json(resp).await
    }
}
