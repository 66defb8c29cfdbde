//! CLI response types returned as JSON by `fq` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{AuthoringSession, Question};

/// Response from `fq fact create`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FactCreateResponse {
    pub fact_id: i64,
    pub question_count: u32,
    pub next: String,
}

/// Response from `fq questions submit`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct QuestionsSubmitResponse {
    pub fact_id: i64,
    pub submitted: usize,
    pub without_correct_choice: Vec<usize>,
    pub server: serde_json::Value,
    pub next: String,
}

/// Response from `fq questions submit --dry-run`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QuestionsPreviewResponse {
    pub fact_id: i64,
    pub without_correct_choice: Vec<usize>,
    pub payload: Vec<Question>,
}

/// Response from `fq session show` / `fq session clear`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionResponse {
    pub path: String,
    pub session: Option<AuthoringSession>,
}
