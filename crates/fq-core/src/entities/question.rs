use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Number of choices rendered for every question.
pub const CHOICES_PER_QUESTION: usize = 3;

/// Upper bound on the questions a single fact can be authored with.
pub const MAX_QUESTIONS: u32 = 100;

/// One answer option of a question.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Choice {
    pub content: String,
    pub is_true: bool,
}

/// A question attached to a fact.
///
/// Outgoing questions never carry `id`; the backend fills it in on reads.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Question {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub fact_id: i64,
    pub question: String,
    pub choices: Vec<Choice>,
}

impl Question {
    /// Whether at least one choice is flagged correct.
    #[must_use]
    pub fn has_correct_choice(&self) -> bool {
        self.choices.iter().any(|choice| choice.is_true)
    }
}
