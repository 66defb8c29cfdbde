//! Question form layout.
//!
//! Maps a question count to the ordered input descriptors the builder stage
//! presents: one block per question, each with [`CHOICES_PER_QUESTION`]
//! choice slots. Nothing here renders; front-ends walk the descriptors.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::CHOICES_PER_QUESTION;

/// Input descriptor for one choice: a text field paired with a correctness toggle.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChoiceSlot {
    pub index: usize,
    pub label: String,
    pub text_field: String,
    pub toggle_field: String,
}

/// Input descriptor for one question block.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QuestionBlock {
    pub index: usize,
    pub label: String,
    pub field: String,
    pub choices: Vec<ChoiceSlot>,
}

/// Lay out `count` question blocks in index order.
#[must_use]
pub fn layout(count: u32) -> Vec<QuestionBlock> {
    (0..count as usize).map(question_block).collect()
}

fn question_block(index: usize) -> QuestionBlock {
    QuestionBlock {
        index,
        label: format!("Question {}", index + 1),
        field: format!("question-{index}"),
        choices: (0..CHOICES_PER_QUESTION)
            .map(|choice| ChoiceSlot {
                index: choice,
                label: format!("Choice {}", choice + 1),
                text_field: format!("choice-{index}-{choice}"),
                toggle_field: format!("correct-{index}-{choice}"),
            })
            .collect(),
    }
}
