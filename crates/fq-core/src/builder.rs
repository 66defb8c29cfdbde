//! Question builder: snapshot of the authoring session plus payload assembly.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{CHOICES_PER_QUESTION, Choice, Question};
use crate::errors::CoreError;
use crate::form::{self, QuestionBlock};

/// What the author typed into one question block.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QuestionAnswer {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub choices: Vec<Choice>,
}

/// Filled form for every block, in block order.
///
/// This is also the on-disk shape of an answers file (JSON or TOML).
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AnswerSheet {
    #[serde(default)]
    pub questions: Vec<QuestionAnswer>,
}

/// The builder stage of one authoring session.
///
/// Holds its own copy of the fact identifier and the laid-out blocks, so the
/// payload it assembles is fixed at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBuilder {
    fact_id: i64,
    blocks: Vec<QuestionBlock>,
}

impl QuestionBuilder {
    #[must_use]
    pub fn new(fact_id: i64, question_count: u32) -> Self {
        Self {
            fact_id,
            blocks: form::layout(question_count),
        }
    }

    #[must_use]
    pub const fn fact_id(&self) -> i64 {
        self.fact_id
    }

    #[must_use]
    pub fn blocks(&self) -> &[QuestionBlock] {
        &self.blocks
    }

    /// A blank answer sheet shaped like the layout.
    #[must_use]
    pub fn template(&self) -> AnswerSheet {
        AnswerSheet {
            questions: self
                .blocks
                .iter()
                .map(|block| QuestionAnswer {
                    question: String::new(),
                    choices: vec![Choice::default(); block.choices.len()],
                })
                .collect(),
        }
    }

    /// Assemble the submission payload from a filled sheet.
    ///
    /// Questions come out in block order, each stamped with the snapshot
    /// `fact_id` and carrying its choices in slot order.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when the sheet does not have exactly
    /// one entry per block, or an entry does not have exactly
    /// [`CHOICES_PER_QUESTION`] choices.
    pub fn assemble(&self, sheet: &AnswerSheet) -> Result<Vec<Question>, CoreError> {
        if sheet.questions.len() != self.blocks.len() {
            return Err(CoreError::Validation(format!(
                "expected {} questions, got {}",
                self.blocks.len(),
                sheet.questions.len()
            )));
        }

        self.blocks
            .iter()
            .zip(&sheet.questions)
            .map(|(block, answer)| {
                if answer.choices.len() != CHOICES_PER_QUESTION {
                    return Err(CoreError::Validation(format!(
                        "{} needs {CHOICES_PER_QUESTION} choices, got {}",
                        block.label,
                        answer.choices.len()
                    )));
                }
                Ok(Question {
                    id: None,
                    fact_id: self.fact_id,
                    question: answer.question.clone(),
                    choices: answer.choices.clone(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn answer(text: &str, correct: Option<usize>) -> QuestionAnswer {
        QuestionAnswer {
            question: text.into(),
            choices: (0..CHOICES_PER_QUESTION)
                .map(|j| Choice {
                    content: format!("{text}-{j}"),
                    is_true: correct == Some(j),
                })
                .collect(),
        }
    }

    #[test]
    fn template_matches_layout() {
        let builder = QuestionBuilder::new(1, 3);
        let sheet = builder.template();
        assert_eq!(sheet.questions.len(), 3);
        assert!(sheet.questions.iter().all(|q| q.choices.len() == 3));
        assert!(sheet.questions.iter().flat_map(|q| &q.choices).all(|c| !c.is_true));
    }

    #[test]
    fn zero_questions_assemble_to_empty_payload() {
        let builder = QuestionBuilder::new(1, 0);
        let payload = builder.assemble(&AnswerSheet::default()).unwrap();
        assert!(payload.is_empty());
    }

    #[test]
    fn assembles_one_question_per_block_with_snapshot_fact_id() {
        let builder = QuestionBuilder::new(42, 3);
        let sheet = AnswerSheet {
            questions: vec![answer("a", None), answer("b", Some(1)), answer("c", Some(0))],
        };
        let payload = builder.assemble(&sheet).unwrap();
        assert_eq!(payload.len(), 3);
        assert!(payload.iter().all(|q| q.fact_id == 42 && q.choices.len() == 3));
        assert_eq!(payload[1].question, "b");
    }

    #[test]
    fn toggles_map_by_index() {
        let builder = QuestionBuilder::new(5, 2);
        let mut sheet = builder.template();
        sheet.questions[0].choices[1].is_true = true;
        sheet.questions[1].choices[0].is_true = true;
        sheet.questions[1].choices[2].is_true = true;

        let payload = builder.assemble(&sheet).unwrap();
        let flags: Vec<Vec<bool>> = payload
            .iter()
            .map(|q| q.choices.iter().map(|c| c.is_true).collect())
            .collect();
        assert_eq!(flags, vec![vec![false, true, false], vec![true, false, true]]);
    }

    #[test]
    fn capitals_scenario_payload() {
        let builder = QuestionBuilder::new(7, 2);
        let sheet = AnswerSheet {
            questions: vec![answer("Q0", Some(2)), answer("Q1", Some(0))],
        };
        let payload = serde_json::to_value(builder.assemble(&sheet).unwrap()).unwrap();
        assert_eq!(
            payload,
            serde_json::json!([
                {
                    "fact_id": 7,
                    "question": "Q0",
                    "choices": [
                        { "content": "Q0-0", "is_true": false },
                        { "content": "Q0-1", "is_true": false },
                        { "content": "Q0-2", "is_true": true }
                    ]
                },
                {
                    "fact_id": 7,
                    "question": "Q1",
                    "choices": [
                        { "content": "Q1-0", "is_true": true },
                        { "content": "Q1-1", "is_true": false },
                        { "content": "Q1-2", "is_true": false }
                    ]
                }
            ])
        );
    }

    #[test]
    fn rejects_wrong_question_count() {
        let builder = QuestionBuilder::new(1, 2);
        let sheet = AnswerSheet {
            questions: vec![answer("only", None)],
        };
        let err = builder.assemble(&sheet).unwrap_err();
        assert_eq!(err.to_string(), "Validation error: expected 2 questions, got 1");
    }

    #[test]
    fn rejects_wrong_choice_count() {
        let builder = QuestionBuilder::new(1, 1);
        let mut sheet = builder.template();
        sheet.questions[0].choices.pop();
        let err = builder.assemble(&sheet).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: Question 1 needs 3 choices, got 2"
        );
    }
}
