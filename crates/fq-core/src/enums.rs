//! Policy enums for factquiz.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entities::Question;
use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// CorrectChoicePolicy
// ---------------------------------------------------------------------------

/// What to do with a question whose choices are all marked incorrect.
///
/// The backend accepts such questions, so `off` reproduces the unchecked
/// authoring flow. `warn` reports them and still submits. `require` refuses to
/// submit.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum CorrectChoicePolicy {
    Off,
    #[default]
    Warn,
    Require,
}

impl CorrectChoicePolicy {
    /// Return the string representation used in config files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Warn => "warn",
            Self::Require => "require",
        }
    }

    /// Apply the policy to an assembled payload.
    ///
    /// Returns the indices of questions without a correct choice so the caller
    /// can report them. Under `off` nothing is inspected and the list is empty.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::PolicyViolation`] for the first offending question
    /// when the policy is `require`.
    pub fn apply(self, questions: &[Question]) -> Result<Vec<usize>, CoreError> {
        if self == Self::Off {
            return Ok(Vec::new());
        }

        let missing: Vec<usize> = questions
            .iter()
            .enumerate()
            .filter(|(_, question)| !question.has_correct_choice())
            .map(|(index, _)| index)
            .collect();

        match (self, missing.first()) {
            (Self::Require, Some(&question_index)) => {
                Err(CoreError::PolicyViolation { question_index })
            }
            _ => Ok(missing),
        }
    }
}

impl fmt::Display for CorrectChoicePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Choice;

    fn question(flags: [bool; 3]) -> Question {
        Question {
            id: None,
            fact_id: 1,
            question: "q".into(),
            choices: flags
                .iter()
                .map(|&is_true| Choice {
                    content: "c".into(),
                    is_true,
                })
                .collect(),
        }
    }

    #[test]
    fn default_is_warn() {
        assert_eq!(CorrectChoicePolicy::default(), CorrectChoicePolicy::Warn);
    }

    #[test]
    fn serializes_snake_case() {
        let json = serde_json::to_string(&CorrectChoicePolicy::Require).unwrap();
        assert_eq!(json, "\"require\"");
        let back: CorrectChoicePolicy = serde_json::from_str("\"off\"").unwrap();
        assert_eq!(back, CorrectChoicePolicy::Off);
    }

    #[test]
    fn off_never_inspects() {
        let questions = vec![question([false, false, false])];
        assert!(CorrectChoicePolicy::Off.apply(&questions).unwrap().is_empty());
    }

    #[test]
    fn warn_reports_indices() {
        let questions = vec![
            question([false, true, false]),
            question([false, false, false]),
            question([false, false, false]),
        ];
        let missing = CorrectChoicePolicy::Warn.apply(&questions).unwrap();
        assert_eq!(missing, vec![1, 2]);
    }

    #[test]
    fn require_rejects_first_offender() {
        let questions = vec![question([true, false, false]), question([false, false, false])];
        let err = CorrectChoicePolicy::Require.apply(&questions).unwrap_err();
        assert!(matches!(err, CoreError::PolicyViolation { question_index: 1 }));
        assert_eq!(err.to_string(), "Question 2 has no choice marked correct");
    }

    #[test]
    fn require_accepts_multiple_correct() {
        let questions = vec![question([true, true, false])];
        assert!(CorrectChoicePolicy::Require.apply(&questions).unwrap().is_empty());
    }
}
