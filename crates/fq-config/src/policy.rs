//! Authoring policy configuration.

use fq_core::enums::CorrectChoicePolicy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PolicyConfig {
    /// Handling of questions with no choice marked correct.
    #[serde(default)]
    pub correct_choice: CorrectChoicePolicy,
}
