//! Cross-cutting error types for factquiz.
//!
//! Domain-specific errors (`SessionError`, `ClientError`, `ConfigError`) are
//! defined in their respective crates. They converge into `anyhow` in `fq-cli`.

use thiserror::Error;

/// Errors that can be raised by the pure authoring logic.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (shape, counts, format).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A question has no choice marked correct and the policy requires one.
    #[error("Question {} has no choice marked correct", .question_index + 1)]
    PolicyViolation { question_index: usize },
}
