use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::builder::QuestionBuilder;
use crate::entities::MAX_QUESTIONS;

/// The hand-off between fact entry and the question builder.
///
/// Written once when a fact is created and read when the builder starts.
/// The on-disk keys keep the `factId` / `numberquestion` names. Both values
/// are integers, and string-encoded integers are still accepted on read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthoringSession {
    #[serde(rename = "factId", deserialize_with = "int_or_string")]
    pub fact_id: i64,

    #[serde(rename = "numberquestion", deserialize_with = "question_count")]
    pub question_count: u32,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl AuthoringSession {
    #[must_use]
    pub fn new(fact_id: i64, question_count: u32) -> Self {
        Self {
            fact_id,
            question_count,
            created_at: Utc::now(),
        }
    }

    /// Start the question builder from a snapshot of this session.
    ///
    /// The builder copies both values; later changes to stored state do not
    /// reach it.
    #[must_use]
    pub fn builder(&self) -> QuestionBuilder {
        QuestionBuilder::new(self.fact_id, self.question_count)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Str(String),
}

fn int_or_string<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    let value = match IntOrString::deserialize(deserializer)? {
        IntOrString::Int(value) => value,
        IntOrString::Str(raw) => raw
            .trim()
            .parse::<i64>()
            .map_err(|e| D::Error::custom(format!("expected an integer, got {raw:?}: {e}")))?,
    };
    T::try_from(value).map_err(|_| D::Error::custom(format!("integer {value} is out of range")))
}

fn question_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let count: u32 = int_or_string(deserializer)?;
    if count > MAX_QUESTIONS {
        return Err(D::Error::custom(format!(
            "question count {count} exceeds the limit of {MAX_QUESTIONS}"
        )));
    }
    Ok(count)
}
