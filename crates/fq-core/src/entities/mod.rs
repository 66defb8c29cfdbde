//! Entity structs for all factquiz domain objects.
//!
//! Wire records mirror the JSON bodies of the `/api/v1/fact` endpoints. All of
//! them derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip
//! and schema validation.

mod fact;
mod question;
mod session;

pub use fact::{Fact, FactCreated, NewFact};
pub use question::{CHOICES_PER_QUESTION, Choice, MAX_QUESTIONS, Question};
pub use session::AuthoringSession;
