mod fact;
mod questions;
mod session;

pub use fact::FactCommands;
pub use questions::{AnswersSyntax, QuestionsCommands};
pub use session::SessionCommands;
