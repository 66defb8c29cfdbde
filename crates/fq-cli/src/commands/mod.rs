pub mod dispatch;
pub mod fact;
pub mod questions;
pub mod session;
