//! # fq-session
//!
//! Persistence for the [`AuthoringSession`](fq_core::entities::AuthoringSession)
//! that fact entry hands to the question builder.
//!
//! The session lives in a single JSON file (default
//! `<data_dir>/factquiz/session.json`). Fact entry writes it once, the builder
//! reads it on entry and clears it after a successful submission.

pub mod error;
pub mod store;

pub use error::SessionError;
pub use store::SessionStore;
