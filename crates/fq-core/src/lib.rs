//! # fq-core
//!
//! Core types and pure authoring logic for factquiz.
//!
//! This crate provides the foundational types shared across all factquiz crates:
//! - Wire records for facts, questions, and choices
//! - The typed authoring session handed from fact entry to the question builder
//! - The question form layout (count → ordered input descriptors)
//! - Payload assembly from a filled answer sheet
//! - The correct-choice policy
//! - Cross-cutting error types
//! - CLI response types

pub mod builder;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod form;
pub mod responses;

pub use builder::{AnswerSheet, QuestionAnswer, QuestionBuilder};
pub use errors::CoreError;
