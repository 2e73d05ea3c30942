//! Suggestions domain - related follow-up question generation

pub mod generator;

pub use generator::{similar_questions, Source};
