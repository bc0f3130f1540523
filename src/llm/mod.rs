//! Concrete text-generation backends.
//!
//! The orchestrator only ever sees the [`TextGenerator`](crate::ports::TextGenerator)
//! port; the implementations here are injected at construction.

pub mod openai;

pub use openai::OpenAiGenerator;
