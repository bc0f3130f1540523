//! In-memory session state: the last produced report and the follow-up
//! conversation log.
//!
//! The session lives only as long as the process. It has a single writer
//! (the component driving the user-facing loop) and is mutated in exactly
//! two ways: starting a new topic run, and appending a question/answer
//! exchange.

use crate::types::{Speaker, Turn};

/// User-facing session state.
#[derive(Debug, Default)]
pub struct Session {
    topic: Option<String>,
    last_artifact: Option<String>,
    log: Vec<Turn>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new topic. Clears the conversation log; the previous
    /// artifact is kept until a run for the new topic completes, so a
    /// failed run never clobbers it.
    pub fn begin_topic(&mut self, topic: &str) {
        self.topic = Some(topic.to_string());
        self.log.clear();
    }

    /// Record the artifact of a completed run.
    pub fn store_artifact(&mut self, artifact: String) {
        self.last_artifact = Some(artifact);
    }

    /// Append a question/answer exchange, user turn first.
    pub fn record_exchange(&mut self, question: &str, answer: &str) {
        self.log.push(Turn::new(Speaker::User, question));
        self.log.push(Turn::new(Speaker::Assistant, answer));
    }

    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref()
    }

    pub fn last_artifact(&self) -> Option<&str> {
        self.last_artifact.as_deref()
    }

    pub fn log(&self) -> &[Turn] {
        &self.log
    }
}
