//! Mock capability implementations shared across integration tests.
//!
//! These stand in for the network-backed ports so orchestration behavior
//! can be tested deterministically.

#![allow(dead_code)]

use async_trait::async_trait;
use newsroom::crew::Agent;
use newsroom::ports::{TextGenerator, WebSearch};
use newsroom::types::{CrewError, Result};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Echoes the full prompt back as the generated text, which makes context
/// threading directly observable: output equals input at every step.
#[derive(Default)]
pub struct EchoGenerator {
    calls: AtomicUsize,
}

impl EchoGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for EchoGenerator {
    async fn generate(&self, _agent: &Agent, prompt: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(prompt.to_string())
    }
}

/// Returns canned outputs in order, optionally failing at a given call
/// index. Counts invocations so tests can assert that later tasks never
/// reached the capability.
pub struct ScriptedGenerator {
    outputs: Vec<String>,
    fail_at: Option<usize>,
    calls: AtomicUsize,
}

impl ScriptedGenerator {
    pub fn new(outputs: Vec<&str>) -> Self {
        Self {
            outputs: outputs.into_iter().map(String::from).collect(),
            fail_at: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Fail the `index`-th generate call (0-based) with a generation error.
    pub fn failing_at(index: usize, outputs: Vec<&str>) -> Self {
        let mut generator = Self::new(outputs);
        generator.fail_at = Some(index);
        generator
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, _agent: &Agent, _prompt: &str) -> Result<String> {
        let index = self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_at == Some(index) {
            return Err(CrewError::Generation("scripted failure".to_string()));
        }
        Ok(self
            .outputs
            .get(index)
            .cloned()
            .unwrap_or_else(|| format!("output {}", index)))
    }
}

/// A generator whose preflight reports a missing credential. Any generate
/// call is a test failure waiting to be asserted.
#[derive(Default)]
pub struct UnconfiguredGenerator {
    calls: AtomicUsize,
}

impl UnconfiguredGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for UnconfiguredGenerator {
    fn preflight(&self) -> Result<()> {
        Err(CrewError::Precondition(
            "OPENAI_API_KEY is not set".to_string(),
        ))
    }

    async fn generate(&self, _agent: &Agent, _prompt: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(CrewError::Generation(
            "generate called despite failed preflight".to_string(),
        ))
    }
}

/// Records queries and returns a fixed result summary.
#[derive(Default)]
pub struct StaticSearch {
    queries: Mutex<Vec<String>>,
}

impl StaticSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl WebSearch for StaticSearch {
    async fn search(&self, query: &str) -> Result<String> {
        self.queries.lock().unwrap().push(query.to_string());
        Ok("- Mock result (https://example.com)\n  A fixed search result.\n".to_string())
    }
}
