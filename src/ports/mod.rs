//! Capability ports: the external abilities the orchestrator calls but
//! never implements.
//!
//! Both ports are narrow async traits so that concrete network-backed
//! implementations can be injected at construction and replaced with
//! deterministic stubs in tests. Timeout and retry policy belongs to the
//! implementation behind the port, not to the orchestrator.

use crate::crew::Agent;
use crate::types::Result;
use async_trait::async_trait;

/// Text-generation capability, equivalent to a hosted LLM completion endpoint.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Verify the capability is usable before a run starts.
    ///
    /// A missing credential surfaces here as
    /// [`CrewError::Precondition`](crate::types::CrewError::Precondition),
    /// which leaves the run Pending rather than counting as a task failure.
    fn preflight(&self) -> Result<()> {
        Ok(())
    }

    /// Produce a completion for `prompt`, framed by the agent descriptor
    /// (role, objective, persona, sampling parameters).
    async fn generate(&self, agent: &Agent, prompt: &str) -> Result<String>;
}

/// Web-search capability returning a plain-text result summary.
#[async_trait]
pub trait WebSearch: Send + Sync {
    async fn search(&self, query: &str) -> Result<String>;
}
