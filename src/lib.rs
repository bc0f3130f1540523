//! # Newsroom
//!
//! A role-based multi-agent pipeline that drafts a research report on a
//! user-supplied topic and answers follow-up questions about it.
//!
//! ## Overview
//!
//! Newsroom coordinates a fixed team of four agents (Senior Researcher,
//! Data Analyst, Technical Writer, Chief Editor) as a sequential [`Crew`]:
//! each task's output is threaded forward as context for the next, and the
//! Editor's output becomes the final report. A one-task sub-run with an
//! ephemeral QA Specialist answers follow-up questions about that report.
//!
//! The orchestration core talks to the outside world only through two
//! capability ports, [`TextGenerator`] and [`WebSearch`]; the concrete
//! OpenAI and DuckDuckGo backends in [`llm`] and [`tools`] are injected at
//! construction, which is also what makes the core deterministic to test.
//!
//! ## Quick start (library usage)
//!
//! ```rust,ignore
//! use newsroom::{llm::OpenAiGenerator, report, Session};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let generator = OpenAiGenerator::new(
//!         std::env::var("OPENAI_API_KEY")?,
//!         "https://api.openai.com/v1".to_string(),
//!     );
//!
//!     let mut session = Session::new();
//!     let report =
//!         report::run_report(&mut session, "fusion energy", newsroom::DEFAULT_MODEL, &generator)
//!             .await?;
//!     println!("{report}");
//!
//!     let answer =
//!         report::answer_followup(&mut session, "What are the key risks?", newsroom::DEFAULT_MODEL, &generator)
//!             .await?;
//!     println!("{answer}");
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`crew`] - Agents, tasks, and the sequential orchestrator
//! - [`report`] - The fixed report roster, task templates, and Q&A sub-run
//! - [`ports`] - Capability ports the orchestrator depends on
//! - [`llm`] - OpenAI-backed text generation
//! - [`tools`] - DuckDuckGo web search
//! - [`session`] - In-memory session state and conversation log
//! - [`config`] - TOML/env configuration
//! - [`types`] - Common types and error handling

/// TOML and environment configuration.
pub mod config;
/// Agents, tasks, and the sequential orchestrator.
pub mod crew;
/// Concrete text-generation backends.
pub mod llm;
/// Capability ports.
pub mod ports;
/// The report pipeline: roster, task templates, follow-up Q&A.
pub mod report;
/// In-memory session state.
pub mod session;
/// Concrete web-search backends.
pub mod tools;
/// Common types and error handling.
pub mod types;

pub use config::NewsroomConfig;
pub use crew::{Agent, Capability, Crew, GenerationParams, Process, RunStatus, Task};
pub use ports::{TextGenerator, WebSearch};
pub use session::Session;
pub use types::{CrewError, Result, RunError, Speaker, Turn};

/// Model used when neither configuration nor the CLI overrides it.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
