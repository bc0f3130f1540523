//! Crew orchestration: executes an ordered list of tasks under a process
//! policy, threading each task's output forward as context for the next,
//! and producing one final artifact.

pub mod agent;
pub mod task;

pub use agent::{Agent, Capability, GenerationParams};
pub use task::Task;

use crate::ports::TextGenerator;
use crate::types::{CrewError, Result, RunError};
use serde::{Deserialize, Serialize};

/// Execution discipline governing task ordering.
///
/// Only `Sequential` is implemented; the enum reserves room for future
/// policies (hierarchical delegation) as additive variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Process {
    #[default]
    Sequential,
}

/// Lifecycle of a crew run. Terminal states (`Completed`, `Failed`) are
/// immutable; a crew is single-use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Pending,
    Running,
    Completed,
    Failed,
}

/// An ordered set of tasks executed over a fixed agent roster.
///
/// The crew exclusively owns its agents and tasks; neither is shared across
/// runs, so no locking discipline is needed here. The caller guarantees at
/// most one run is in flight against a given session.
#[derive(Debug)]
pub struct Crew {
    agents: Vec<Agent>,
    tasks: Vec<Task>,
    process: Process,
    status: RunStatus,
    final_artifact: Option<String>,
}

impl Crew {
    /// Build a crew, validating that the task list is non-empty and every
    /// task is bound to an agent in the roster.
    pub fn new(agents: Vec<Agent>, tasks: Vec<Task>, process: Process) -> Result<Self> {
        if tasks.is_empty() {
            return Err(CrewError::InvalidCrew(
                "a crew needs at least one task".to_string(),
            ));
        }
        for (index, task) in tasks.iter().enumerate() {
            if task.agent() >= agents.len() {
                return Err(CrewError::InvalidCrew(format!(
                    "task {} is bound to agent {} but the roster has {} agents",
                    index,
                    task.agent(),
                    agents.len()
                )));
            }
        }
        Ok(Self {
            agents,
            tasks,
            process,
            status: RunStatus::Pending,
            final_artifact: None,
        })
    }

    /// Build a crew under the sequential process policy.
    pub fn sequential(agents: Vec<Agent>, tasks: Vec<Task>) -> Result<Self> {
        Self::new(agents, tasks, Process::Sequential)
    }

    /// Execute all tasks in declared order and return the final artifact.
    ///
    /// Context threading is explicit: the accumulated context starts empty
    /// and is *replaced* by each task's output: only the immediately prior
    /// output flows forward, not the full history. The first failure halts
    /// the run; no later task invokes its capability and no partial
    /// artifact is produced.
    ///
    /// A failed preflight (missing credential, reused crew) leaves the
    /// status `Pending`.
    pub async fn kickoff(
        &mut self,
        generator: &dyn TextGenerator,
    ) -> std::result::Result<String, RunError> {
        if self.status != RunStatus::Pending {
            return Err(RunError::Preflight(CrewError::InvalidCrew(
                "crew has already been started".to_string(),
            )));
        }
        generator.preflight().map_err(RunError::Preflight)?;

        self.status = RunStatus::Running;
        let total = self.tasks.len();
        let mut context = String::new();

        for index in 0..total {
            let agent_index = self.tasks[index].agent();
            let prompt = self.tasks[index].prompt_with(&context);
            let role = self.agents[agent_index].role().to_string();

            tracing::info!(task = index + 1, total, role = %role, "executing task");

            match generator.generate(&self.agents[agent_index], &prompt).await {
                Ok(output) => {
                    self.tasks[index].resolve(output.clone());
                    context = output;
                }
                Err(source) => {
                    self.status = RunStatus::Failed;
                    tracing::error!(
                        task = index + 1,
                        role = %role,
                        error = %source,
                        "task failed, halting run"
                    );
                    return Err(RunError::Task {
                        index,
                        role,
                        source,
                    });
                }
            }
        }

        self.status = RunStatus::Completed;
        self.final_artifact = Some(context.clone());
        tracing::info!(tasks = total, "run completed");
        Ok(context)
    }

    pub fn status(&self) -> RunStatus {
        self.status
    }

    pub fn process(&self) -> Process {
        self.process
    }

    /// The last task's resolved output, set only once the run completes.
    pub fn final_artifact(&self) -> Option<&str> {
        self.final_artifact.as_deref()
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }
}
