//! Task: a single unit of orchestrated work, bound to one agent.

use serde::{Deserialize, Serialize};

/// A unit of work producing one textual output.
///
/// The binding is an index into the owning crew's agent roster; the crew
/// validates it at construction. `output` is single-assignment: unset until
/// the task executes, never overwritten afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    description: String,
    agent: usize,
    expected_output: String,
    output: Option<String>,
}

impl Task {
    pub fn new(
        description: impl Into<String>,
        agent: usize,
        expected_output: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            agent,
            expected_output: expected_output.into(),
            output: None,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Index of the bound agent in the owning crew's roster.
    pub fn agent(&self) -> usize {
        self.agent
    }

    /// Natural-language acceptance description, used for prompt framing
    /// rather than machine checking.
    pub fn expected_output(&self) -> &str {
        &self.expected_output
    }

    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    /// Full prompt for this task given the accumulated run context.
    /// An empty context (the first task) adds no context block.
    pub fn prompt_with(&self, context: &str) -> String {
        if context.is_empty() {
            format!(
                "{}\n\nExpected output: {}",
                self.description, self.expected_output
            )
        } else {
            format!(
                "{}\n\nExpected output: {}\n\nContext from the previous task:\n{}",
                self.description, self.expected_output, context
            )
        }
    }

    /// Record the resolved output. Single-assignment.
    pub(crate) fn resolve(&mut self, output: String) {
        debug_assert!(self.output.is_none(), "task output is single-assignment");
        self.output = Some(output);
    }
}
