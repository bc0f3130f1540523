//! Agent descriptors.
//!
//! Roles are data, not subclasses: a Researcher and an Editor are both
//! instances of [`Agent`] differing only in field values. Which external
//! capabilities an agent may draw on during generation is expressed as a
//! capability set on the descriptor.

use serde::{Deserialize, Serialize};

/// An external capability an agent may invoke during task execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    WebSearch,
}

/// Sampling parameters handed to the text-generation capability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub model: String,
    /// Sampling temperature, clamped to `[0, 1]`.
    pub temperature: f32,
}

/// Immutable descriptor of a worker: role, objective, narrative persona,
/// and the set of capabilities it may invoke.
///
/// Agents are created per run and never mutated afterwards; construction
/// goes through `with_*` builders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    role: String,
    objective: String,
    persona: String,
    capabilities: Vec<Capability>,
    generation: GenerationParams,
}

impl Agent {
    pub fn new(
        role: impl Into<String>,
        objective: impl Into<String>,
        persona: impl Into<String>,
    ) -> Self {
        Self {
            role: role.into(),
            objective: objective.into(),
            persona: persona.into(),
            capabilities: Vec::new(),
            generation: GenerationParams {
                model: crate::DEFAULT_MODEL.to_string(),
                temperature: 0.7,
            },
        }
    }

    /// Grant a capability. Granting the same capability twice is a no-op.
    pub fn with_capability(mut self, capability: Capability) -> Self {
        if !self.capabilities.contains(&capability) {
            self.capabilities.push(capability);
        }
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.generation.temperature = temperature.clamp(0.0, 1.0);
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.generation.model = model.into();
        self
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn objective(&self) -> &str {
        &self.objective
    }

    pub fn persona(&self) -> &str {
        &self.persona
    }

    pub fn generation(&self) -> &GenerationParams {
        &self.generation
    }

    /// Whether this agent may invoke the given capability.
    pub fn can(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }

    /// System context handed to the text-generation capability alongside
    /// each task prompt.
    pub fn system_context(&self) -> String {
        format!(
            "You are {role}. {persona}\nYour objective: {objective}",
            role = self.role,
            persona = self.persona,
            objective = self.objective
        )
    }
}
