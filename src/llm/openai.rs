//! OpenAI-backed text generation.
//!
//! Maps an [`Agent`] descriptor onto a chat-completions request: the
//! descriptor becomes the system message, its sampling parameters the
//! request parameters. When the agent carries the `WebSearch` capability
//! and a search port is attached, search results are gathered inside the
//! generate call and prepended to the prompt. This is why a search
//! failure can surface mid-run as a task failure.

use crate::crew::{Agent, Capability};
use crate::ports::{TextGenerator, WebSearch};
use crate::types::{CrewError, Result};
use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
        ChatCompletionRequestUserMessage, CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use std::sync::Arc;

/// Search queries are derived from the task description, capped to keep
/// the query focused.
const MAX_QUERY_CHARS: usize = 200;

/// Text-generation capability backed by the OpenAI chat-completions API
/// (or any compatible endpoint).
pub struct OpenAiGenerator {
    client: Client<OpenAIConfig>,
    api_key: String,
    search: Option<Arc<dyn WebSearch>>,
}

impl OpenAiGenerator {
    pub fn new(api_key: String, api_base: String) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key.clone())
            .with_api_base(api_base);

        Self {
            client: Client::with_config(config),
            api_key,
            search: None,
        }
    }

    /// Attach a web-search port. Agents with the `WebSearch` capability
    /// will have their prompts grounded with search results.
    pub fn with_search(mut self, search: Arc<dyn WebSearch>) -> Self {
        self.search = Some(search);
        self
    }

    /// Gather search grounding for the prompt, if this agent may search
    /// and a search port is attached.
    async fn grounding(&self, agent: &Agent, prompt: &str) -> Result<Option<String>> {
        let Some(search) = &self.search else {
            return Ok(None);
        };
        if !agent.can(Capability::WebSearch) {
            return Ok(None);
        }
        let results = search.search(&search_query(prompt)).await?;
        Ok(Some(results))
    }
}

/// Derive a search query from a task prompt: its first line, capped.
fn search_query(prompt: &str) -> String {
    let line = prompt.lines().next().unwrap_or(prompt).trim();
    line.chars().take(MAX_QUERY_CHARS).collect()
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    fn preflight(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(CrewError::Precondition(
                "OPENAI_API_KEY is not set".to_string(),
            ));
        }
        Ok(())
    }

    async fn generate(&self, agent: &Agent, prompt: &str) -> Result<String> {
        let user_prompt = match self.grounding(agent, prompt).await? {
            Some(results) => format!("Web search results:\n{results}\n\n{prompt}"),
            None => prompt.to_string(),
        };

        let request = CreateChatCompletionRequestArgs::default()
            .model(&agent.generation().model)
            .temperature(agent.generation().temperature)
            .messages(vec![
                ChatCompletionRequestMessage::System(ChatCompletionRequestSystemMessage::from(
                    agent.system_context(),
                )),
                ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage::from(
                    user_prompt,
                )),
            ])
            .build()
            .map_err(|e| CrewError::Generation(format!("Failed to build request: {}", e)))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| CrewError::Generation(format!("OpenAI API error: {}", e)))?;

        response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| CrewError::Generation("No response from OpenAI".to_string()))
    }
}
