//! services/api/src/adapters/reasoning_llm.rs
//!
//! This module contains the adapter for the text-generation model that classifies
//! moods and asks follow-up questions. It implements the `ReasoningService` port
//! from the `core` crate against any OpenAI-compatible chat endpoint (Gemini by default).

use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequest, CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use moodsense_core::ports::{PortError, PortResult, ReasoningService};
use tracing::{debug, error};

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements `ReasoningService` using an OpenAI-compatible LLM.
#[derive(Clone)]
pub struct OpenAiReasoningAdapter {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiReasoningAdapter {
    /// Creates a new `OpenAiReasoningAdapter`.
    pub fn new(client: Client<OpenAIConfig>, model: String) -> Self {
        Self { client, model }
    }

    /// Builds a client for the given key and OpenAI-compatible base URL.
    pub fn client_for(api_key: &str, api_base: &str) -> Client<OpenAIConfig> {
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(api_base);
        Client::with_config(config)
    }

    /// Wraps the prompt in a single user message addressed to the configured model.
    fn build_request(&self, prompt: &str) -> PortResult<CreateChatCompletionRequest> {
        let messages: Vec<ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestUserMessageArgs::default()
                .content(prompt)
                .build()
                .map_err(|e| PortError::Unexpected(e.to_string()))?
                .into(),
        ];

        CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .build()
            .map_err(|e| PortError::Unexpected(e.to_string()))
    }
}

//=========================================================================================
// `ReasoningService` Trait Implementation
//=========================================================================================

#[async_trait]
impl ReasoningService for OpenAiReasoningAdapter {
    /// Sends the prompt as a single user message and returns the first choice's text.
    async fn generate(&self, prompt: &str) -> PortResult<String> {
        let request = self.build_request(prompt)?;

        debug!("Sending prompt to model '{}'.", self.model);

        // Call the API and manually map the error if it occurs, which respects the orphan rule.
        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e: OpenAIError| {
                error!("Reasoning service call failed: {}", e);
                PortError::Unexpected(e.to_string())
            })?;

        let content = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| {
                PortError::Unexpected("Reasoning LLM returned no choices in its response.".to_string())
            })?
            .message
            .content
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| {
                PortError::Unexpected(
                    "Reasoning LLM response contained no text content.".to_string(),
                )
            })?;

        Ok(content)
    }
}
