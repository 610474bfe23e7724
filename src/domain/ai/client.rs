use std::sync::Arc;

use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};

use crate::config::{AppConfig, ConfigError};
use crate::utils::error::AppError;

/// Text generator behind the term endpoint.
///
/// Abstracts the OpenAI call so tests can substitute a mock.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait AiClientTrait: Send + Sync {
    /// Sends `prompt` as a single user message and returns the raw reply text.
    async fn generate(&self, prompt: &str) -> Result<String, AppError>;
}

/// Arc-wrapped client (Clone support)
pub type AiClient = Arc<dyn AiClientTrait>;

/// OpenAI API client
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiClient {
    pub fn new(api_key: &str, api_base: Option<&str>, model: &str) -> Self {
        let mut config = OpenAIConfig::new().with_api_key(api_key);
        if let Some(base) = api_base {
            config = config.with_api_base(base);
        }
        Self {
            client: Client::with_config(config),
            model: model.to_string(),
        }
    }
}

/// Builds the process-wide AI client once at startup.
///
/// A missing key is captured as `Err` rather than aborting; requests then answer 503.
pub fn init_ai_client(config: &AppConfig) -> Result<AiClient, ConfigError> {
    let api_key = config
        .openai_api_key
        .as_deref()
        .ok_or(ConfigError::MissingApiKey)?;

    let client = OpenAiClient::new(
        api_key,
        config.openai_api_base.as_deref(),
        &config.openai_model,
    );
    Ok(Arc::new(client))
}

#[async_trait::async_trait]
impl AiClientTrait for OpenAiClient {
    async fn generate(&self, prompt: &str) -> Result<String, AppError> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(self.model.as_str())
            .messages(vec![build_user_message(prompt)?])
            .build()
            .map_err(|e| AppError::Internal(e.to_string()))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| AppError::Provider(e.to_string()))?;

        Ok(response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default())
    }
}

pub(crate) fn build_user_message(content: &str) -> Result<ChatCompletionRequestMessage, AppError> {
    Ok(ChatCompletionRequestMessage::User(
        ChatCompletionRequestUserMessageArgs::default()
            .content(content)
            .build()
            .map_err(|e| AppError::Internal(e.to_string()))?,
    ))
}
