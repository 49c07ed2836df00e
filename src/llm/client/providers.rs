//! LLM Provider支持模块

use anyhow::Result;
use rig::{
    OneOrMany,
    agent::Agent,
    client::CompletionClient,
    completion::Prompt,
    completion::message::{ImageMediaType, Message, UserContent},
};

use crate::config::{LLMConfig, LLMProvider};

/// 提示词附带的参考图片格式
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PromptImageFormat {
    Png,
    Jpeg,
}

/// 提示词附带的参考图片，data为base64载荷
#[derive(Debug, Clone)]
pub struct PromptImage {
    pub data: String,
    pub format: PromptImageFormat,
}

/// 统一的Provider客户端枚举
#[derive(Clone)]
pub enum ProviderClient {
    Anthropic(rig::providers::anthropic::Client),
    OpenAI(rig::providers::openai::Client),
    OpenRouter(rig::providers::openrouter::Client),
    Ollama(rig::providers::ollama::Client),
}

impl ProviderClient {
    /// 根据配置创建相应的provider客户端
    pub fn new(config: &LLMConfig) -> Result<Self> {
        match config.provider {
            LLMProvider::Anthropic => {
                let client =
                    rig::providers::anthropic::ClientBuilder::new(&config.api_key).build()?;
                Ok(ProviderClient::Anthropic(client))
            }
            LLMProvider::OpenAI => {
                let client = rig::providers::openai::Client::builder(&config.api_key)
                    .base_url(&config.api_base_url)
                    .build();
                Ok(ProviderClient::OpenAI(client))
            }
            LLMProvider::OpenRouter => {
                let client = rig::providers::openrouter::Client::builder(&config.api_key).build();
                Ok(ProviderClient::OpenRouter(client))
            }
            LLMProvider::Ollama => {
                let client = rig::providers::ollama::Client::builder().build();
                Ok(ProviderClient::Ollama(client))
            }
        }
    }

    /// 创建Agent
    pub fn create_agent(
        &self,
        model: &str,
        system_prompt: &str,
        config: &LLMConfig,
    ) -> ProviderAgent {
        match self {
            ProviderClient::Anthropic(client) => {
                let agent = client
                    .agent(model)
                    .preamble(system_prompt)
                    .max_tokens(config.max_tokens.into())
                    .temperature(config.temperature)
                    .build();
                ProviderAgent::Anthropic(agent)
            }
            ProviderClient::OpenAI(client) => {
                let agent = client
                    .completion_model(model)
                    .completions_api()
                    .into_agent_builder()
                    .preamble(system_prompt)
                    .max_tokens(config.max_tokens.into())
                    .temperature(config.temperature)
                    .build();
                ProviderAgent::OpenAI(agent)
            }
            ProviderClient::OpenRouter(client) => {
                let agent = client
                    .agent(model)
                    .preamble(system_prompt)
                    .max_tokens(config.max_tokens.into())
                    .temperature(config.temperature)
                    .build();
                ProviderAgent::OpenRouter(agent)
            }
            ProviderClient::Ollama(client) => {
                let agent = client
                    .agent(model)
                    .preamble(system_prompt)
                    .max_tokens(config.max_tokens.into())
                    .temperature(config.temperature)
                    .build();
                ProviderAgent::Ollama(agent)
            }
        }
    }
}

/// 统一的Agent枚举
pub enum ProviderAgent {
    Anthropic(Agent<rig::providers::anthropic::completion::CompletionModel>),
    OpenAI(Agent<rig::providers::openai::CompletionModel>),
    OpenRouter(Agent<rig::providers::openrouter::CompletionModel>),
    Ollama(Agent<rig::providers::ollama::CompletionModel<reqwest::Client>>),
}

impl ProviderAgent {
    /// 执行prompt，文本与参考图片合并为一条用户消息
    pub async fn prompt_with_images(
        &self,
        prompt: &str,
        images: &[PromptImage],
    ) -> Result<String> {
        let message = build_user_message(prompt, images);
        match self {
            ProviderAgent::Anthropic(agent) => agent.prompt(message).await.map_err(|e| e.into()),
            ProviderAgent::OpenAI(agent) => agent.prompt(message).await.map_err(|e| e.into()),
            ProviderAgent::OpenRouter(agent) => agent.prompt(message).await.map_err(|e| e.into()),
            ProviderAgent::Ollama(agent) => agent.prompt(message).await.map_err(|e| e.into()),
        }
    }
}

/// 构造带图片的用户消息
fn build_user_message(prompt: &str, images: &[PromptImage]) -> Message {
    let mut content = vec![UserContent::text(prompt)];

    for image in images {
        let media_type = match image.format {
            PromptImageFormat::Png => ImageMediaType::PNG,
            PromptImageFormat::Jpeg => ImageMediaType::JPEG,
        };
        content.push(UserContent::image_base64(
            image.data.clone(),
            Some(media_type),
            None,
        ));
    }

    Message::User {
        content: OneOrMany::many(content).expect("content contains at least the text part"),
    }
}
