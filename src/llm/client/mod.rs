//! LLM客户端 - 提供统一的LLM服务接口

use anyhow::Result;

use crate::config::Config;

mod providers;

pub use providers::{PromptImage, PromptImageFormat};

use providers::ProviderClient;

/// LLM客户端 - 提供统一的LLM服务接口
#[derive(Clone)]
pub struct LLMClient {
    config: Config,
    client: ProviderClient,
}

impl LLMClient {
    /// 创建新的LLM客户端
    pub fn new(config: Config) -> Result<Self> {
        let client = ProviderClient::new(&config.llm)?;
        Ok(Self { client, config })
    }

    /// 检查模型连接和功能是否正常
    pub async fn check_connection(&self) -> Result<()> {
        println!("🔄 正在检查模型连接...");
        match self
            .generate("You are a helpful assistant.", "Hello", &[])
            .await
        {
            Ok(_) => {
                println!("✅ 模型连接正常");
                Ok(())
            }
            Err(e) => {
                eprintln!("❌ 模型连接失败: {}", e);
                Err(e)
            }
        }
    }

    /// 单轮生成调用，可附带参考图片。
    ///
    /// 每个组件单元只调用一次，不做重试，失败由调用方记录并跳过该单元。
    pub async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        images: &[PromptImage],
    ) -> Result<String> {
        let agent =
            self.client
                .create_agent(&self.config.llm.model, system_prompt, &self.config.llm);
        agent.prompt_with_images(user_prompt, images).await
    }
}
