use std::sync::Arc;

use anyhow::Result;

use crate::{cache::CacheManager, config::Config, llm::client::LLMClient};

/// 生成器上下文
#[derive(Clone)]
pub struct GeneratorContext {
    /// LLM调用器，用于与AI通信。
    pub llm_client: LLMClient,
    /// 配置
    pub config: Config,
    /// 缓存管理器
    pub cache_manager: Arc<CacheManager>,
}

impl GeneratorContext {
    /// 创建新的生成器上下文
    pub fn new(config: Config) -> Result<Self> {
        let llm_client = LLMClient::new(config.clone())?;
        let cache_manager = Arc::new(CacheManager::new(
            config.cache.clone(),
            config.cache_path(),
        ));

        Ok(Self {
            llm_client,
            config,
            cache_manager,
        })
    }
}
