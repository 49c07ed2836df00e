use crate::config::{Config, ImportStrategy, LLMProvider};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// GDSKit - 由Rust与AI驱动的设计系统组件生成引擎
#[derive(Parser, Debug)]
#[command(name = "GDSKit (gdsgen-rs)")]
#[command(
    about = "AI-based generation engine for design system component libraries. It synthesizes Svelte components from prompt packs, scaffolds a library per component, and keeps showcase HTML files wired to their compiled bundles."
)]
#[command(author = "Sopaco")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// 工作区根目录
    #[arg(short, long, default_value = ".")]
    pub workspace: PathBuf,

    /// 配置文件路径
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 是否启用详细日志
    #[arg(short, long)]
    pub verbose: bool,

    /// LLM Provider (anthropic, openai, openrouter, ollama)
    #[arg(long)]
    pub llm_provider: Option<String>,

    /// LLM API基地址
    #[arg(long)]
    pub llm_api_base_url: Option<String>,

    /// LLM API KEY
    #[arg(long)]
    pub llm_api_key: Option<String>,

    /// 生成组件所用的模型
    #[arg(long)]
    pub model: Option<String>,

    /// 最大tokens数
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// 温度参数
    #[arg(long)]
    pub temperature: Option<f64>,

    /// 是否禁用缓存
    #[arg(long)]
    pub no_cache: bool,

    /// 强制重新生成（绕过缓存读取）
    #[arg(long)]
    pub force_regenerate: bool,
}

/// 子命令，每个命令对应一类对工作区的单遍处理
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// 根据提示词包生成组件库，未指定组件名时处理全部组件
    Generate {
        /// 限定本次处理的组件名列表
        components: Vec<String>,
    },
    /// 向showcase文件注入共享的基础样式变量
    AddBaseStyles,
    /// 将showcase文件中的:host选择器全文改写为body
    FixHosts,
    /// 确保showcase文件正确引用编译产物
    FixImports {
        /// 产物引用策略 (module, umd, inline)
        #[arg(long)]
        strategy: Option<String>,
    },
}

impl Args {
    /// 将CLI参数折叠进配置，返回配置与待执行的子命令
    pub fn into_parts(self) -> (Config, Command) {
        let mut config = if let Some(config_path) = &self.config {
            // 显式指定了配置文件路径时必须可读，否则直接终止
            Config::from_file(config_path).unwrap_or_else(|_| {
                panic!("⚠️ 警告: 无法读取配置文件 {:?}", config_path)
            })
        } else {
            // 未显式指定时尝试从工作区根目录的默认位置加载
            let default_config_path = self.workspace.join("gdsgen.toml");

            if default_config_path.exists() {
                Config::from_file(&default_config_path).unwrap_or_else(|_| {
                    panic!(
                        "⚠️ 警告: 无法读取默认配置文件 {:?}",
                        default_config_path
                    )
                })
            } else {
                Config::default()
            }
        };

        config.workspace_path = self.workspace;

        // 覆盖LLM配置
        if let Some(provider_str) = self.llm_provider {
            if let Ok(provider) = provider_str.parse::<LLMProvider>() {
                config.llm.provider = provider;
            } else {
                eprintln!(
                    "⚠️ 警告: 未知的provider: {}，使用默认provider",
                    provider_str
                );
            }
        }
        if let Some(llm_api_base_url) = self.llm_api_base_url {
            config.llm.api_base_url = llm_api_base_url;
        }
        if let Some(llm_api_key) = self.llm_api_key {
            config.llm.api_key = llm_api_key;
        }
        if let Some(model) = self.model {
            config.llm.model = model;
        }
        if let Some(max_tokens) = self.max_tokens {
            config.llm.max_tokens = max_tokens;
        }
        if let Some(temperature) = self.temperature {
            config.llm.temperature = temperature;
        }

        // 缓存配置
        if self.no_cache {
            config.cache.enabled = false;
        }

        // 子命令自带的策略覆盖
        if let Command::FixImports {
            strategy: Some(ref strategy_str),
        } = self.command
        {
            if let Ok(strategy) = strategy_str.parse::<ImportStrategy>() {
                config.import_strategy = strategy;
            } else {
                eprintln!(
                    "⚠️ 警告: 未知的引用策略: {}，使用配置中的策略",
                    strategy_str
                );
            }
        }

        // 其他配置
        config.force_regenerate = self.force_regenerate;
        config.verbose = self.verbose;

        (config, self.command)
    }
}
