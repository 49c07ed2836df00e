use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// LLM Provider类型
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub enum LLMProvider {
    #[serde(rename = "anthropic")]
    #[default]
    Anthropic,
    #[serde(rename = "openai")]
    OpenAI,
    #[serde(rename = "openrouter")]
    OpenRouter,
    #[serde(rename = "ollama")]
    Ollama,
}

impl std::fmt::Display for LLMProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LLMProvider::Anthropic => write!(f, "anthropic"),
            LLMProvider::OpenAI => write!(f, "openai"),
            LLMProvider::OpenRouter => write!(f, "openrouter"),
            LLMProvider::Ollama => write!(f, "ollama"),
        }
    }
}

impl std::str::FromStr for LLMProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "anthropic" => Ok(LLMProvider::Anthropic),
            "openai" => Ok(LLMProvider::OpenAI),
            "openrouter" => Ok(LLMProvider::OpenRouter),
            "ollama" => Ok(LLMProvider::Ollama),
            _ => Err(format!("Unknown provider: {}", s)),
        }
    }
}

/// showcase引用编译产物的策略，每个部署环境固定选择其中一种
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Default)]
pub enum ImportStrategy {
    /// module script中的import语句
    #[serde(rename = "module")]
    #[default]
    Module,
    /// 带src属性的普通script标签，引用UMD产物
    #[serde(rename = "umd")]
    Umd,
    /// 将产物文件内容整体内联进文档
    #[serde(rename = "inline")]
    Inline,
}

impl std::fmt::Display for ImportStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportStrategy::Module => write!(f, "module"),
            ImportStrategy::Umd => write!(f, "umd"),
            ImportStrategy::Inline => write!(f, "inline"),
        }
    }
}

impl std::str::FromStr for ImportStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "module" => Ok(ImportStrategy::Module),
            "umd" => Ok(ImportStrategy::Umd),
            "inline" => Ok(ImportStrategy::Inline),
            _ => Err(format!("Unknown import strategy: {}", s)),
        }
    }
}

/// 应用程序配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct Config {
    /// 工作区根目录，其余目录均相对该目录解析
    pub workspace_path: PathBuf,

    /// 系统提示词目录
    pub system_prompts_dir: PathBuf,

    /// 组件提示词目录，每个子目录对应一个组件
    pub components_prompts_dir: PathBuf,

    /// 组件库输出目录
    pub libs_dir: PathBuf,

    /// 截图showcase目录
    pub showcases_dir: PathBuf,

    /// 编译产物目录
    pub dist_dir: PathBuf,

    /// 核心库索引文件，生成的组件会被追加导出到这里
    pub core_index_path: PathBuf,

    /// showcase引用编译产物的策略
    pub import_strategy: ImportStrategy,

    /// LLM模型配置
    pub llm: LLMConfig,

    /// 缓存配置
    pub cache: CacheConfig,

    /// 强制重新生成（绕过缓存读取）
    pub force_regenerate: bool,

    /// 是否启用详细日志
    pub verbose: bool,
}

/// LLM模型配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct LLMConfig {
    /// LLM Provider类型
    pub provider: LLMProvider,

    /// LLM API KEY
    pub api_key: String,

    /// LLM API基地址
    pub api_base_url: String,

    /// 生成组件所用的模型
    pub model: String,

    /// 最大tokens
    pub max_tokens: u32,

    /// 温度
    pub temperature: f64,

    /// 超时时间（秒）
    pub timeout_seconds: u64,
}

/// 缓存配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct CacheConfig {
    /// 是否启用缓存
    pub enabled: bool,

    /// 缓存目录（相对工作区）
    pub cache_dir: PathBuf,

    /// 缓存过期时间（小时）
    pub expire_hours: u64,
}

impl Config {
    /// 从文件加载配置
    pub fn from_file(path: &Path) -> Result<Self> {
        let mut file =
            File::open(path).context(format!("Failed to open config file: {:?}", path))?;
        let mut content = String::new();
        file.read_to_string(&mut content)
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// 系统提示词目录的完整路径
    pub fn system_prompts_path(&self) -> PathBuf {
        self.workspace_path.join(&self.system_prompts_dir)
    }

    /// 组件提示词目录的完整路径
    pub fn components_prompts_path(&self) -> PathBuf {
        self.workspace_path.join(&self.components_prompts_dir)
    }

    /// 组件库输出目录的完整路径
    pub fn libs_path(&self) -> PathBuf {
        self.workspace_path.join(&self.libs_dir)
    }

    /// showcase目录的完整路径
    pub fn showcases_path(&self) -> PathBuf {
        self.workspace_path.join(&self.showcases_dir)
    }

    /// 编译产物目录的完整路径
    pub fn dist_path(&self) -> PathBuf {
        self.workspace_path.join(&self.dist_dir)
    }

    /// 核心库索引文件的完整路径
    pub fn core_index_file(&self) -> PathBuf {
        self.workspace_path.join(&self.core_index_path)
    }

    /// 缓存目录的完整路径
    pub fn cache_path(&self) -> PathBuf {
        self.workspace_path.join(&self.cache.cache_dir)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workspace_path: PathBuf::from("."),
            system_prompts_dir: PathBuf::from("prompts/system"),
            components_prompts_dir: PathBuf::from("prompts/components"),
            libs_dir: PathBuf::from("libs"),
            showcases_dir: PathBuf::from("screenshots/showcases"),
            dist_dir: PathBuf::from("dist"),
            core_index_path: PathBuf::from("libs/core/src/lib/index.ts"),
            import_strategy: ImportStrategy::default(),
            llm: LLMConfig::default(),
            cache: CacheConfig::default(),
            force_regenerate: false,
            verbose: false,
        }
    }
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            provider: LLMProvider::default(),
            api_key: std::env::var("GDSGEN_LLM_API_KEY").unwrap_or_default(),
            api_base_url: String::from("https://api.anthropic.com"),
            model: std::env::var("GDSGEN_LLM_MODEL")
                .unwrap_or_else(|_| String::from("claude-3-7-sonnet-latest")),
            max_tokens: 16000,
            temperature: std::env::var("GDSGEN_LLM_TEMPERATURE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0.2),
            timeout_seconds: 300,
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            cache_dir: PathBuf::from(".gdsgen/cache"),
            expire_hours: 720,
        }
    }
}
