//! 提示词包加载 - 系统提示词与各组件的提示词材料

use anyhow::{Context, Result};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use std::path::{Path, PathBuf};

use crate::llm::client::{PromptImage, PromptImageFormat};

/// 单个组件的提示词材料
#[derive(Debug, Clone, Default)]
pub struct ComponentPrompt {
    /// 拼接后的markdown提示词
    pub text: String,
    /// 参考图片（base64载荷）
    pub images: Vec<PromptImage>,
}

/// 列出目录内容并按文件名排序，保证各平台上处理顺序一致
pub fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)
        .with_context(|| format!("无法读取目录: {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .collect();
    entries.sort();
    Ok(entries)
}

/// 读取系统提示词目录，按文件名顺序拼接所有markdown。
///
/// 目录不存在或个别文件读取失败时记录警告并继续，返回已读到的部分。
pub fn load_system_prompt(dir: &Path) -> String {
    let entries = match sorted_entries(dir) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("⚠️ 无法读取系统提示词目录: {}", e);
            return String::new();
        }
    };

    let mut system_prompt = String::new();
    for path in entries {
        if !path.is_file() || !has_extension(&path, &["md"]) {
            continue;
        }
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                system_prompt.push_str(&content);
                system_prompt.push_str("\n\n");
            }
            Err(e) => {
                eprintln!("⚠️ 无法读取系统提示词 {}: {}", path.display(), e);
            }
        }
    }

    system_prompt
}

/// 读取单个组件目录下的提示词材料：markdown拼接为文本，图片转为base64载荷
pub fn load_component_prompt(dir: &Path) -> Result<ComponentPrompt> {
    let mut prompt = ComponentPrompt::default();

    for path in sorted_entries(dir)? {
        if !path.is_file() {
            continue;
        }

        if has_extension(&path, &["md"]) {
            match std::fs::read_to_string(&path) {
                Ok(content) => {
                    prompt.text.push_str(&content);
                    prompt.text.push_str("\n\n");
                }
                Err(e) => {
                    eprintln!("⚠️ 无法读取提示词 {}: {}", path.display(), e);
                }
            }
        } else if let Some(format) = image_format(&path) {
            match std::fs::read(&path) {
                Ok(bytes) => prompt.images.push(PromptImage {
                    data: BASE64.encode(bytes),
                    format,
                }),
                Err(e) => {
                    eprintln!("⚠️ 无法读取参考图片 {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(prompt)
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| extensions.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// 根据扩展名识别参考图片格式，不认识的文件返回None
fn image_format(path: &Path) -> Option<PromptImageFormat> {
    if has_extension(path, &["png"]) {
        Some(PromptImageFormat::Png)
    } else if has_extension(path, &["jpg", "jpeg"]) {
        Some(PromptImageFormat::Jpeg)
    } else {
        None
    }
}
