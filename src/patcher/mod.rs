//! showcase补丁器 - 对静态HTML文档的幂等文本级改写
//!
//! 每个补丁器整读一个文件、做一次文本变换、整写回去。写入方插入显式标记，
//! 检测方逐字校验同一标记，保证重复运行要么跳过、要么产出逐字节相同的内容。

use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

pub mod base_styles;
pub mod hosts;
pub mod imports;

/// 补丁过程中的错误
#[derive(Debug, Error)]
pub enum PatchError {
    #[error("Failed to read showcase file: {path}: {message}")]
    Read { path: String, message: String },

    #[error("Failed to write showcase file: {path}: {message}")]
    Write { path: String, message: String },

    #[error("Showcase path has no libs/<name> segment: {0}")]
    UnknownLibrary(String),

    #[error("Compiled bundle not found: {0}")]
    MissingBundle(String),
}

/// 单次文本变换的结果
#[derive(Debug, Clone, PartialEq)]
pub enum PatchResult {
    /// 产生了新内容，需要写回
    Patched(String),
    /// 检测到既有标记或已无可改写内容，文件保持原样
    AlreadyPatched,
    /// 缺少可处理的结构，文件保持原样
    Skipped(&'static str),
}

/// 列出目录下所有 *.showcase.html（不递归），按文件名排序
pub fn list_showcase_files(dir: &Path) -> Result<Vec<PathBuf>, PatchError> {
    let entries = std::fs::read_dir(dir).map_err(|e| PatchError::Read {
        path: dir.display().to_string(),
        message: e.to_string(),
    })?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && is_showcase_file(path))
        .collect();
    files.sort();
    Ok(files)
}

/// 递归收集目录下所有 *.showcase.html，按路径排序
pub fn walk_showcase_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| is_showcase_file(path))
        .collect();
    files.sort();
    files
}

fn is_showcase_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.ends_with(".showcase.html"))
        .unwrap_or(false)
}

pub(crate) fn read_showcase(path: &Path) -> Result<String, PatchError> {
    std::fs::read_to_string(path).map_err(|e| PatchError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

pub(crate) fn write_showcase(path: &Path, content: &str) -> Result<(), PatchError> {
    std::fs::write(path, content).map_err(|e| PatchError::Write {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

// Include tests
#[cfg(test)]
mod tests;
