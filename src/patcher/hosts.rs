//! :host选择器改写 - 让自定义元素的样式在独立文档里作用于body

use anyhow::Result;
use std::path::Path;

use crate::config::Config;
use crate::patcher::{
    PatchError, PatchResult, list_showcase_files, read_showcase, write_showcase,
};

/// 被改写的选择器token
pub const HOST_TOKEN: &str = ":host";

/// 改写目标
pub const HOST_REPLACEMENT: &str = "body";

/// 全文字面替换，注释与属性值里的出现也一并改写，不做选择器级解析。
///
/// 替换后文档中不再含有token，因此第二次运行天然保持文件不变。
pub fn rewrite_hosts(content: &str) -> PatchResult {
    if !content.contains(HOST_TOKEN) {
        return PatchResult::AlreadyPatched;
    }
    PatchResult::Patched(content.replace(HOST_TOKEN, HOST_REPLACEMENT))
}

/// 处理showcase目录下的全部文件
pub fn run(config: &Config) -> Result<()> {
    let showcases_dir = config.showcases_path();
    if !showcases_dir.is_dir() {
        anyhow::bail!("showcase目录不存在: {}", showcases_dir.display());
    }

    let files = list_showcase_files(&showcases_dir)?;
    if files.is_empty() {
        println!("⚠️ 未在 {} 下发现showcase文件", showcases_dir.display());
        return Ok(());
    }

    let mut patched_count = 0;
    for path in &files {
        match patch_file(path) {
            Ok(PatchResult::Patched(_)) => {
                println!("🔧 已改写:host选择器: {}", path.display());
                patched_count += 1;
            }
            Ok(_) => {
                println!("✅ 无需改写: {}", path.display());
            }
            Err(e) => {
                eprintln!("❌ 处理 {} 失败: {}", path.display(), e);
            }
        }
    }

    println!("💾 选择器改写完成，共改写 {} 个文件", patched_count);
    Ok(())
}

fn patch_file(path: &Path) -> Result<PatchResult, PatchError> {
    let content = read_showcase(path)?;
    let result = rewrite_hosts(&content);
    if let PatchResult::Patched(ref patched) = result {
        write_showcase(path, patched)?;
    }
    Ok(result)
}
