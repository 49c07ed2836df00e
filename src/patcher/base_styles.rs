//! 基础样式注入 - 向showcase的<head>内写入共享的CSS自定义属性

use anyhow::Result;
use std::path::Path;

use crate::config::Config;
use crate::patcher::{
    PatchError, PatchResult, list_showcase_files, read_showcase, write_showcase,
};

/// 写入方与检测方共用的幂等标记
pub const BASE_STYLES_MARKER: &str = "<!-- gds-base-styles -->";

/// 共享的基础样式变量块，与样式规范保持一致
pub const BASE_STYLES: &str = r#"<style>
    body {
        /* Colors */
        --gds-color-primary: #4263eb;
        --gds-color-primary-hover: #364fc7;
        --gds-color-secondary: #868e96;
        --gds-color-secondary-hover: #495057;
        --gds-color-success: #40c057;
        --gds-color-warning: #fcc419;
        --gds-color-danger: #fa5252;
        --gds-color-info: #15aabf;
        --gds-color-light: #f8f9fa;
        --gds-color-dark: #212529;

        /* Typography */
        --gds-font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, 'Open Sans', 'Helvetica Neue', sans-serif;
        --gds-font-size-xs: 0.75rem;
        --gds-font-size-sm: 0.875rem;
        --gds-font-size-md: 1rem;
        --gds-font-size-lg: 1.125rem;
        --gds-font-size-xl: 1.25rem;
        --gds-font-weight-normal: 400;
        --gds-font-weight-medium: 500;
        --gds-font-weight-bold: 700;

        /* Spacing */
        --gds-spacing-xs: 0.25rem;
        --gds-spacing-sm: 0.5rem;
        --gds-spacing-md: 1rem;
        --gds-spacing-lg: 1.5rem;
        --gds-spacing-xl: 2rem;

        /* Borders */
        --gds-border-radius-sm: 0.25rem;
        --gds-border-radius-md: 0.375rem;
        --gds-border-radius-lg: 0.5rem;
        --gds-border-radius-full: 9999px;
        --gds-border-width: 1px;

        /* Shadows */
        --gds-shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
        --gds-shadow-md: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06);
        --gds-shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05);

        /* Transitions */
        --gds-transition-fast: 150ms;
        --gds-transition-normal: 250ms;
        --gds-transition-slow: 350ms;
    }
</style>
"#;

/// 对单个文档执行注入。
///
/// 已带标记的文件必须保持逐字节不变；样式块紧跟在开头的<head>标签之后插入。
pub fn inject_base_styles(content: &str) -> PatchResult {
    if content.contains(BASE_STYLES_MARKER) {
        return PatchResult::AlreadyPatched;
    }

    let Some(head_pos) = content.find("<head>") else {
        return PatchResult::Skipped("缺少<head>标签");
    };
    let insert_at = head_pos + "<head>".len();

    let mut patched = String::with_capacity(
        content.len() + BASE_STYLES_MARKER.len() + BASE_STYLES.len() + 2,
    );
    patched.push_str(&content[..insert_at]);
    patched.push('\n');
    patched.push_str(BASE_STYLES_MARKER);
    patched.push('\n');
    patched.push_str(BASE_STYLES);
    patched.push_str(&content[insert_at..]);

    PatchResult::Patched(patched)
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
                println!("🎨 已注入基础样式: {}", path.display());
                patched_count += 1;
            }
            Ok(PatchResult::AlreadyPatched) => {
                println!("✅ 基础样式已存在: {}", path.display());
            }
            Ok(PatchResult::Skipped(reason)) => {
                println!("⚠️ 跳过 {}: {}", path.display(), reason);
            }
            Err(e) => {
                eprintln!("❌ 处理 {} 失败: {}", path.display(), e);
            }
        }
    }

    println!("💾 基础样式注入完成，共改写 {} 个文件", patched_count);
    Ok(())
}

fn patch_file(path: &Path) -> Result<PatchResult, PatchError> {
    let content = read_showcase(path)?;
    let result = inject_base_styles(&content);
    if let PatchResult::Patched(ref patched) = result {
        write_showcase(path, patched)?;
    }
    Ok(result)
}
