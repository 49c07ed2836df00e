//! 产物引用修复 - 确保每个showcase加载自己库的编译产物
//!
//! 引用路径由showcase自身的位置推导：库名取libs后的路径段，../前缀由文件深度
//! 决定。三种引用策略互斥，每个部署环境固定选择一种。

use anyhow::Result;
use regex::Regex;
use std::path::{Component, Path};
use std::sync::LazyLock;

use crate::config::{Config, ImportStrategy};
use crate::patcher::{
    PatchError, PatchResult, read_showcase, walk_showcase_files, write_showcase,
};

/// 幂等标记：写入方在script标签上携带、检测方逐字校验的属性
pub const BUNDLE_MARKER_ATTR: &str = "data-gds-bundle";

/// 旧式的裸src引用，会被替换为带标记的策略形式
static DIST_MODULE_SCRIPT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<script type="module" src="[^"]*dist/libs/[^"]*"></script>"#).unwrap()
});

/// 从showcase自身路径推导出的产物定位信息
#[derive(Debug, Clone, PartialEq)]
pub struct BundleRef {
    /// libs下的库名
    pub lib_name: String,
    /// 回到工作区根目录所需的../前缀
    pub rel_prefix: String,
}

/// 根据showcase相对工作区的路径推导库名与相对前缀。
///
/// 路径必须形如 libs/<lib>/.../<name>.showcase.html，否则无法定位产物。
pub fn resolve_bundle_ref(rel_path: &Path) -> Result<BundleRef, PatchError> {
    let segments: Vec<&str> = rel_path
        .components()
        .filter_map(|component| match component {
            Component::Normal(segment) => segment.to_str(),
            _ => None,
        })
        .collect();

    let lib_name = segments
        .iter()
        .position(|segment| *segment == "libs")
        .and_then(|libs_idx| {
            // libs后面必须还有库名和至少一层文件
            if libs_idx + 2 < segments.len() {
                Some(segments[libs_idx + 1].to_string())
            } else {
                None
            }
        })
        .ok_or_else(|| PatchError::UnknownLibrary(rel_path.display().to_string()))?;

    // 文件所在目录每深一层就需要一个../
    let depth = segments.len() - 1;

    Ok(BundleRef {
        lib_name,
        rel_prefix: "../".repeat(depth),
    })
}

/// 渲染所选策略对应的script标签，三种形式都携带幂等标记属性
fn render_bundle_script(
    bundle: &BundleRef,
    strategy: ImportStrategy,
    inline_source: Option<&str>,
) -> String {
    match strategy {
        ImportStrategy::Module => format!(
            "<script type=\"module\" {}=\"{}\">\n  import '{}dist/libs/{}/index.js';\n</script>",
            BUNDLE_MARKER_ATTR, bundle.lib_name, bundle.rel_prefix, bundle.lib_name
        ),
        ImportStrategy::Umd => format!(
            "<script src=\"{}dist/libs/{}/index.umd.js\" {}=\"{}\"></script>",
            bundle.rel_prefix, bundle.lib_name, BUNDLE_MARKER_ATTR, bundle.lib_name
        ),
        ImportStrategy::Inline => format!(
            "<script {}=\"{}\">\n{}\n</script>",
            BUNDLE_MARKER_ATTR,
            bundle.lib_name,
            inline_source.unwrap_or_default()
        ),
    }
}

/// 把渲染好的script写进文档。
///
/// 已带标记的文件保持原样；存在旧式裸src引用时原位替换，否则插到</head>之前。
pub fn apply_bundle_script(content: &str, script: &str) -> PatchResult {
    if content.contains(BUNDLE_MARKER_ATTR) {
        return PatchResult::AlreadyPatched;
    }

    if let Some(m) = DIST_MODULE_SCRIPT.find(content) {
        let mut patched = String::with_capacity(content.len() + script.len());
        patched.push_str(&content[..m.start()]);
        patched.push_str(script);
        patched.push_str(&content[m.end()..]);
        return PatchResult::Patched(patched);
    }

    let Some(head_end) = content.find("</head>") else {
        return PatchResult::Skipped("缺少</head>标签");
    };

    let mut patched = String::with_capacity(content.len() + script.len() + 4);
    patched.push_str(&content[..head_end]);
    patched.push_str("  ");
    patched.push_str(script);
    patched.push('\n');
    patched.push_str(&content[head_end..]);

    PatchResult::Patched(patched)
}

/// 处理libs下的全部showcase文件
pub fn run(config: &Config) -> Result<()> {
    let libs_dir = config.libs_path();
    if !libs_dir.is_dir() {
        anyhow::bail!("组件库目录不存在: {}", libs_dir.display());
    }

    let files = walk_showcase_files(&libs_dir);
    if files.is_empty() {
        println!("⚠️ 未在 {} 下发现showcase文件", libs_dir.display());
        return Ok(());
    }

    println!(
        "🔧 共发现 {} 个showcase文件，使用 {} 策略修复产物引用...",
        files.len(),
        config.import_strategy
    );

    let mut patched_count = 0;
    for path in &files {
        match patch_file(config, path) {
            Ok(PatchResult::Patched(_)) => {
                println!("🔧 已修复产物引用: {}", path.display());
                patched_count += 1;
            }
            Ok(PatchResult::AlreadyPatched) => {
                println!("✅ 产物引用已就绪: {}", path.display());
            }
            Ok(PatchResult::Skipped(reason)) => {
                println!("⚠️ 跳过 {}: {}", path.display(), reason);
            }
            Err(e) => {
                eprintln!("❌ 处理 {} 失败: {}", path.display(), e);
            }
        }
    }

    println!("💾 产物引用修复完成，共改写 {} 个文件", patched_count);
    Ok(())
}

fn patch_file(config: &Config, path: &Path) -> Result<PatchResult, PatchError> {
    let rel_path = path
        .strip_prefix(&config.workspace_path)
        .unwrap_or(path);
    let bundle = resolve_bundle_ref(rel_path)?;

    let content = read_showcase(path)?;
    // inline策略要读产物文件，先检查标记避免无谓的读取
    if content.contains(BUNDLE_MARKER_ATTR) {
        return Ok(PatchResult::AlreadyPatched);
    }

    let inline_source = match config.import_strategy {
        ImportStrategy::Inline => {
            let bundle_path = config
                .dist_path()
                .join("libs")
                .join(&bundle.lib_name)
                .join("index.umd.js");
            let source = std::fs::read_to_string(&bundle_path)
                .map_err(|_| PatchError::MissingBundle(bundle_path.display().to_string()))?;
            Some(source)
        }
        _ => None,
    };

    let script = render_bundle_script(&bundle, config.import_strategy, inline_source.as_deref());
    let result = apply_bundle_script(&content, &script);
    if let PatchResult::Patched(ref patched) = result {
        write_showcase(path, patched)?;
    }
    Ok(result)
}
