//! 组件库脚手架 - 创建库目录并写入生成产物

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command as TokioCommand;

use crate::config::Config;
use crate::utils::casing::to_kebab_case;

/// 检查Nx生成器所依赖的npx是否可用
pub async fn nx_available() -> bool {
    match TokioCommand::new("npx")
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
    {
        Ok(status) => status.success(),
        Err(_) => false,
    }
}

/// 为组件创建库目录，返回库路径。
///
/// 库已存在时直接复用；npx不可用时退化为直接创建目录结构，保证离线环境下
/// 生成流程仍可完成。
pub async fn create_component_library(
    config: &Config,
    component_name: &str,
    use_nx: bool,
) -> Result<PathBuf> {
    let lib_name = to_kebab_case(component_name);
    let lib_path = config.libs_path().join(&lib_name);

    if lib_path.exists() {
        println!("📦 库 {} 已存在，跳过创建", lib_name);
        return Ok(lib_path);
    }

    if use_nx {
        println!("📦 正在通过Nx创建库 {}...", lib_name);
        let status = TokioCommand::new("npx")
            .current_dir(&config.workspace_path)
            .args(["nx", "g", "@nx/js:lib", &lib_name])
            .arg(format!("--directory=libs/{}", lib_name))
            .args(["--bundler=vite", "--unitTestRunner=vitest", "--no-interactive"])
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .context("无法执行npx nx")?;

        if !status.success() {
            anyhow::bail!(
                "Nx生成器返回非零状态码: {}",
                status.code().unwrap_or(-1)
            );
        }
    } else {
        println!("📦 npx不可用，直接创建库 {} 的目录结构", lib_name);
        std::fs::create_dir_all(lib_path.join("src").join("lib"))
            .with_context(|| format!("无法创建库目录: {}", lib_path.display()))?;
    }

    write_vite_config(&lib_path, component_name)?;

    Ok(lib_path)
}

/// 写入支持Svelte自定义元素的vite配置
fn write_vite_config(lib_path: &Path, component_name: &str) -> Result<()> {
    let vite_config = format!(
        r#"import {{ defineConfig }} from 'vite';
import {{ svelte }} from '@sveltejs/vite-plugin-svelte';

export default defineConfig({{
  plugins: [
    svelte({{
      compilerOptions: {{
        customElement: true,
      }},
    }}),
  ],
  build: {{
    lib: {{
      entry: 'src/index.ts',
      name: 'GDS{component_name}',
      fileName: 'index',
      formats: ['es', 'umd'],
    }},
    rollupOptions: {{
      external: ['svelte'],
      output: {{
        globals: {{
          svelte: 'Svelte',
        }},
      }},
    }},
  }},
}});
"#
    );

    std::fs::write(lib_path.join("vite.config.ts"), vite_config)
        .with_context(|| format!("无法写入vite配置: {}", lib_path.display()))?;
    Ok(())
}

/// 将生成的组件、故事与可选的showcase写入库目录
pub fn save_generated_files(
    lib_path: &Path,
    component_name: &str,
    component_code: &str,
    story_code: &str,
    showcase_code: Option<&str>,
) -> Result<()> {
    let src_dir = lib_path.join("src").join("lib");
    std::fs::create_dir_all(&src_dir)
        .with_context(|| format!("无法创建目录: {}", src_dir.display()))?;

    let component_path = src_dir.join(format!("{}.svelte", component_name));
    std::fs::write(&component_path, component_code)?;
    println!("💾 组件已保存: {}", component_path.display());

    let story_path = src_dir.join(format!("{}.stories.ts", component_name));
    std::fs::write(&story_path, story_code)?;
    println!("💾 故事已保存: {}", story_path.display());

    if let Some(showcase) = showcase_code {
        let showcase_path = src_dir.join(format!("{}.showcase.html", component_name));
        std::fs::write(&showcase_path, showcase)?;
        println!("💾 showcase已保存: {}", showcase_path.display());
    }

    let index_path = lib_path.join("src").join("index.ts");
    std::fs::write(
        &index_path,
        format!("export * from './lib/{}';\n", component_name),
    )?;

    Ok(())
}

/// 向核心库索引追加导出语句，已存在相同导出时保持文件不变。
///
/// 索引文件不存在时会连同父目录一并创建。
pub fn update_core_index(config: &Config, lib_name: &str) -> Result<()> {
    let index_path = config.core_index_file();
    let export_line = format!("export * from '@gds/{}';", lib_name);

    let current = std::fs::read_to_string(&index_path).unwrap_or_default();
    if current.contains(&export_line) {
        println!("📦 核心库已导出 {}，跳过", lib_name);
        return Ok(());
    }

    if let Some(parent) = index_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("无法创建目录: {}", parent.display()))?;
    }

    let updated = format!("{}\n{}\n", current, export_line);
    std::fs::write(&index_path, updated)
        .with_context(|| format!("无法写入核心库索引: {}", index_path.display()))?;

    println!("📦 核心库索引已更新: {}", lib_name);
    Ok(())
}

// Include tests
#[cfg(test)]
mod tests;
