use anyhow::Result;
use std::path::Path;

use crate::config::Config;
use crate::generator::context::GeneratorContext;
use crate::generator::parser::parse_generated_response;
use crate::generator::prompts::{self, ComponentPrompt};
use crate::generator::scaffold;
use crate::utils::casing::{to_kebab_case, to_pascal_case};

/// 生成批次的结果统计
#[derive(Debug, Default)]
pub struct GenerateSummary {
    /// 成功生成的组件名
    pub succeeded: Vec<String>,
    /// 被跳过的组件名（缺少输入、调用失败或解析失败）
    pub skipped: Vec<String>,
}

/// 启动组件生成工作流。
///
/// only非空时仅处理列出的组件目录；单个组件失败只记录并跳过，不影响后续组件。
pub async fn launch(config: &Config, only: &[String]) -> Result<GenerateSummary> {
    // 启动前置条件，缺少API KEY时直接终止
    if config.llm.api_key.is_empty() {
        anyhow::bail!("GDSGEN_LLM_API_KEY 未设置，无法调用模型服务");
    }

    let components_dir = config.components_prompts_path();
    if !components_dir.is_dir() {
        anyhow::bail!("组件提示词目录不存在: {}", components_dir.display());
    }

    let context = GeneratorContext::new(config.clone())?;

    // 启动时检查模型连接
    context.llm_client.check_connection().await?;

    println!("📖 正在读取系统提示词...");
    let system_prompt = prompts::load_system_prompt(&config.system_prompts_path());

    let use_nx = scaffold::nx_available().await;
    if !use_nx {
        println!("💡 提示: 未检测到npx，库目录将不经过Nx生成器直接创建");
    }

    let mut summary = GenerateSummary::default();
    for unit_dir in prompts::sorted_entries(&components_dir)? {
        if !unit_dir.is_dir() {
            continue;
        }
        let Some(component_name) = unit_dir.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !only.is_empty() && !only.iter().any(|name| name == component_name) {
            continue;
        }

        println!("\n🧩 正在处理组件: {}", component_name);
        match generate_component_unit(&context, &system_prompt, &unit_dir, component_name, use_nx)
            .await
        {
            Ok(true) => {
                println!("✅ 组件 {} 生成完成", component_name);
                summary.succeeded.push(component_name.to_string());
            }
            Ok(false) => {
                // 跳过原因已在单元内部输出
                summary.skipped.push(component_name.to_string());
            }
            Err(e) => {
                eprintln!("❌ 组件 {} 处理失败: {}", component_name, e);
                summary.skipped.push(component_name.to_string());
            }
        }
    }

    println!(
        "\n💾 生成完成: 成功 {} 个，跳过 {} 个",
        summary.succeeded.len(),
        summary.skipped.len()
    );

    Ok(summary)
}

/// 处理单个组件单元，返回是否实际产出了库文件
async fn generate_component_unit(
    context: &GeneratorContext,
    system_prompt: &str,
    unit_dir: &Path,
    component_name: &str,
    use_nx: bool,
) -> Result<bool> {
    let unit = prompts::load_component_prompt(unit_dir)?;

    if unit.text.trim().is_empty() {
        println!("⚠️ 组件 {} 缺少markdown提示词，跳过", component_name);
        return Ok(false);
    }

    let response = fetch_response(context, system_prompt, &unit, component_name).await?;

    let artifacts = parse_generated_response(&response);
    let (Some(component_code), Some(story_code)) = (&artifacts.component, &artifacts.story) else {
        println!(
            "⚠️ 组件 {} 的响应缺少必需的代码块，跳过",
            component_name
        );
        return Ok(false);
    };

    let pascal_name = to_pascal_case(component_name);
    let lib_path = scaffold::create_component_library(&context.config, &pascal_name, use_nx).await?;
    scaffold::save_generated_files(
        &lib_path,
        &pascal_name,
        component_code,
        story_code,
        artifacts.showcase.as_deref(),
    )?;
    scaffold::update_core_index(&context.config, &to_kebab_case(&pascal_name))?;

    Ok(true)
}

/// 获取模型响应，优先命中缓存；缓存写入失败只警告不中断
async fn fetch_response(
    context: &GeneratorContext,
    system_prompt: &str,
    unit: &ComponentPrompt,
    component_name: &str,
) -> Result<String> {
    let cache_key = build_cache_key(system_prompt, unit);

    if !context.config.force_regenerate
        && let Ok(Some(cached)) = context
            .cache_manager
            .get::<String>("generation", &cache_key)
            .await
    {
        println!("🗃 组件 {} 命中缓存，跳过模型调用", component_name);
        return Ok(cached);
    }

    println!("🤖 正在调用模型生成 {}...", component_name);
    let response = context
        .llm_client
        .generate(system_prompt, &unit.text, &unit.images)
        .await?;

    if let Err(e) = context
        .cache_manager
        .set("generation", &cache_key, &response)
        .await
    {
        eprintln!("⚠️ 写入缓存失败: {}", e);
    }

    Ok(response)
}

/// 缓存键覆盖全部输入：系统提示词、组件提示词与参考图片载荷
fn build_cache_key(system_prompt: &str, unit: &ComponentPrompt) -> String {
    let mut key = String::with_capacity(
        system_prompt.len() + unit.text.len() + unit.images.iter().map(|i| i.data.len()).sum::<usize>(),
    );
    key.push_str(system_prompt);
    key.push_str("\n\n");
    key.push_str(&unit.text);
    for image in &unit.images {
        key.push_str(&image.data);
    }
    key
}
