//! AI Coder - 计算下一个 Task
//!
//! 用法：`ai-coder <history.json> [docker-image]`
//! 读取 Task 历史（JSON 数组），用配置中的 Provider 计算下一个 Task 并以 JSON 输出到 stdout。

use std::path::PathBuf;

use anyhow::Context;
use ai_coder::{
    config::{load_config, AppConfig},
    observability, provider_factory,
    tools::INPUT,
    NextTaskOptions, Task,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    observability::init();

    let mut args = std::env::args().skip(1);
    let history_path = args
        .next()
        .map(PathBuf::from)
        .context("Usage: ai-coder <history.json> [docker-image]")?;
    let docker_image = args.next();

    let cfg = load_config(None).unwrap_or_else(|e| {
        tracing::warn!("Config load failed ({}), using defaults", e);
        AppConfig::default()
    });

    let provider = provider_factory(&cfg.llm.provider, &cfg).context("Failed to create provider")?;

    let data = std::fs::read_to_string(&history_path)
        .with_context(|| format!("Failed to read {}", history_path.display()))?;
    let tasks: Vec<Task> = serde_json::from_str(&data).context("Invalid task history")?;

    let docker_image = match docker_image {
        Some(image) => image,
        None => {
            // 用首条用户输入推断镜像，失败时退回默认镜像
            let input = tasks.iter().find(|t| t.task_type() == INPUT).map(|t| t.message());
            match input {
                Some(input) => provider.docker_image_name(input).await.unwrap_or_else(|e| {
                    tracing::warn!("Docker image inference failed ({}), using default", e);
                    cfg.app.default_docker_image.clone()
                }),
                None => cfg.app.default_docker_image.clone(),
            }
        }
    };
    tracing::info!(provider = %provider.name(), image = %docker_image, "Computing next task");

    let task = provider
        .next_task(NextTaskOptions {
            tasks: &tasks,
            docker_image: &docker_image,
        })
        .await;

    println!("{}", serde_json::to_string_pretty(&task)?);
    Ok(())
}
