//! OpenAI Provider：原生 tool call 路径

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::AppConfig;
use crate::core::ProviderError;
use crate::database::Task;
use crate::llm::{LlmClient, OpenAiClient};
use crate::providers::{
    ask_task, complete_prompt, prompts, tasks_to_messages, tool_calls_to_task_or_ask,
    NextTaskOptions, Provider, OPENAI,
};
use crate::tools::tools;

/// 通过 OpenAI 兼容端点声明 Tool Catalog，并从 tool_calls 构造 Task
pub struct OpenAiProvider {
    llm: Arc<dyn LlmClient>,
}

impl OpenAiProvider {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    /// 按配置创建；不发起任何网络请求
    pub fn from_config(cfg: &AppConfig) -> Self {
        let openai = &cfg.llm.openai;
        tracing::info!("Using OpenAI provider ({})", openai.model);
        Self::new(Arc::new(OpenAiClient::new(
            openai.base_url.as_deref(),
            &openai.model,
            openai.api_key.as_deref(),
            cfg.llm.timeouts.request,
        )))
    }
}

#[async_trait]
impl Provider for OpenAiProvider {
    fn name(&self) -> &str {
        OPENAI
    }

    async fn summary(&self, query: &str, n: usize) -> Result<String, ProviderError> {
        complete_prompt(self.llm.as_ref(), prompts::summary_prompt(query, n)).await
    }

    async fn docker_image_name(&self, task: &str) -> Result<String, ProviderError> {
        complete_prompt(self.llm.as_ref(), prompts::docker_image_prompt(task)).await
    }

    async fn next_task(&self, options: NextTaskOptions<'_>) -> Task {
        tracing::info!(history = options.tasks.len(), "Getting next task");

        let messages = tasks_to_messages(options.tasks, &prompts::agent_prompt(options.docker_image));

        let choices = match self.llm.complete(&messages, tools()).await {
            Ok(choices) => choices,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to get response from OpenAI");
                return ask_task("There was an error getting the next task");
            }
        };

        tool_calls_to_task_or_ask(&choices)
    }
}
