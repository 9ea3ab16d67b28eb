//! Ollama Provider：文本内嵌调用路径

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::AppConfig;
use crate::core::ProviderError;
use crate::database::Task;
use crate::llm::{LlmClient, OllamaClient};
use crate::providers::{
    ask_task, complete_prompt, prompts, tasks_to_messages, text_to_task_or_ask,
    NextTaskOptions, Provider, OLLAMA,
};

/// 工具目录写进 system prompt，模型以 JSON 文本回复调用
pub struct OllamaProvider {
    llm: Arc<dyn LlmClient>,
}

impl OllamaProvider {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    /// 按配置创建；不发起任何网络请求
    pub fn from_config(cfg: &AppConfig) -> Self {
        let ollama = &cfg.llm.ollama;
        tracing::info!("Using Ollama provider ({} at {})", ollama.model, ollama.server_url);
        Self::new(Arc::new(OllamaClient::new(
            Some(&ollama.server_url),
            &ollama.model,
            cfg.llm.timeouts.request,
        )))
    }
}

#[async_trait]
impl Provider for OllamaProvider {
    fn name(&self) -> &str {
        OLLAMA
    }

    async fn summary(&self, query: &str, n: usize) -> Result<String, ProviderError> {
        complete_prompt(self.llm.as_ref(), prompts::summary_prompt(query, n)).await
    }

    async fn docker_image_name(&self, task: &str) -> Result<String, ProviderError> {
        complete_prompt(self.llm.as_ref(), prompts::docker_image_prompt(task)).await
    }

    async fn next_task(&self, options: NextTaskOptions<'_>) -> Task {
        tracing::info!(history = options.tasks.len(), "Getting next task");

        let system_prompt = format!(
            "{}\n\n{}",
            prompts::agent_prompt(options.docker_image),
            prompts::text_call_instructions()
        );
        let messages = tasks_to_messages(options.tasks, &system_prompt);

        let text = match self.llm.complete_text(&messages).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to get response from Ollama");
                return ask_task("There was an error getting the next task");
            }
        };

        text_to_task_or_ask(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::MockLlmClient;

    #[tokio::test]
    async fn test_next_task_from_text() {
        let mock = Arc::new(MockLlmClient::new().with_text(
            r#"{"tool":"terminal","input":{"input":"npm init -y"},"message":"Initializing project"}"#,
        ));
        let provider = OllamaProvider::new(mock.clone());

        let task = provider
            .next_task(NextTaskOptions {
                tasks: &[],
                docker_image: "node:21",
            })
            .await;

        assert_eq!(task.task_type(), "terminal");
        assert_eq!(task.args(), r#"{"input":"npm init -y"}"#);
        assert_eq!(task.message(), "Initializing project");
        assert!(!task.is_tool_call());

        let requests = mock.requests();
        assert!(requests[0].tool_names.is_empty());
        assert!(requests[0].messages[0].content.contains("\"tool\""));
    }

    #[tokio::test]
    async fn test_next_task_falls_back_on_garbage() {
        let provider = OllamaProvider::new(Arc::new(MockLlmClient::new().with_text("I think we should")));
        let task = provider
            .next_task(NextTaskOptions {
                tasks: &[],
                docker_image: "debian:latest",
            })
            .await;
        assert_eq!(task.task_type(), "ask");
        assert_eq!(
            task.message(),
            "There was an error getting the next task. What should I do next?"
        );
    }

    #[tokio::test]
    async fn test_docker_image_name() {
        let provider = OllamaProvider::new(Arc::new(MockLlmClient::new().with_text("`golang:1.22`")));
        assert_eq!(
            provider.docker_image_name("write a go server").await.unwrap(),
            "golang:1.22"
        );
    }
}
