//! Provider 层：统一能力接口、Task ↔ 消息转换、按标识选择后端
//!
//! next_task 的流程：tasks_to_messages -> LlmClient::complete -> Task 构造；
//! 链路上任何失败都落到 ask Task，调用方总能拿到一个可执行的 Task。

pub mod call;
pub mod messages;
pub mod ollama;
pub mod openai;
pub mod prompts;
pub mod registry;
pub mod task_builder;

use async_trait::async_trait;

use crate::core::ProviderError;
use crate::database::Task;
use crate::llm::{LlmClient, Message};

pub use call::{parse_call, Call};
pub use messages::tasks_to_messages;
pub use ollama::OllamaProvider;
pub use openai::OpenAiProvider;
pub use registry::{provider_factory, ProviderConstructor, ProviderRegistry, OLLAMA, OPENAI};
pub use task_builder::{
    ask_task, text_to_task, text_to_task_or_ask, tool_calls_to_task, tool_calls_to_task_or_ask,
};

/// next_task 的输入：当前 Flow 的有序 Task 历史与容器镜像
#[derive(Debug, Clone, Copy)]
pub struct NextTaskOptions<'a> {
    pub tasks: &'a [Task],
    pub docker_image: &'a str,
}

/// LLM 后端的统一能力
#[async_trait]
pub trait Provider: Send + Sync {
    /// Provider 标识（注册表中的 key）
    fn name(&self) -> &str;

    /// 把 query 概括为不超过 n 个词
    async fn summary(&self, query: &str, n: usize) -> Result<String, ProviderError>;

    /// 推断执行该任务所需的 Docker 镜像名
    async fn docker_image_name(&self, task: &str) -> Result<String, ProviderError>;

    /// 计算下一个 Task；永不失败，出错时返回 ask Task
    async fn next_task(&self, options: NextTaskOptions<'_>) -> Task;
}

/// 单条 user 消息的纯文本补全，去掉首尾空白与引号；空结果视为错误
pub(crate) async fn complete_prompt(
    llm: &dyn LlmClient,
    prompt: String,
) -> Result<String, ProviderError> {
    let text = llm.complete_text(&[Message::user(prompt)]).await?;
    let text = text.trim().trim_matches(|c: char| c == '"' || c == '`').trim();
    if text.is_empty() {
        return Err(ProviderError::EmptyResponse);
    }
    Ok(text.to_string())
}
