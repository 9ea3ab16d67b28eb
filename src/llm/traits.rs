//! LLM 客户端抽象
//!
//! 核心只依赖「发送对话 + 工具目录，取回 choices」这一能力；OpenAI / Ollama / Mock 各自实现 LlmClient。

use async_trait::async_trait;
use thiserror::Error;

use crate::llm::{Message, ToolCall};
use crate::tools::ToolDefinition;

/// 补全结果中的一个候选：文本内容与（可能为空的）原生 tool calls
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Choice {
    pub content: String,
    pub tool_calls: Vec<ToolCall>,
}

impl Choice {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            tool_calls: Vec::new(),
        }
    }

    pub fn tool_call(call: ToolCall) -> Self {
        Self {
            content: String::new(),
            tool_calls: vec![call],
        }
    }
}

/// 补全调用的错误（传输、API、响应格式）
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// LLM 客户端 trait：一次非流式 chat completion
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// 提交对话；tools 为空时不声明任何工具
    async fn complete(
        &self,
        messages: &[Message],
        tools: &[ToolDefinition],
    ) -> Result<Vec<Choice>, LlmError>;

    /// 只取首个候选的文本内容，供 summary 等纯文本场景使用
    async fn complete_text(&self, messages: &[Message]) -> Result<String, LlmError> {
        let choices = self.complete(messages, &[]).await?;
        Ok(choices
            .into_iter()
            .next()
            .map(|c| c.content)
            .unwrap_or_default())
    }
}
