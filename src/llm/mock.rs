//! Mock LLM 客户端（用于测试，无需 API）
//!
//! 按顺序返回预置的响应，并记录每次收到的请求；预置队列耗尽后，把最后一条 system / user 消息
//! 回显为文本内嵌的 ask 调用，便于本地跑通 next_task 流程。

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::llm::{Choice, LlmClient, LlmError, Message, Role};
use crate::tools::ToolDefinition;

/// 一次被记录的请求
#[derive(Clone, Debug)]
pub struct MockRequest {
    pub messages: Vec<Message>,
    pub tool_names: Vec<String>,
}

/// Mock 客户端：预置响应队列 + 请求记录
#[derive(Debug, Default)]
pub struct MockLlmClient {
    responses: Mutex<VecDeque<Result<Vec<Choice>, String>>>,
    requests: Mutex<Vec<MockRequest>>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_choices(self, choices: Vec<Choice>) -> Self {
        self.push(Ok(choices));
        self
    }

    pub fn with_text(self, content: impl Into<String>) -> Self {
        self.with_choices(vec![Choice::text(content)])
    }

    pub fn with_error(self, message: impl Into<String>) -> Self {
        self.push(Err(message.into()));
        self
    }

    fn push(&self, response: Result<Vec<Choice>, String>) {
        if let Ok(mut queue) = self.responses.lock() {
            queue.push_back(response);
        }
    }

    /// 到目前为止收到的全部请求
    pub fn requests(&self) -> Vec<MockRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(
        &self,
        messages: &[Message],
        tools: &[ToolDefinition],
    ) -> Result<Vec<Choice>, LlmError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(MockRequest {
                messages: messages.to_vec(),
                tool_names: tools.iter().map(|t| t.name.to_string()).collect(),
            });
        }

        let scripted = self
            .responses
            .lock()
            .ok()
            .and_then(|mut queue| queue.pop_front());

        match scripted {
            Some(Ok(choices)) => Ok(choices),
            Some(Err(e)) => Err(LlmError::Api(e)),
            None => {
                let last = messages
                    .iter()
                    .rev()
                    .find(|m| matches!(m.role, Role::User | Role::System))
                    .map(|m| m.content.as_str())
                    .unwrap_or("(no input)");
                let call = serde_json::json!({
                    "tool": "ask",
                    "input": { "input": last },
                    "message": format!("Echo from Mock: {last}"),
                });
                Ok(vec![Choice::text(call.to_string())])
            }
        }
    }
}
