//! Ollama 客户端（原生 /api/chat）
//!
//! 非流式请求，`format: "json"` 约束模型只输出 JSON；工具不以原生 tools 声明，
//! 由调用方在 system prompt 中描述，模型把调用内嵌在文本里。

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::llm::{Choice, LlmClient, LlmError, Message, Role};
use crate::tools::ToolDefinition;

pub const OLLAMA_DEFAULT_URL: &str = "http://localhost:11434";

/// Ollama 客户端：server_url + model，单次请求带超时
pub struct OllamaClient {
    http: Client,
    server_url: String,
    model: String,
    timeout_secs: u64,
}

impl OllamaClient {
    pub fn new(server_url: Option<&str>, model: &str, timeout_secs: u64) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_default();
        Self {
            http,
            server_url: server_url
                .unwrap_or(OLLAMA_DEFAULT_URL)
                .trim_end_matches('/')
                .to_string(),
            model: model.to_string(),
            timeout_secs,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/api/chat", self.server_url)
    }
}

#[async_trait]
impl LlmClient for OllamaClient {
    async fn complete(
        &self,
        messages: &[Message],
        _tools: &[ToolDefinition],
    ) -> Result<Vec<Choice>, LlmError> {
        let request = OllamaRequest {
            model: &self.model,
            messages: messages.iter().map(OllamaMessage::from).collect(),
            stream: false,
            format: "json",
        };

        tracing::debug!(model = %self.model, messages = request.messages.len(), "ollama chat request");

        let response = self
            .http
            .post(self.endpoint())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LlmError::Timeout(self.timeout_secs)
                } else {
                    LlmError::Request(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api(format!("{status}: {body}")));
        }

        let body: OllamaResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        Ok(vec![Choice::text(body.message.content)])
    }
}

#[derive(Debug, Serialize)]
struct OllamaRequest<'a> {
    model: &'a str,
    messages: Vec<OllamaMessage>,
    stream: bool,
    format: &'static str,
}

#[derive(Debug, Serialize)]
struct OllamaMessage {
    role: Role,
    content: String,
}

impl From<&Message> for OllamaMessage {
    fn from(m: &Message) -> Self {
        // 无原生 tool call：把调用还原成模型输出时的文本内嵌形式
        let content = match &m.tool_call {
            Some(call) => {
                let input = serde_json::from_str::<serde_json::Value>(&call.arguments)
                    .unwrap_or_else(|_| serde_json::Value::String(call.arguments.clone()));
                serde_json::json!({ "tool": call.name, "input": input }).to_string()
            }
            None => m.content.clone(),
        };
        Self {
            role: m.role,
            content,
        }
    }
}

#[derive(Debug, Deserialize)]
struct OllamaResponse {
    message: OllamaResponseMessage,
}

#[derive(Debug, Deserialize)]
struct OllamaResponseMessage {
    #[serde(default)]
    content: String,
}
