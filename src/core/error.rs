//! 错误类型
//!
//! 构造 Task 路径上的错误（CallError / TaskError）都会在 Provider 边界被吸收为 ask Task；
//! 只有 ProviderError::UnknownProvider 这类配置错误需要调用方处理。

use thiserror::Error;

use crate::llm::LlmError;

/// 文本内嵌调用无法解析（解码失败或 tool 为空，调用方同等对待）
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CallError {
    #[error("Invalid call JSON: {0}")]
    InvalidJson(String),

    #[error("Call has no tool name")]
    EmptyTool,
}

/// 由模型响应构造 Task 失败
#[derive(Error, Debug)]
pub enum TaskError {
    #[error("Can't parse call from text: {0}")]
    Parse(#[from] CallError),

    #[error("Failed to serialize args: {0}")]
    Serialization(String),

    #[error("No choices found")]
    NoChoices,

    #[error("No tool calls found")]
    NoToolCalls,

    #[error("No tool name found")]
    EmptyToolName,

    #[error("Failed to decode tool arguments: {0}")]
    Decode(String),
}

/// Provider 层错误
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("unknown provider: {0}")]
    UnknownProvider(String),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Empty response from model")]
    EmptyResponse,
}
