//! Call 解析：从模型文本中取出 `{"tool", "input", "message"}` 调用
//!
//! 依次尝试：整段文本、```json 代码块、最外层 `{ ... }` 片段。

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::CallError;

/// 文本内嵌的一次工具调用（不落库）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Call {
    #[serde(default)]
    pub tool: String,
    #[serde(default)]
    pub input: BTreeMap<String, String>,
    #[serde(default)]
    pub message: String,
}

/// 解析文本内嵌调用；解码失败或 tool 为空均返回 Err
pub fn parse_call(text: &str) -> Result<Call, CallError> {
    tracing::debug!(text = %text, "Unmarshalling tool call");

    let call = candidates(text)
        .into_iter()
        .find_map(|candidate| serde_json::from_str::<Call>(candidate).ok());

    let call = match call {
        Some(call) => call,
        None => {
            let err = serde_json::from_str::<Call>(text.trim())
                .err()
                .map(|e| e.to_string())
                .unwrap_or_else(|| "no JSON object found".to_string());
            tracing::warn!(error = %err, "Failed to unmarshal tool call");
            return Err(CallError::InvalidJson(err));
        }
    };

    if call.tool.is_empty() {
        tracing::warn!("Unmarshalled call has an empty tool name");
        return Err(CallError::EmptyTool);
    }

    tracing::debug!(tool = %call.tool, "Unmarshalled tool call");
    Ok(call)
}

/// 可能承载调用 JSON 的片段，按优先级排列
fn candidates(text: &str) -> Vec<&str> {
    let trimmed = text.trim();
    let mut out = vec![trimmed];

    if let Some(start) = trimmed.find("```json") {
        let rest = &trimmed[start + 7..];
        let block = rest.find("```").map(|end| &rest[..end]).unwrap_or(rest);
        out.push(block.trim());
    }

    if let (Some(start), Some(end)) = (trimmed.find('{'), trimmed.rfind('}')) {
        if start < end {
            out.push(&trimmed[start..=end]);
        }
    }

    out
}
