//! 对话消息（提交给 chat completion 的有序 turn）
//!
//! system / user / assistant 为纯文本；assistant 也可携带一次 tool call，tool 角色承载对应结果。

use serde::{Deserialize, Serialize};

/// 消息角色（与 chat completion API 一致）
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
    Tool,
}

/// 模型发起的一次工具调用：id 用于把调用与之后的结果配对
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCall {
    pub id: String,
    pub name: String,
    /// 参数 JSON 文本（原样保留，不做解析）
    pub arguments: String,
}

/// 单条对话消息
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    #[serde(default)]
    pub content: String,
    /// 仅 assistant 发起工具调用时存在
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call: Option<ToolCall>,
    /// 仅 tool 结果消息存在
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
    /// 仅 tool 结果消息存在：产生该结果的工具名
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Message {
    fn text(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            tool_call: None,
            tool_call_id: None,
            name: None,
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::text(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::text(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::text(Role::Assistant, content)
    }

    pub fn assistant_tool_call(call: ToolCall) -> Self {
        Self {
            tool_call: Some(call),
            ..Self::text(Role::Assistant, "")
        }
    }

    pub fn tool_result(
        tool_call_id: impl Into<String>,
        name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            tool_call_id: Some(tool_call_id.into()),
            name: Some(name.into()),
            ..Self::text(Role::Tool, content)
        }
    }

    pub fn is_tool_call(&self) -> bool {
        self.tool_call.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(Message::system("s").role, Role::System);
        assert_eq!(Message::user("u").content, "u");

        let call = Message::assistant_tool_call(ToolCall {
            id: "abc".into(),
            name: "terminal".into(),
            arguments: "{}".into(),
        });
        assert_eq!(call.role, Role::Assistant);
        assert!(call.is_tool_call());
        assert!(call.content.is_empty());

        let result = Message::tool_result("abc", "terminal", "ok");
        assert_eq!(result.role, Role::Tool);
        assert_eq!(result.tool_call_id.as_deref(), Some("abc"));
        assert_eq!(result.name.as_deref(), Some("terminal"));
    }

    #[test]
    fn test_plain_message_serializes_without_tool_fields() {
        let json = serde_json::to_value(Message::assistant("hi")).unwrap();
        assert_eq!(json["role"], "assistant");
        assert!(json.get("tool_call").is_none());
        assert!(json.get("tool_call_id").is_none());
    }
}
