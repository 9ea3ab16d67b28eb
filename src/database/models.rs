//! Task 记录（由持久化层拥有，核心只读写其字段）
//!
//! 可空列统一用 Option 表示；对翻译器而言 None 与空字符串等价。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task 生命周期状态：核心只会创建 InProgress，Done / Error 由外部执行器写入
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    InProgress,
    Done,
    Error,
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskStatus::InProgress => write!(f, "in_progress"),
            TaskStatus::Done => write!(f, "done"),
            TaskStatus::Error => write!(f, "error"),
        }
    }
}

/// 一次 Agent 动作的持久化记录（工具调用、向用户提问、或用户输入）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// 由持久化层在插入时分配
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// 工具名（terminal / browser / code / ask / done）或 input（用户输入）
    #[serde(default, rename = "type")]
    pub task_type: Option<String>,
    #[serde(default)]
    pub status: Option<TaskStatus>,
    /// 工具参数（JSON 对象文本）
    #[serde(default)]
    pub args: Option<String>,
    /// 工具执行输出，由外部执行器填充
    #[serde(default)]
    pub results: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub flow_id: Option<i64>,
    /// 仅当 Task 来自模型的原生 tool call 时存在
    #[serde(default)]
    pub tool_call_id: Option<String>,
}

impl Task {
    pub fn task_type(&self) -> &str {
        self.task_type.as_deref().unwrap_or("")
    }

    pub fn args(&self) -> &str {
        self.args.as_deref().unwrap_or("")
    }

    pub fn results(&self) -> &str {
        self.results.as_deref().unwrap_or("")
    }

    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or("")
    }

    pub fn tool_call_id(&self) -> &str {
        self.tool_call_id.as_deref().unwrap_or("")
    }

    /// 是否由模型原生 tool call 产生（tool_call_id 非空）
    pub fn is_tool_call(&self) -> bool {
        !self.tool_call_id().is_empty()
    }
}

/// 可空文本列：空串视为 None
pub fn non_empty(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
