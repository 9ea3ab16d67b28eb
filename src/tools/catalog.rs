//! Tool Catalog：暴露给模型的工具定义（名称 / 描述 / 参数 Schema）
//!
//! 顺序固定，进程内首次访问时生成一次，此后只读共享。

use std::sync::LazyLock;

use serde::Serialize;
use serde_json::Value;

use crate::tools::schema::parameters_schema;
use crate::tools::{AskArgs, BrowserArgs, CodeArgs, DoneArgs, TerminalArgs};

pub const TERMINAL: &str = "terminal";
pub const BROWSER: &str = "browser";
pub const CODE: &str = "code";
pub const ASK: &str = "ask";
pub const DONE: &str = "done";
/// 用户输入的 Task 类型（不是工具，不进入 Catalog）
pub const INPUT: &str = "input";

/// 单个工具定义，对应 chat completion 的 function tool
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: Value,
}

static TOOLS: LazyLock<Vec<ToolDefinition>> = LazyLock::new(|| {
    vec![
        ToolDefinition {
            name: TERMINAL,
            description: "Calls a terminal command",
            parameters: parameters_schema::<TerminalArgs>(),
        },
        ToolDefinition {
            name: BROWSER,
            description: "Opens a browser to look for additional information",
            parameters: parameters_schema::<BrowserArgs>(),
        },
        ToolDefinition {
            name: CODE,
            description: "Modifies or reads code files",
            parameters: parameters_schema::<CodeArgs>(),
        },
        ToolDefinition {
            name: ASK,
            description: "Sends a question to the user for additional information",
            parameters: parameters_schema::<AskArgs>(),
        },
        ToolDefinition {
            name: DONE,
            description: "Mark the whole task as done. Should be called at the very end when everything is completed",
            parameters: parameters_schema::<DoneArgs>(),
        },
    ]
});

/// 全部工具定义（有序）
pub fn tools() -> &'static [ToolDefinition] {
    &TOOLS
}

pub fn find_tool(name: &str) -> Option<&'static ToolDefinition> {
    TOOLS.iter().find(|t| t.name == name)
}

pub fn is_known_tool(name: &str) -> bool {
    find_tool(name).is_some()
}

/// 工具列表 JSON（name / description / parameters），用于拼入文本调用的 system prompt
pub fn catalog_json() -> String {
    serde_json::to_string_pretty(tools()).unwrap_or_else(|_| "[]".to_string())
}
