//! Task 构造：把模型响应（文本内嵌调用 / 原生 tool call）转为新的 in_progress Task
//!
//! 任何无法恢复的失败都收敛到 ask_task：生成一个「询问用户」的 Task，保证 Agent 循环总有下一步可做。

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::core::TaskError;
use crate::database::{non_empty, Task, TaskStatus};
use crate::llm::Choice;
use crate::providers::call::parse_call;
use crate::tools::{is_known_tool, AskArgs, ASK};

/// 兜底 ask Task：args 为 "{}"，message 为「原因. What should I do next?」，不带 tool_call_id
pub fn ask_task(reason: &str) -> Task {
    Task {
        task_type: Some(ASK.to_string()),
        status: Some(TaskStatus::InProgress),
        args: Some("{}".to_string()),
        message: Some(format!("{reason}. What should I do next?")),
        ..Default::default()
    }
}

/// 文本内嵌调用 -> Task（tool_call_id 为空）
///
/// 解析失败返回 `TaskError::Parse`；参数序列化失败不外抛，直接降级为 ask Task。
pub fn text_to_task(text: &str) -> Result<Task, TaskError> {
    let call = parse_call(text)?;
    warn_unknown_tool(&call.tool);

    let args = match serde_json::to_string(&call.input) {
        Ok(args) => args,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to marshal call args, asking user");
            return Ok(ask_task("There was an error running the terminal command"));
        }
    };

    // 模型有时不给 message，此时用参数本身作为 message
    let message = if call.message.is_empty() {
        args.clone()
    } else {
        call.message
    };

    Ok(Task {
        task_type: Some(call.tool),
        status: Some(TaskStatus::InProgress),
        args: Some(args),
        message: Some(message),
        ..Default::default()
    })
}

/// 按 Ask 参数形状解码：字段可缺省或为 null，存在时必须是字符串
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AskFields {
    input: Option<String>,
    message: Option<String>,
}

impl From<AskFields> for AskArgs {
    fn from(fields: AskFields) -> Self {
        Self {
            input: fields.input.unwrap_or_default(),
            message: fields.message.unwrap_or_default(),
        }
    }
}

/// 原生 tool call -> Task：只取第一个 choice 的第一个 tool call
pub fn tool_calls_to_task(choices: &[Choice]) -> Result<Task, TaskError> {
    let choice = choices.first().ok_or(TaskError::NoChoices)?;
    let call = choice.tool_calls.first().ok_or(TaskError::NoToolCalls)?;

    if call.name.is_empty() {
        return Err(TaskError::EmptyToolName);
    }
    warn_unknown_tool(&call.name);

    let (arguments, ask) = decode_arguments(&call.arguments)?;
    // 保留完整参数对象，path / url 等工具专属字段不能丢
    let args = serde_json::to_string(&arguments)
        .map_err(|e| TaskError::Serialization(e.to_string()))?;

    let message = if ask.message.is_empty() {
        call.arguments.clone()
    } else {
        ask.message
    };

    Ok(Task {
        task_type: Some(call.name.clone()),
        status: Some(TaskStatus::InProgress),
        args: Some(args),
        message: Some(message),
        tool_call_id: non_empty(call.id.clone()),
        ..Default::default()
    })
}

/// 参数必须是 JSON 对象，且符合 Ask 参数形状
fn decode_arguments(raw: &str) -> Result<(Map<String, Value>, AskArgs), TaskError> {
    let arguments: Map<String, Value> =
        serde_json::from_str(raw).map_err(|e| TaskError::Decode(e.to_string()))?;
    let ask: AskFields = serde_json::from_value(Value::Object(arguments.clone()))
        .map_err(|e| TaskError::Decode(e.to_string()))?;
    Ok((arguments, ask.into()))
}

/// 永不失败的文本路径：任何错误都转为 ask Task
pub fn text_to_task_or_ask(text: &str) -> Task {
    text_to_task(text).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to build task from text, asking user");
        ask_task("There was an error getting the next task")
    })
}

/// 永不失败的原生 tool call 路径：任何错误都转为 ask Task
pub fn tool_calls_to_task_or_ask(choices: &[Choice]) -> Task {
    tool_calls_to_task(choices).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to build task from tool calls, asking user");
        ask_task("There was an error getting the next task")
    })
}

fn warn_unknown_tool(name: &str) {
    if !is_known_tool(name) {
        tracing::warn!(tool = %name, "Model requested a tool that is not in the catalog");
    }
}
