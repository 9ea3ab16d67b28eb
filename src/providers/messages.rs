//! Task 历史 -> 对话消息
//!
//! 开头固定一条 system；之后按 Task 原顺序逐条展开，顺序即模型看到的因果顺序。

use crate::database::Task;
use crate::llm::{Message, ToolCall};
use crate::tools::{ASK, INPUT};

/// 把有序 Task 历史与 system prompt 转为有序对话
///
/// - `input`：一条 user 消息，内容为 system prompt（保持现有行为，见 DESIGN.md）
/// - tool_call_id 非空：assistant tool call + 紧随其后的 tool 结果
/// - tool_call_id 为空的 `ask`：一条 assistant 文本（Agent 自己生成的提问）
/// - 其余 Task 不产生消息
pub fn tasks_to_messages(tasks: &[Task], system_prompt: &str) -> Vec<Message> {
    let mut messages = Vec::with_capacity(tasks.len() * 2 + 1);
    messages.push(Message::system(system_prompt));

    for task in tasks {
        if task.task_type() == INPUT {
            messages.push(Message::user(system_prompt));
        }

        if task.is_tool_call() {
            messages.push(Message::assistant_tool_call(ToolCall {
                id: task.tool_call_id().to_string(),
                name: task.task_type().to_string(),
                arguments: task.args().to_string(),
            }));
            messages.push(Message::tool_result(
                task.tool_call_id(),
                task.task_type(),
                task.results(),
            ));
        }

        // Agent 在出错时自己生成的 ask（不是模型发起的 tool call）
        if task.task_type() == ASK && !task.is_tool_call() {
            messages.push(Message::assistant(task.message()));
        }
    }

    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::Role;

    fn task(task_type: &str, tool_call_id: &str) -> Task {
        Task {
            task_type: Some(task_type.to_string()),
            tool_call_id: crate::database::non_empty(tool_call_id),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_history() {
        let messages = tasks_to_messages(&[], "sys");
        assert_eq!(messages, vec![Message::system("sys")]);
    }

    #[test]
    fn test_self_generated_ask() {
        let mut ask = task("ask", "");
        ask.message = Some("Proceed?".into());
        let messages = tasks_to_messages(&[ask], "sys");
        assert_eq!(messages, vec![Message::system("sys"), Message::assistant("Proceed?")]);
    }

    #[test]
    fn test_tool_call_pair() {
        let mut terminal = task("terminal", "abc");
        terminal.args = Some(r#"{"cmd":"ls"}"#.into());
        terminal.results = Some("file1\nfile2".into());

        let messages = tasks_to_messages(&[terminal], "sys");
        assert_eq!(
            messages,
            vec![
                Message::system("sys"),
                Message::assistant_tool_call(ToolCall {
                    id: "abc".into(),
                    name: "terminal".into(),
                    arguments: r#"{"cmd":"ls"}"#.into(),
                }),
                Message::tool_result("abc", "terminal", "file1\nfile2"),
            ]
        );
    }

    #[test]
    fn test_model_issued_ask_is_a_pair() {
        let messages = tasks_to_messages(&[task("ask", "call_9")], "sys");
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].role, Role::Assistant);
        assert!(messages[1].is_tool_call());
        assert_eq!(messages[2].role, Role::Tool);
        assert_eq!(messages[2].content, "");
    }

    #[test]
    fn test_input_uses_system_prompt() {
        let mut input = task("input", "");
        input.message = Some("build me a website".into());
        let messages = tasks_to_messages(&[input], "sys");
        assert_eq!(messages, vec![Message::system("sys"), Message::user("sys")]);
    }

    #[test]
    fn test_other_tasks_are_skipped() {
        let tasks = vec![task("terminal", ""), task("done", ""), Task::default()];
        assert_eq!(tasks_to_messages(&tasks, "sys").len(), 1);
    }

    #[test]
    fn test_order_and_count_follow_history() {
        let mut ask = task("ask", "");
        ask.message = Some("Which port?".into());
        let tasks = vec![
            task("input", ""),
            task("terminal", "t1"),
            ask,
            task("code", "c1"),
            task("done", ""),
        ];
        let messages = tasks_to_messages(&tasks, "sys");
        let roles: Vec<Role> = messages.iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![
                Role::System,
                Role::User,
                Role::Assistant,
                Role::Tool,
                Role::Assistant,
                Role::Assistant,
                Role::Tool,
            ]
        );
        assert_eq!(messages[2].tool_call.as_ref().unwrap().id, "t1");
        assert_eq!(messages[4].content, "Which port?");
        assert_eq!(messages[6].tool_call_id.as_deref(), Some("c1"));

        assert_eq!(messages, tasks_to_messages(&tasks, "sys"));
    }
}
