//! Provider 集成测试：Task 历史 -> 对话 -> 模型响应 -> 新 Task

use std::sync::Arc;

use ai_coder::config::AppConfig;
use ai_coder::core::{ProviderError, TaskError};
use ai_coder::database::{Task, TaskStatus};
use ai_coder::llm::{Choice, Message, MockLlmClient, Role, ToolCall};
use ai_coder::providers::{
    provider_factory, tasks_to_messages, text_to_task, text_to_task_or_ask, tool_calls_to_task,
    NextTaskOptions, OllamaProvider, OpenAiProvider, Provider,
};

fn tool_task(task_type: &str, id: &str, args: &str, results: &str) -> Task {
    Task {
        task_type: Some(task_type.into()),
        status: Some(TaskStatus::Done),
        args: Some(args.into()),
        results: Some(results.into()),
        tool_call_id: Some(id.into()),
        flow_id: Some(1),
        ..Default::default()
    }
}

#[test]
fn test_terminal_history_scenario() {
    let history = vec![tool_task("terminal", "abc", r#"{"cmd":"ls"}"#, "file1\nfile2")];
    let messages = tasks_to_messages(&history, "prompt");

    assert_eq!(
        messages,
        vec![
            Message::system("prompt"),
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
fn test_ask_history_scenario() {
    let history = vec![Task {
        task_type: Some("ask".into()),
        tool_call_id: Some(String::new()),
        message: Some("Proceed?".into()),
        ..Default::default()
    }];
    let messages = tasks_to_messages(&history, "prompt");
    assert_eq!(messages, vec![Message::system("prompt"), Message::assistant("Proceed?")]);
}

#[test]
fn test_constructed_tasks_translate_back() {
    // 原生 tool call 构造的 Task 应还原为配对消息，文本路径构造的 Task 不产生消息
    let native = tool_calls_to_task(&[Choice::tool_call(ToolCall {
        id: "call_7".into(),
        name: "browser".into(),
        arguments: r#"{"url":"https://docs.rs","action":"read","message":"Reading docs"}"#.into(),
    })])
    .unwrap();
    let embedded = text_to_task(r#"{"tool":"terminal","input":{"cmd":"ls"}}"#).unwrap();
    let fallback = text_to_task_or_ask("???");

    let messages = tasks_to_messages(&[native, embedded, fallback], "prompt");
    let roles: Vec<Role> = messages.iter().map(|m| m.role).collect();
    assert_eq!(
        roles,
        vec![Role::System, Role::Assistant, Role::Tool, Role::Assistant]
    );
    assert_eq!(messages[1].tool_call.as_ref().unwrap().name, "browser");
    assert!(messages[3].content.ends_with("What should I do next?"));
}

#[test]
fn test_args_round_trip() {
    let task = text_to_task(r#"{"tool":"terminal","input":{"cmd":"ls"},"message":"List"}"#).unwrap();
    let args: serde_json::Value = serde_json::from_str(task.args()).unwrap();
    assert_eq!(args, serde_json::json!({"cmd": "ls"}));
}

#[test]
fn test_tool_call_errors() {
    assert!(matches!(tool_calls_to_task(&[]), Err(TaskError::NoChoices)));
    let nameless = Choice::tool_call(ToolCall {
        id: "x".into(),
        name: String::new(),
        arguments: "{}".into(),
    });
    assert!(matches!(tool_calls_to_task(&[nameless]), Err(TaskError::EmptyToolName)));
}

#[test]
fn test_factory() {
    let cfg = AppConfig::default();
    assert_eq!(provider_factory("ollama", &cfg).unwrap().name(), "ollama");
    assert!(matches!(
        provider_factory("gemini", &cfg),
        Err(ProviderError::UnknownProvider(_))
    ));
}

#[tokio::test]
async fn test_openai_multi_turn_flow() {
    let mock = Arc::new(
        MockLlmClient::new()
            .with_choices(vec![Choice::tool_call(ToolCall {
                id: "call_1".into(),
                name: "terminal".into(),
                arguments: r#"{"input":"ls","message":"Looking around"}"#.into(),
            })])
            .with_choices(vec![Choice::tool_call(ToolCall {
                id: "call_2".into(),
                name: "done".into(),
                arguments: r#"{"message":"All set"}"#.into(),
            })]),
    );
    let provider = OpenAiProvider::new(mock.clone());

    let mut history = vec![Task {
        task_type: Some("input".into()),
        message: Some("List the files".into()),
        ..Default::default()
    }];

    let mut first = provider
        .next_task(NextTaskOptions {
            tasks: &history,
            docker_image: "debian:latest",
        })
        .await;
    assert_eq!(first.task_type(), "terminal");
    assert_eq!(first.message(), "Looking around");

    // 外部执行器写回结果
    first.results = Some("README.md".into());
    first.status = Some(TaskStatus::Done);
    history.push(first);

    let second = provider
        .next_task(NextTaskOptions {
            tasks: &history,
            docker_image: "debian:latest",
        })
        .await;
    assert_eq!(second.task_type(), "done");
    assert_eq!(second.message(), "All set");
    assert_eq!(second.tool_call_id(), "call_2");

    let requests = mock.requests();
    assert_eq!(requests.len(), 2);
    let last = &requests[1].messages;
    assert_eq!(last.len(), 4);
    assert_eq!(last[1].role, Role::User);
    assert_eq!(last[3].role, Role::Tool);
    assert_eq!(last[3].content, "README.md");
    assert_eq!(last[3].tool_call_id.as_deref(), Some("call_1"));
}

#[tokio::test]
async fn test_ollama_never_fails() {
    let provider = OllamaProvider::new(Arc::new(
        MockLlmClient::new()
            .with_error("connection refused")
            .with_text(r#"{"tool":"","input":{}}"#)
            .with_choices(Vec::new()),
    ));
    for _ in 0..3 {
        let task = provider
            .next_task(NextTaskOptions {
                tasks: &[],
                docker_image: "debian:latest",
            })
            .await;
        assert_eq!(task.task_type(), "ask");
        assert_eq!(task.args(), "{}");
        assert_eq!(task.status, Some(TaskStatus::InProgress));
        assert!(!task.message().is_empty());
    }
}
