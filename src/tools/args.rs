//! 各工具的参数形状：既用于生成 Tool Catalog 的 JSON Schema，也供执行器解码 Task.args

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// terminal：在容器内执行一条命令
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TerminalArgs {
    #[schemars(description = "Command to be run in the terminal")]
    pub input: String,
    #[schemars(description = "A message to the user describing what is being done")]
    pub message: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum BrowserAction {
    // 读取页面正文
    #[default]
    Read,
    // 只取页面上的链接
    Url,
}

// browser：打开网页查找资料
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BrowserArgs {
    #[schemars(description = "URL to be opened in the browser")]
    pub url: String,
    #[schemars(
        description = "Action to be performed: 'read' returns the page content, 'url' returns the links on the page"
    )]
    pub action: BrowserAction,
    #[schemars(description = "A message to the user describing what is being done")]
    pub message: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CodeAction {
    #[default]
    ReadFile,
    UpdateFile,
}

// code：读取或改写代码文件
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CodeArgs {
    #[schemars(description = "Action to be performed: 'read_file' or 'update_file'")]
    pub action: CodeAction,
    #[schemars(description = "Content to be written to the file, empty when reading")]
    pub content: String,
    #[schemars(description = "Path to the file")]
    pub path: String,
    #[schemars(description = "A message to the user describing what is being done")]
    pub message: String,
}

// ask：向用户提问以获取更多信息
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AskArgs {
    #[schemars(description = "Question to the user")]
    pub input: String,
    #[schemars(description = "A message to the user describing what is being done")]
    pub message: String,
}

// done：整个任务完成
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DoneArgs {
    #[schemars(description = "A summary of what was done")]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(serde_json::to_string(&BrowserAction::Url).unwrap(), r#""url""#);
        assert_eq!(
            serde_json::to_string(&CodeAction::UpdateFile).unwrap(),
            r#""update_file""#
        );
    }

    #[test]
    fn test_code_args_decode() {
        let args: CodeArgs = serde_json::from_str(
            r#"{"action":"read_file","content":"","path":"src/main.rs","message":"Reading main"}"#,
        )
        .unwrap();
        assert_eq!(args.action, CodeAction::ReadFile);
        assert_eq!(args.path, "src/main.rs");
    }
}
