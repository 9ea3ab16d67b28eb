//! 工具层：参数形状、JSON Schema 生成、只读 Tool Catalog

pub mod args;
pub mod catalog;
pub mod schema;

pub use args::{AskArgs, BrowserAction, BrowserArgs, CodeAction, CodeArgs, DoneArgs, TerminalArgs};
pub use catalog::{
    catalog_json, find_tool, is_known_tool, tools, ToolDefinition, ASK, BROWSER,
    CODE, DONE, INPUT, TERMINAL,
};
pub use schema::{parameters_schema, text_call_schema_json};
