//! AI Coder - Provider 抽象与 Task ↔ 对话消息转换核心
//!
//! 模块划分：
//! - **config**: 应用配置加载（TOML + 环境变量）
//! - **core**: 错误分类
//! - **database**: Task 记录（持久化由外部负责）
//! - **llm**: 对话消息、LLM 客户端抽象与实现（OpenAI 兼容 / Ollama / Mock）
//! - **observability**: tracing 日志初始化
//! - **providers**: Provider 接口、注册表、Task ↔ 消息转换、Call 解析
//! - **tools**: Tool Catalog 与参数 Schema

pub mod config;
pub mod core;
pub mod database;
pub mod llm;
pub mod observability;
pub mod providers;
pub mod tools;

pub use database::{Task, TaskStatus};
pub use providers::{provider_factory, NextTaskOptions, Provider, ProviderRegistry};
