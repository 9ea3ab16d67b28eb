//! LLM 层：对话消息、客户端抽象与实现（OpenAI 兼容 / Ollama / Mock）

pub mod message;
pub mod mock;
pub mod ollama;
pub mod openai;
pub mod traits;

pub use message::{Message, Role, ToolCall};
pub use mock::{MockLlmClient, MockRequest};
pub use ollama::OllamaClient;
pub use openai::OpenAiClient;
pub use traits::{Choice, LlmClient, LlmError};
