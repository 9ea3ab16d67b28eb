//! 应用配置：从 config/default.toml 与环境变量加载
//!
//! 加载顺序：先读 TOML 文件，再用环境变量 `AI_CODER__*` 覆盖（双下划线表示嵌套，如 `AI_CODER__LLM__PROVIDER=ollama`）。

use std::path::PathBuf;

use serde::Deserialize;

/// 应用配置根（对应 config/default.toml 的顶层）
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub app: AppSection,
    pub llm: LlmSection,
}

/// [app] 段
#[derive(Debug, Clone, Deserialize)]
pub struct AppSection {
    pub name: Option<String>,
    /// 尚未推断出镜像时使用的默认 Docker 镜像
    #[serde(default = "default_docker_image")]
    pub default_docker_image: String,
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            name: None,
            default_docker_image: default_docker_image(),
        }
    }
}

fn default_docker_image() -> String {
    "debian:latest".to_string()
}

/// [llm] 段：Provider 选择、各后端参数与超时
#[derive(Debug, Clone, Deserialize)]
pub struct LlmSection {
    /// Provider 标识：openai / ollama
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default)]
    pub openai: LlmOpenAiSection,
    #[serde(default)]
    pub ollama: LlmOllamaSection,
    #[serde(default)]
    pub timeouts: LlmTimeoutsSection,
}

impl Default for LlmSection {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            openai: LlmOpenAiSection::default(),
            ollama: LlmOllamaSection::default(),
            timeouts: LlmTimeoutsSection::default(),
        }
    }
}

fn default_provider() -> String {
    "openai".to_string()
}

/// [llm.openai] 段；api_key 未设置时读取 OPENAI_API_KEY
#[derive(Debug, Clone, Deserialize)]
pub struct LlmOpenAiSection {
    #[serde(default = "default_openai_model")]
    pub model: String,
    pub base_url: Option<String>,
    pub api_key: Option<String>,
}

impl Default for LlmOpenAiSection {
    fn default() -> Self {
        Self {
            model: default_openai_model(),
            base_url: None,
            api_key: None,
        }
    }
}

fn default_openai_model() -> String {
    "gpt-4-0125-preview".to_string()
}

/// [llm.ollama] 段
#[derive(Debug, Clone, Deserialize)]
pub struct LlmOllamaSection {
    #[serde(default = "default_ollama_model")]
    pub model: String,
    #[serde(default = "default_ollama_url")]
    pub server_url: String,
}

impl Default for LlmOllamaSection {
    fn default() -> Self {
        Self {
            model: default_ollama_model(),
            server_url: default_ollama_url(),
        }
    }
}

fn default_ollama_model() -> String {
    "llama3".to_string()
}

fn default_ollama_url() -> String {
    crate::llm::ollama::OLLAMA_DEFAULT_URL.to_string()
}

/// [llm.timeouts] 段（秒）
#[derive(Debug, Clone, Deserialize)]
pub struct LlmTimeoutsSection {
    #[serde(default = "default_request_timeout")]
    pub request: u64,
}

impl Default for LlmTimeoutsSection {
    fn default() -> Self {
        Self {
            request: default_request_timeout(),
        }
    }
}

fn default_request_timeout() -> u64 {
    60
}

/// 从 config 目录加载配置，环境变量 AI_CODER__* 可覆盖
///
/// 1. 按顺序查找 config/default.toml、../config/default.toml、default.toml，找到则作为第一源
/// 2. 若传入 config_path 且文件存在，则追加该文件（可覆盖前面的键）
/// 3. 最后叠加环境变量 AI_CODER__*（双下划线表示嵌套键）
pub fn load_config(config_path: Option<PathBuf>) -> Result<AppConfig, config::ConfigError> {
    let mut builder = config::Config::builder();

    let default_names = ["config/default", "../config/default", "default"];
    for name in default_names {
        let path = format!("{}.toml", name);
        if std::path::Path::new(&path).exists() {
            builder = builder.add_source(config::File::with_name(name).required(false));
            break;
        }
    }

    if let Some(ref path) = config_path {
        if path.exists() {
            builder = builder.add_source(config::File::from(path.clone()).required(false));
        }
    }

    builder = builder.add_source(
        config::Environment::with_prefix("AI_CODER")
            .separator("__")
            .try_parsing(true),
    );

    let c = builder.build()?;
    c.try_deserialize()
}
