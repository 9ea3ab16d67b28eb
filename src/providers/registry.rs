//! Provider 注册表：标识 -> 构造函数
//!
//! 新后端只需 register 一个构造函数，无需修改查找逻辑。构造过程不发起网络请求。

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::core::ProviderError;
use crate::providers::{OllamaProvider, OpenAiProvider, Provider};

pub const OPENAI: &str = "openai";
pub const OLLAMA: &str = "ollama";

/// Provider 构造函数
pub type ProviderConstructor = fn(&AppConfig) -> Arc<dyn Provider>;

#[derive(Default)]
pub struct ProviderRegistry {
    constructors: HashMap<String, ProviderConstructor>,
}

impl ProviderRegistry {
    /// 空注册表
    pub fn new() -> Self {
        Self::default()
    }

    /// 内置 openai / ollama
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(OPENAI, |cfg| Arc::new(OpenAiProvider::from_config(cfg)));
        registry.register(OLLAMA, |cfg| Arc::new(OllamaProvider::from_config(cfg)));
        registry
    }

    pub fn register(&mut self, id: impl Into<String>, constructor: ProviderConstructor) {
        self.constructors.insert(id.into(), constructor);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.constructors.contains_key(id)
    }

    /// 已注册的标识（排序后）
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.constructors.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// 按标识创建 Provider；未注册的标识返回 UnknownProvider
    pub fn create(&self, id: &str, cfg: &AppConfig) -> Result<Arc<dyn Provider>, ProviderError> {
        let constructor = self
            .constructors
            .get(id)
            .ok_or_else(|| ProviderError::UnknownProvider(id.to_string()))?;
        Ok(constructor(cfg))
    }
}

/// 用内置注册表按标识创建 Provider
pub fn provider_factory(id: &str, cfg: &AppConfig) -> Result<Arc<dyn Provider>, ProviderError> {
    ProviderRegistry::with_defaults().create(id, cfg)
}
