//! 工具参数 JSON Schema 生成（schemars 自动生成）
//!
//! parameters_schema 产出内联的对象 Schema（无 $schema / definitions），直接作为 function parameters；
//! text_call_schema_json 描述文本内嵌调用的 `{"tool", "input", "message"}` 结构，拼入 system prompt。

use std::collections::BTreeMap;

use schemars::gen::SchemaSettings;
use schemars::JsonSchema;
use serde_json::Value;

// 文本内嵌调用格式（仅用于 Schema 生成，与 Call 解析结构一致）
#[allow(dead_code)]
#[derive(JsonSchema)]
struct TextCallFormat {
    #[schemars(description = "Name of the tool to call")]
    tool: String,
    #[schemars(description = "Arguments of the tool, every value is a string")]
    input: BTreeMap<String, String>,
    #[schemars(description = "A message to the user describing what is being done")]
    message: String,
}

/// 生成某个参数结构的内联对象 Schema
pub fn parameters_schema<T: JsonSchema>() -> Value {
    let settings = SchemaSettings::draft07().with(|s| {
        s.inline_subschemas = true;
        s.meta_schema = None;
    });
    let root = settings.into_generator().into_root_schema_for::<T>();
    serde_json::to_value(root.schema).unwrap_or_else(|_| {
        serde_json::json!({
            "type": "object",
            "properties": {},
            "required": []
        })
    })
}

/// 返回文本内嵌调用的 JSON Schema 字符串，可拼入 system prompt
pub fn text_call_schema_json() -> String {
    let schema = parameters_schema::<TextCallFormat>();
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}
