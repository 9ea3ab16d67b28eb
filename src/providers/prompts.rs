//! Prompt 模板：summary、Docker 镜像推断、Agent system prompt、文本调用说明

use crate::tools::{catalog_json, text_call_schema_json};

/// 把 query 概括为不超过 n 个词
pub fn summary_prompt(query: &str, n: usize) -> String {
    format!(
        "Make a summary of the following text in no more than {n} words. \
         Respond with the summary only, without quotes or any other text.\n\n\
         Text:\n{query}"
    )
}

/// 推断执行该任务所需的 Docker 镜像
pub fn docker_image_prompt(task: &str) -> String {
    format!(
        "Pick the most suitable Docker image for running the following task. \
         Prefer official images with a specific tag (for example node:21 or python:3.12). \
         Respond with the image name only, without quotes or any other text.\n\n\
         Task:\n{task}"
    )
}

/// next_task 的 system prompt
pub fn agent_prompt(docker_image: &str) -> String {
    format!(
        "You are an autonomous software engineer working inside a Docker container \
         based on the image `{docker_image}`. You are given a task by the user and the \
         history of the actions you already performed together with their results.\n\
         Decide on the single next action and call exactly one tool:\n\
         - terminal: run a command in the container\n\
         - browser: open a web page to look for additional information\n\
         - code: read or update a file\n\
         - ask: ask the user when you are blocked or need a decision\n\
         - done: finish when the whole task is completed\n\
         Always fill the `message` argument with a short description of what you are doing."
    )
}

/// 不支持原生 tool call 的后端：在 system prompt 末尾说明工具目录与内嵌调用格式
pub fn text_call_instructions() -> String {
    format!(
        "Respond with a single JSON object and nothing else. The object must match this schema:\n\
         {}\n\
         `tool` is one of the tools below and `input` holds its arguments as strings:\n\
         {}",
        text_call_schema_json(),
        catalog_json()
    )
}
