//! 持久化实体：核心只消费 / 产出 Task 值，存储与查询由外部负责

pub mod models;

pub use models::{non_empty, Task, TaskStatus};
