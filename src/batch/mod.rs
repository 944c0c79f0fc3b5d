//! # 批量处理模块
//!
//! 提供器件卡片文件的批量收集与并行处理能力。
//!
//! ## 依赖关系
//! - 被 `commands/batch.rs` 使用
//! - 子模块: collector, runner

pub mod collector;
pub mod runner;

pub use collector::FileCollector;
pub use runner::{BatchResult, BatchRunner, ProcessResult};
