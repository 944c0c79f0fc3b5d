//! # 解析器模块
//!
//! 提供器件卡片文件的解析器。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 子模块: model_card

pub mod model_card;

pub use model_card::{parse_device_card, DeviceCard};
