//! # 数据模型模块
//!
//! 定义物理常数和二极管器件参数数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`、`iv/` 和 `commands/` 使用
//! - 子模块: constants, device

pub mod constants;
pub mod device;

pub use device::{DeviceParameters, DeviceRecord};
