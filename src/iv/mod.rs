//! # I-V 特性计算模块
//!
//! 提供二极管电流-电压特性的计算、绘图与导出功能。
//!
//! ## 子模块
//! - `model`: Shockley 方程求值
//! - `sweep`: 电压扫描驱动
//! - `plot`: 图表生成
//! - `export`: 数据导出
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/device.rs`

pub mod export;
pub mod model;
pub mod plot;
pub mod sweep;

pub use model::ShockleyModel;
pub use sweep::{run_sweep, IvCurve, VoltageSweep};
