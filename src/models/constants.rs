//! # 物理常数
//!
//! 定义半导体物理计算使用的基本物理常数（2019 SI 精确值）。
//!
//! ## 依赖关系
//! - 被 `models/device.rs` 使用
//! - 无外部模块依赖

/// Boltzmann 常数 (J/K)
pub const BOLTZMANN: f64 = 1.380649e-23;

/// 基本电荷 (C)
pub const ELEMENTARY_CHARGE: f64 = 1.602176634e-19;
