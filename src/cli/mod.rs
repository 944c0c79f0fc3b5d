//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `sweep`: 单器件 I-V 扫描与绘图
//! - `batch`: 批量处理器件卡片目录或 CSV 清单
//! - `presets`: 列出内置器件预设
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: sweep, batch

pub mod batch;
pub mod sweep;

use clap::{Parser, Subcommand};

/// diodesim - 半导体二极管 I-V 特性工具
#[derive(Parser)]
#[command(name = "diodesim")]
#[command(version)]
#[command(about = "A semiconductor diode I-V characteristic calculator and plotter", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Compute and plot the I-V curve of a single diode
    Sweep(sweep::SweepArgs),

    /// Batch-process a directory of device cards or a CSV manifest
    Batch(batch::BatchArgs),

    /// List built-in device presets
    Presets,
}
