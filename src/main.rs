//! # diodesim - 半导体二极管 I-V 特性工具
//!
//! 基于 Shockley 二极管方程计算电流-电压特性曲线，绘制对数
//! 坐标图并导出数据。
//!
//! ## 子命令
//! - `sweep`   - 单器件 I-V 扫描与绘图
//! - `batch`   - 批量处理器件卡片目录或 CSV 清单
//! - `presets` - 列出内置器件预设
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (器件卡片解析)
//!   │     ├── models/    (物理常数与器件参数)
//!   │     ├── iv/        (模型求值、扫描、绘图、导出)
//!   │     └── batch/     (批量收集与并行执行)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod iv;
mod models;
mod parsers;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
