//! # batch 子命令 CLI 定义
//!
//! 批量扫描参数：输入为器件卡片目录或 CSV 清单文件。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/batch.rs`
//! - 复用 `cli/sweep.rs` 的 OutputFormat

use clap::Args;
use std::path::PathBuf;

use crate::cli::sweep::OutputFormat;

/// batch 子命令参数
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Input: directory of device cards, or a CSV manifest file
    /// (columns: name, saturation_current, ideality, temperature)
    pub input: PathBuf,

    /// Output directory for generated files
    #[arg(short, long, default_value = "iv_curves")]
    pub output: PathBuf,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Voltage range in V as "start:stop"
    #[arg(short, long, default_value = "-0.5:0.7", allow_hyphen_values = true)]
    pub range: String,

    /// Number of evenly spaced voltage samples (including both endpoints)
    #[arg(short, long, default_value_t = 400)]
    pub points: usize,

    /// Use a linear current axis instead of logarithmic
    #[arg(long, default_value_t = false)]
    pub linear: bool,

    /// Disable the chart grid
    #[arg(long, default_value_t = false)]
    pub no_grid: bool,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    // ─────────────────────────────────────────────────────────────
    // 批量处理参数
    // ─────────────────────────────────────────────────────────────
    /// Glob pattern for device card files (directory mode)
    #[arg(long, default_value = "*.dio,*.model")]
    pub pattern: String,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Recurse into subdirectories (directory mode)
    #[arg(long, default_value_t = false)]
    pub recursive: bool,

    /// Overwrite existing output files
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
}
