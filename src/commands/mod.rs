//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `parsers/`, `models/`, `iv/`, `utils/`
//! - 子模块: sweep, batch, presets

pub mod batch;
pub mod presets;
pub mod sweep;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Sweep(args) => sweep::execute(args),
        Commands::Batch(args) => batch::execute(args),
        Commands::Presets => presets::execute(),
    }
}
