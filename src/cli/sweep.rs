//! # sweep 子命令 CLI 定义
//!
//! 单器件 I-V 扫描参数。默认配置复现原始仿真：硅二极管
//! (I_s = 1e-12 A, n = 1.0, T = 300 K)，-0.5 V 到 0.7 V 共 400 点，
//! 电流轴对数坐标，网格开启。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/sweep.rs`

use clap::{Args, ValueEnum};
use std::path::PathBuf;

use crate::error::{DiodesimError, Result};
use crate::models::DeviceParameters;

// ─────────────────────────────────────────────────────────────
// 公共枚举与解析工具（sweep 与 batch 共用）
// ─────────────────────────────────────────────────────────────

/// 内置器件预设
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum DevicePreset {
    /// Silicon junction diode (Is = 1e-12 A, n = 1.0)
    Silicon,
    /// Germanium diode (Is = 1e-9 A, n = 1.5)
    Germanium,
    /// Schottky barrier diode (Is = 1e-8 A, n = 1.05)
    Schottky,
    /// Light-emitting diode (Is = 1e-18 A, n = 2.0)
    Led,
}

impl DevicePreset {
    /// 预设对应的器件参数
    pub fn parameters(&self) -> DeviceParameters {
        match self {
            DevicePreset::Silicon => DeviceParameters::silicon(),
            DevicePreset::Germanium => DeviceParameters::germanium(),
            DevicePreset::Schottky => DeviceParameters::schottky(),
            DevicePreset::Led => DeviceParameters::led(),
        }
    }
}

impl std::fmt::Display for DevicePreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DevicePreset::Silicon => write!(f, "silicon"),
            DevicePreset::Germanium => write!(f, "germanium"),
            DevicePreset::Schottky => write!(f, "schottky"),
            DevicePreset::Led => write!(f, "led"),
        }
    }
}

/// 输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// PNG image
    Png,
    /// SVG vector image
    Svg,
    /// CSV data file (voltage, current)
    Csv,
    /// XY data file (tab-separated, # comments)
    Xy,
}

/// 解析电压范围字符串 "start:stop"（单位 V）
///
/// 起止大小关系由 `VoltageSweep::new` 校验，这里只负责语法。
pub fn parse_voltage_range(input: &str) -> Result<(f64, f64)> {
    let parts: Vec<&str> = input.split(':').collect();
    if parts.len() != 2 {
        return Err(DiodesimError::InvalidRange(format!(
            "'{}' (expected \"start:stop\", e.g. \"-0.5:0.7\")",
            input
        )));
    }

    let start: f64 = parts[0]
        .trim()
        .parse()
        .map_err(|_| DiodesimError::InvalidRange(input.to_string()))?;
    let stop: f64 = parts[1]
        .trim()
        .parse()
        .map_err(|_| DiodesimError::InvalidRange(input.to_string()))?;

    Ok((start, stop))
}

// ─────────────────────────────────────────────────────────────
// sweep 子命令
// ─────────────────────────────────────────────────────────────

/// sweep 子命令参数
#[derive(Args, Debug)]
pub struct SweepArgs {
    /// Built-in device preset
    #[arg(long, value_enum, default_value = "silicon")]
    pub preset: DevicePreset,

    /// Device card file (key = value format; overrides --preset)
    #[arg(short, long)]
    pub device: Option<PathBuf>,

    /// Saturation current I_s in A (overrides preset/card)
    #[arg(long, allow_hyphen_values = true)]
    pub saturation_current: Option<f64>,

    /// Ideality factor n (overrides preset/card)
    #[arg(long, allow_hyphen_values = true)]
    pub ideality: Option<f64>,

    /// Device temperature in K (overrides preset/card)
    #[arg(long, allow_hyphen_values = true)]
    pub temperature: Option<f64>,

    /// Voltage range in V as "start:stop"
    #[arg(short, long, default_value = "-0.5:0.7", allow_hyphen_values = true)]
    pub range: String,

    /// Number of evenly spaced voltage samples (including both endpoints)
    #[arg(short, long, default_value_t = 400)]
    pub points: usize,

    /// Output file path
    #[arg(short, long, default_value = "iv_curve.png")]
    pub output: PathBuf,

    /// Output format (auto-detected from extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Title for the plot (default: derived from device name)
    #[arg(long)]
    pub title: Option<String>,

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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_voltage_range() {
        assert_eq!(parse_voltage_range("-0.5:0.7").unwrap(), (-0.5, 0.7));
        assert_eq!(parse_voltage_range("0:1").unwrap(), (0.0, 1.0));
        assert_eq!(parse_voltage_range(" -1.0 : 2.5 ").unwrap(), (-1.0, 2.5));

        assert!(parse_voltage_range("0.7").is_err());
        assert!(parse_voltage_range("a:b").is_err());
        assert!(parse_voltage_range("0:1:2").is_err());
    }
}
