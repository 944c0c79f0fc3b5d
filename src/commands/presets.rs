//! # presets 命令实现
//!
//! 列出内置器件预设及其派生热电压。
//!
//! ## 依赖关系
//! - 使用 `cli/sweep.rs` 的 DevicePreset
//! - 使用 `tabled` 输出表格

use crate::cli::sweep::DevicePreset;
use crate::error::Result;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 预设表格行
#[derive(Tabled)]
struct PresetRow {
    #[tabled(rename = "Preset")]
    name: String,
    #[tabled(rename = "Is (A)")]
    saturation_current: String,
    #[tabled(rename = "n")]
    ideality: String,
    #[tabled(rename = "T (K)")]
    temperature: String,
    #[tabled(rename = "V_T (mV)")]
    thermal_voltage: String,
}

/// 执行 presets 命令
pub fn execute() -> Result<()> {
    output::print_header("Built-in Device Presets");

    let presets = [
        DevicePreset::Silicon,
        DevicePreset::Germanium,
        DevicePreset::Schottky,
        DevicePreset::Led,
    ];

    let rows: Vec<PresetRow> = presets
        .iter()
        .map(|preset| {
            let params = preset.parameters();
            PresetRow {
                name: preset.to_string(),
                saturation_current: format!("{:e}", params.saturation_current),
                ideality: format!("{}", params.ideality),
                temperature: format!("{}", params.temperature),
                thermal_voltage: format!("{:.3}", params.thermal_voltage() * 1e3),
            }
        })
        .collect();

    let table = Table::new(&rows);
    println!("{}", table);

    Ok(())
}
