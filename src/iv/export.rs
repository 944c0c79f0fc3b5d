//! # I-V 数据导出
//!
//! 导出 I-V 曲线数据到 CSV 和 XY 格式。
//!
//! ## 支持格式
//! - CSV: `voltage, current` 两列
//! - XY: 以 `#` 注释开头的制表符分隔数据交换格式
//!
//! 上溢为无穷的电流按 `inf` 原样写出（接受的边界行为）。
//!
//! ## 依赖关系
//! - 被 `commands/sweep.rs` 和 `commands/batch.rs` 调用
//! - 使用 `iv/sweep.rs` 的 IvCurve 结构
//! - 使用 `csv` 库写入 CSV 文件

use crate::error::{DiodesimError, Result};
use crate::iv::IvCurve;

use std::fs::File;
use std::io::Write;
use std::path::Path;

/// 导出曲线为 CSV 格式
pub fn to_csv(curve: &IvCurve, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path).map_err(DiodesimError::CsvError)?;

    wtr.write_record(["voltage", "current"])
        .map_err(DiodesimError::CsvError)?;

    for (voltage, current) in curve.points() {
        wtr.write_record(&[format!("{:.6}", voltage), format!("{:e}", current)])
            .map_err(DiodesimError::CsvError)?;
    }

    wtr.flush().map_err(|e| DiodesimError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 导出曲线为 XY 格式
pub fn to_xy(curve: &IvCurve, output_path: &Path) -> Result<()> {
    let write_err = |e: std::io::Error| DiodesimError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    };

    let mut file = File::create(output_path).map_err(write_err)?;

    writeln!(file, "# Diode I-V curve: {}", curve.device_label).map_err(write_err)?;
    writeln!(
        file,
        "# Thermal voltage: {:.6} V",
        curve.thermal_voltage
    )
    .map_err(write_err)?;
    writeln!(file, "# Columns: Voltage (V), Current (A)").map_err(write_err)?;
    writeln!(file, "#").map_err(write_err)?;

    for (voltage, current) in curve.points() {
        writeln!(file, "{:.6}\t{:e}", voltage, current).map_err(write_err)?;
    }

    Ok(())
}
