//! # sweep 命令实现
//!
//! 单器件 I-V 扫描：解析器件参数，执行扫描，输出图像或数据文件。
//!
//! ## 流程
//! 1. 器件来源：卡片文件 > 预设，命令行单项覆盖
//! 2. 构造电压扫描区间并求值
//! 3. 按输出格式（扩展名推断）绘图或导出
//! 4. 打印采样点摘要表
//!
//! ## 依赖关系
//! - 使用 `cli/sweep.rs` 定义的 SweepArgs
//! - 使用 `iv/` 模块进行计算、绘图与导出
//! - 使用 `parsers/` 读取器件卡片

use crate::cli::sweep::{parse_voltage_range, OutputFormat, SweepArgs};
use crate::error::Result;
use crate::iv::{self, IvCurve, VoltageSweep};
use crate::models::DeviceParameters;
use crate::parsers;
use crate::utils::output;

use std::path::Path;

/// 执行 sweep 命令
pub fn execute(args: SweepArgs) -> Result<()> {
    output::print_header("Diode I-V Characteristic Sweep");

    let (label, mut params) = resolve_device(&args)?;

    // 命令行单项覆盖
    if let Some(is) = args.saturation_current {
        params.saturation_current = is;
    }
    if let Some(n) = args.ideality {
        params.ideality = n;
    }
    if let Some(t) = args.temperature {
        params.temperature = t;
    }

    output::print_info(&format!("Device: {}", label));
    output::print_info(&format!(
        "Parameters: Is = {:e} A, n = {}, T = {} K",
        params.saturation_current, params.ideality, params.temperature
    ));

    let (start, stop) = parse_voltage_range(&args.range)?;
    let sweep = VoltageSweep::new(start, stop, args.points)?;
    output::print_info(&format!(
        "Sweep: {} V to {} V, {} samples (step {:.4} mV)",
        start,
        stop,
        sweep.count(),
        sweep.step() * 1e3
    ));

    let curve = iv::run_sweep(&params, &sweep, &label)?;
    output::print_success(&format!(
        "Evaluated {} points (V_T = {:.3} mV)",
        curve.len(),
        curve.thermal_voltage * 1e3
    ));

    let format = args
        .format
        .unwrap_or_else(|| guess_format_from_extension(&args.output));

    match format {
        OutputFormat::Png | OutputFormat::Svg => {
            let title = args
                .title
                .clone()
                .unwrap_or_else(|| format!("I-V Characteristics of {}", label));
            iv::plot::generate_iv_plot(
                &curve,
                &args.output,
                &title,
                args.width,
                args.height,
                !args.linear,
                !args.no_grid,
                format == OutputFormat::Svg,
            )?;
        }
        OutputFormat::Csv => iv::export::to_csv(&curve, &args.output)?,
        OutputFormat::Xy => iv::export::to_xy(&curve, &args.output)?,
    }

    print_sample_table(&curve, 10);
    output::print_success(&format!("I-V curve saved to '{}'", args.output.display()));

    Ok(())
}

/// 解析器件来源：卡片文件优先，否则使用预设
fn resolve_device(args: &SweepArgs) -> Result<(String, DeviceParameters)> {
    if let Some(path) = &args.device {
        let card = parsers::parse_device_card(path)?;
        let label = card.name.unwrap_or_else(|| {
            path.file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("device")
                .to_string()
        });
        output::print_success(&format!("Loaded device card: '{}'", path.display()));
        Ok((label, card.parameters))
    } else {
        Ok((args.preset.to_string(), args.preset.parameters()))
    }
}

/// 从文件扩展名推断输出格式
fn guess_format_from_extension(path: &Path) -> OutputFormat {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .as_deref()
    {
        Some("svg") => OutputFormat::Svg,
        Some("csv") => OutputFormat::Csv,
        Some("xy") | Some("dat") | Some("txt") => OutputFormat::Xy,
        _ => OutputFormat::Png,
    }
}

/// 打印均匀抽取的采样点摘要表
fn print_sample_table(curve: &IvCurve, count: usize) {
    use tabled::{Table, Tabled};

    #[derive(Tabled)]
    struct SampleRow {
        #[tabled(rename = "V (V)")]
        voltage: String,
        #[tabled(rename = "I (A)")]
        current: String,
    }

    if curve.is_empty() {
        return;
    }

    let len = curve.len();
    let take = count.min(len);

    let rows: Vec<SampleRow> = (0..take)
        .map(|k| {
            let idx = k * (len - 1) / (take - 1).max(1);
            SampleRow {
                voltage: format!("{:.4}", curve.voltages[idx]),
                current: format!("{:.4e}", curve.currents[idx]),
            }
        })
        .collect();

    output::print_header(&format!("Sampled I-V Points ({} of {})", rows.len(), len));
    let table = Table::new(&rows);
    println!("{}", table);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            guess_format_from_extension(Path::new("curve.svg")),
            OutputFormat::Svg
        );
        assert_eq!(
            guess_format_from_extension(Path::new("curve.CSV")),
            OutputFormat::Csv
        );
        assert_eq!(
            guess_format_from_extension(Path::new("curve.dat")),
            OutputFormat::Xy
        );
        assert_eq!(
            guess_format_from_extension(Path::new("curve.png")),
            OutputFormat::Png
        );
        assert_eq!(
            guess_format_from_extension(Path::new("curve")),
            OutputFormat::Png
        );
    }
}
