//! # I-V 曲线图表生成
//!
//! 使用 `plotters` 库生成二极管 I-V 特性图。
//!
//! ## 功能
//! - 电流轴默认对数坐标（正偏指数区与反偏泄漏区同图可读）
//! - 可切换线性坐标
//! - 可选网格、热电压标注
//! - 支持 PNG 和 SVG 输出
//!
//! ## 对数坐标语义
//! 对数轴只能呈现正值：非正与非有限的电流采样在对数模式下被
//! 屏蔽（与 matplotlib `yscale('log')` 的丢弃行为一致）。上溢为
//! 无穷的采样点在两种模式下都不可绘制，跳过。
//!
//! ## 依赖关系
//! - 被 `commands/sweep.rs` 和 `commands/batch.rs` 调用
//! - 使用 `iv/sweep.rs` 的 IvCurve 结构
//! - 使用 `plotters` 渲染图表

use crate::error::{DiodesimError, Result};
use crate::iv::IvCurve;

use plotters::prelude::*;
use std::path::Path;

/// 曲线颜色
const CURVE_COLOR: RGBColor = RGBColor(0, 102, 204);

/// 生成 I-V 特性图
#[allow(clippy::too_many_arguments)]
pub fn generate_iv_plot(
    curve: &IvCurve,
    output_path: &Path,
    title: &str,
    width: u32,
    height: u32,
    log_scale: bool,
    grid: bool,
    use_svg: bool,
) -> Result<()> {
    if use_svg {
        let root = SVGBackend::new(output_path, (width, height)).into_drawing_area();
        draw_iv_chart(&root, curve, title, log_scale, grid)?;
        root.present()
            .map_err(|e| DiodesimError::Other(e.to_string()))?;
    } else {
        let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
        draw_iv_chart(&root, curve, title, log_scale, grid)?;
        root.present()
            .map_err(|e| DiodesimError::Other(e.to_string()))?;
    }
    Ok(())
}

/// 绘制图表（按坐标模式分派）
fn draw_iv_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    curve: &IvCurve,
    title: &str,
    log_scale: bool,
    grid: bool,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)
        .map_err(|e| DiodesimError::Other(format!("{:?}", e)))?;

    if log_scale {
        draw_log_chart(root, curve, title, grid)
    } else {
        draw_linear_chart(root, curve, title, grid)
    }
}

/// 对数电流轴图表
fn draw_log_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    curve: &IvCurve,
    title: &str,
    grid: bool,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    // 对数轴屏蔽非正与非有限采样
    let visible: Vec<(f64, f64)> = curve
        .points()
        .filter(|(_, i)| i.is_finite() && *i > 0.0)
        .collect();

    if visible.is_empty() {
        return Err(DiodesimError::Other(
            "log-scale plot requires at least one positive current sample (try --linear)"
                .to_string(),
        ));
    }

    let (x_min, x_max) = voltage_bounds(curve);

    let i_min = visible.iter().map(|(_, i)| *i).fold(f64::INFINITY, f64::min);
    let i_max = visible
        .iter()
        .map(|(_, i)| *i)
        .fold(f64::NEG_INFINITY, f64::max);

    // 上下各留一个数量级的边距
    let y_min = i_min / 10.0;
    let y_max = i_max * 10.0;

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(x_min..x_max, (y_min..y_max).log_scale())
        .map_err(|e| DiodesimError::Other(format!("{:?}", e)))?;

    let mut mesh = chart.configure_mesh();
    if !grid {
        mesh.disable_x_mesh().disable_y_mesh();
    }
    mesh.x_desc("Voltage (V)")
        .y_desc("Current (A)")
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .y_label_formatter(&|i| format!("{:.0e}", i))
        .draw()
        .map_err(|e| DiodesimError::Other(format!("{:?}", e)))?;

    chart
        .draw_series(LineSeries::new(
            visible.iter().copied(),
            CURVE_COLOR.stroke_width(2),
        ))
        .map_err(|e| DiodesimError::Other(format!("{:?}", e)))?;

    // 标注热电压
    let vt_text = format!("V_T = {:.3} mV", curve.thermal_voltage * 1e3);
    chart
        .draw_series(std::iter::once(Text::new(
            vt_text,
            (x_max - 0.25 * (x_max - x_min), y_max / 3.0),
            ("sans-serif", 14).into_font().color(&BLACK),
        )))
        .map_err(|e| DiodesimError::Other(format!("{:?}", e)))?;

    Ok(())
}

/// 线性电流轴图表
fn draw_linear_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    curve: &IvCurve,
    title: &str,
    grid: bool,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    // 上溢为无穷的采样点不可绘制
    let visible: Vec<(f64, f64)> = curve.points().filter(|(_, i)| i.is_finite()).collect();

    if visible.is_empty() {
        return Err(DiodesimError::Other(
            "no finite current samples to plot".to_string(),
        ));
    }

    let (x_min, x_max) = voltage_bounds(curve);

    let i_min = visible.iter().map(|(_, i)| *i).fold(f64::INFINITY, f64::min);
    let i_max = visible
        .iter()
        .map(|(_, i)| *i)
        .fold(f64::NEG_INFINITY, f64::max);

    let span = (i_max - i_min).max(f64::MIN_POSITIVE);
    let y_min = i_min - 0.05 * span;
    let y_max = i_max + 0.05 * span;

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(|e| DiodesimError::Other(format!("{:?}", e)))?;

    let mut mesh = chart.configure_mesh();
    if !grid {
        mesh.disable_x_mesh().disable_y_mesh();
    }
    mesh.x_desc("Voltage (V)")
        .y_desc("Current (A)")
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .y_label_formatter(&|i| format!("{:.1e}", i))
        .draw()
        .map_err(|e| DiodesimError::Other(format!("{:?}", e)))?;

    chart
        .draw_series(LineSeries::new(
            visible.iter().copied(),
            CURVE_COLOR.stroke_width(2),
        ))
        .map_err(|e| DiodesimError::Other(format!("{:?}", e)))?;

    // 标注热电压
    let vt_text = format!("V_T = {:.3} mV", curve.thermal_voltage * 1e3);
    chart
        .draw_series(std::iter::once(Text::new(
            vt_text,
            (x_min + 0.05 * (x_max - x_min), i_max),
            ("sans-serif", 14).into_font().color(&BLACK),
        )))
        .map_err(|e| DiodesimError::Other(format!("{:?}", e)))?;

    Ok(())
}

/// 电压轴范围（扫描序列有序，取首末元素）
fn voltage_bounds(curve: &IvCurve) -> (f64, f64) {
    let x_min = curve.voltages.first().copied().unwrap_or(-0.5);
    let x_max = curve.voltages.last().copied().unwrap_or(0.7);
    (x_min, x_max)
}
