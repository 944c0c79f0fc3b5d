//! # batch 命令实现
//!
//! 批量 I-V 扫描：对目录中的器件卡片或 CSV 清单中的每个器件
//! 执行扫描并输出一个文件。
//!
//! ## 功能
//! - 目录模式（glob 模式收集卡片文件）与清单模式（CSV 反序列化）
//! - 并行计算（rayon）
//! - 输出冲突跳过与覆盖控制
//!
//! ## 依赖关系
//! - 使用 `cli/batch.rs` 定义的 BatchArgs
//! - 使用 `batch/` 模块进行收集与并行处理
//! - 使用 `iv/` 模块进行计算与输出

use crate::batch::{BatchResult, BatchRunner, FileCollector, ProcessResult};
use crate::cli::batch::BatchArgs;
use crate::cli::sweep::{parse_voltage_range, OutputFormat};
use crate::error::{DiodesimError, Result};
use crate::iv::{self, VoltageSweep};
use crate::models::{DeviceParameters, DeviceRecord};
use crate::parsers;
use crate::utils::output;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// 执行 batch 命令
pub fn execute(args: BatchArgs) -> Result<()> {
    output::print_header("Batch I-V Sweep");

    let (start, stop) = parse_voltage_range(&args.range)?;
    let sweep = VoltageSweep::new(start, stop, args.points)?;

    let format = args.format.unwrap_or(OutputFormat::Png);
    output::print_info(&format!("Output format: {:?}", format));

    // 确保输出目录存在
    fs::create_dir_all(&args.output).map_err(|e| DiodesimError::FileWriteError {
        path: args.output.display().to_string(),
        source: e,
    })?;

    // 创建共享配置
    let config = Arc::new(BatchSweepConfig {
        output_dir: args.output.clone(),
        sweep,
        format,
        log_scale: !args.linear,
        grid: !args.no_grid,
        width: args.width,
        height: args.height,
        overwrite: args.overwrite,
    });

    let result = if args.input.is_file() {
        execute_manifest(&args, &config)?
    } else if args.input.is_dir() {
        execute_directory(&args, &config)?
    } else {
        return Err(DiodesimError::FileNotFound {
            path: args.input.display().to_string(),
        });
    };

    // 打印统计
    output::print_separator();
    output::print_success(&format!(
        "Batch complete: {} success, {} skipped, {} failed",
        result.success, result.skipped, result.failed
    ));

    if !result.failures.is_empty() {
        output::print_warning("Failed devices:");
        for (label, err) in result.failures.iter().take(10) {
            output::print_error(&format!("  {}: {}", label, err));
        }
        if result.failures.len() > 10 {
            output::print_warning(&format!("  ... and {} more", result.failures.len() - 10));
        }
    }

    Ok(())
}

/// 批量扫描共享配置
struct BatchSweepConfig {
    output_dir: PathBuf,
    sweep: VoltageSweep,
    format: OutputFormat,
    log_scale: bool,
    grid: bool,
    width: u32,
    height: u32,
    overwrite: bool,
}

/// 目录模式：收集器件卡片文件并并行处理
fn execute_directory(args: &BatchArgs, config: &Arc<BatchSweepConfig>) -> Result<BatchResult> {
    output::print_info(&format!("Directory mode: '{}'", args.input.display()));

    let files = FileCollector::new(args.input.clone())
        .with_pattern(&args.pattern)
        .recursive(args.recursive)
        .collect()?;

    if files.is_empty() {
        return Err(DiodesimError::NoFilesFound {
            pattern: args.pattern.clone(),
        });
    }

    output::print_info(&format!("Found {} device cards", files.len()));

    let runner = BatchRunner::new(args.jobs);
    Ok(runner.run(files, |file| process_card_file(file, config)))
}

/// 清单模式：反序列化 CSV 器件记录并并行处理
fn execute_manifest(args: &BatchArgs, config: &Arc<BatchSweepConfig>) -> Result<BatchResult> {
    output::print_info(&format!("Manifest mode: '{}'", args.input.display()));

    let mut rdr = csv::Reader::from_path(&args.input).map_err(DiodesimError::CsvError)?;
    let records: Vec<DeviceRecord> = rdr
        .deserialize()
        .collect::<std::result::Result<_, csv::Error>>()?;

    if records.is_empty() {
        return Err(DiodesimError::Other(
            "manifest contains no device records".to_string(),
        ));
    }

    output::print_info(&format!("Found {} devices in manifest", records.len()));

    let runner = BatchRunner::new(args.jobs);
    Ok(runner.run(records, |record| process_record(record, config)))
}

/// 处理单个器件卡片文件
fn process_card_file(input: &PathBuf, config: &Arc<BatchSweepConfig>) -> ProcessResult {
    let card = match parsers::parse_device_card(input) {
        Ok(c) => c,
        Err(e) => return ProcessResult::Failed(input.display().to_string(), e.to_string()),
    };

    // 卡片未命名时回退到文件名
    let label = card.name.unwrap_or_else(|| {
        input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("device")
            .to_string()
    });

    process_device(&label, &card.parameters, config)
}

/// 处理清单中的单条器件记录
fn process_record(record: &DeviceRecord, config: &Arc<BatchSweepConfig>) -> ProcessResult {
    let label = record.name.clone();
    let params = record.clone().into_parameters();
    process_device(&label, &params, config)
}

/// 对单个器件执行扫描并写出结果文件
fn process_device(
    label: &str,
    params: &DeviceParameters,
    config: &Arc<BatchSweepConfig>,
) -> ProcessResult {
    let ext = match config.format {
        OutputFormat::Png => "png",
        OutputFormat::Svg => "svg",
        OutputFormat::Csv => "csv",
        OutputFormat::Xy => "xy",
    };

    let output_file = config.output_dir.join(format!("{}_iv.{}", label, ext));

    // 检查是否已存在
    if output_file.exists() && !config.overwrite {
        return ProcessResult::Skipped(format!(
            "Output exists, skipping: {}",
            output_file.display()
        ));
    }

    match write_device_output(label, params, &output_file, config) {
        Ok(_) => ProcessResult::Success(format!("{} -> {}", label, output_file.display())),
        Err(e) => ProcessResult::Failed(label.to_string(), e.to_string()),
    }
}

/// 扫描并按配置的格式写出
fn write_device_output(
    label: &str,
    params: &DeviceParameters,
    output_file: &Path,
    config: &BatchSweepConfig,
) -> Result<()> {
    let curve = iv::run_sweep(params, &config.sweep, label)?;

    match config.format {
        OutputFormat::Png | OutputFormat::Svg => iv::plot::generate_iv_plot(
            &curve,
            output_file,
            &format!("I-V Characteristics of {}", label),
            config.width,
            config.height,
            config.log_scale,
            config.grid,
            config.format == OutputFormat::Svg,
        ),
        OutputFormat::Csv => iv::export::to_csv(&curve, output_file),
        OutputFormat::Xy => iv::export::to_xy(&curve, output_file),
    }
}
