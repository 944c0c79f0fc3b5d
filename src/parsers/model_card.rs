//! # 器件卡片解析器
//!
//! 解析描述单个二极管的 `key = value` 文本文件（器件卡片）。
//!
//! ## 格式
//! ```text
//! # 1N4148 switching diode
//! name = 1N4148
//! is = 2.52n
//! n = 1.752
//! temperature = 300
//! ```
//!
//! - `#` 开头为注释行，空行忽略
//! - `is`（饱和电流）与 `n`（理想因子）必填，`name` 与
//!   `temperature`（默认 300 K）可选
//! - 数值接受 SPICE 风格工程量级后缀（如 `2.52n` = 2.52e-9）
//!
//! ## 依赖关系
//! - 被 `commands/sweep.rs` 和 `commands/batch.rs` 调用
//! - 使用 `models/device.rs` 的 DeviceParameters
//! - 使用 `regex` 匹配键值行

use crate::error::{DiodesimError, Result};
use crate::models::device::{DeviceParameters, DEFAULT_TEMPERATURE};

use regex::Regex;
use std::fs;
use std::path::Path;

/// 解析后的器件卡片
#[derive(Debug, Clone)]
pub struct DeviceCard {
    /// 器件名称（卡片未给出时由调用方回退到文件名）
    pub name: Option<String>,
    /// 器件参数
    pub parameters: DeviceParameters,
}

/// 从文件解析器件卡片
pub fn parse_device_card(path: &Path) -> Result<DeviceCard> {
    let content = fs::read_to_string(path).map_err(|e| DiodesimError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_device_card_str(&content, &path.display().to_string())
}

/// 从文本解析器件卡片
pub fn parse_device_card_str(content: &str, path: &str) -> Result<DeviceCard> {
    let line_re = Regex::new(r"^([A-Za-z_][A-Za-z0-9_]*)\s*=\s*(\S+)$").unwrap();

    let parse_err = |reason: String| DiodesimError::ParseError {
        path: path.to_string(),
        reason,
    };

    let mut name: Option<String> = None;
    let mut saturation_current: Option<f64> = None;
    let mut ideality: Option<f64> = None;
    let mut temperature: Option<f64> = None;

    for (lineno, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let caps = line_re
            .captures(line)
            .ok_or_else(|| parse_err(format!("line {}: expected 'key = value'", lineno + 1)))?;

        let key = caps[1].to_lowercase();
        let value = &caps[2];

        match key.as_str() {
            "name" => name = Some(value.to_string()),
            "is" => {
                saturation_current = Some(parse_engineering_value(value).ok_or_else(|| {
                    parse_err(format!("line {}: invalid value '{}' for is", lineno + 1, value))
                })?)
            }
            "n" => {
                ideality = Some(parse_engineering_value(value).ok_or_else(|| {
                    parse_err(format!("line {}: invalid value '{}' for n", lineno + 1, value))
                })?)
            }
            "temperature" => {
                temperature = Some(parse_engineering_value(value).ok_or_else(|| {
                    parse_err(format!(
                        "line {}: invalid value '{}' for temperature",
                        lineno + 1,
                        value
                    ))
                })?)
            }
            other => {
                return Err(parse_err(format!(
                    "line {}: unknown key '{}' (expected name, is, n, temperature)",
                    lineno + 1,
                    other
                )))
            }
        }
    }

    let saturation_current =
        saturation_current.ok_or_else(|| parse_err("missing required key 'is'".to_string()))?;
    let ideality = ideality.ok_or_else(|| parse_err("missing required key 'n'".to_string()))?;

    Ok(DeviceCard {
        name,
        parameters: DeviceParameters::new(
            saturation_current,
            ideality,
            temperature.unwrap_or(DEFAULT_TEMPERATURE),
        ),
    })
}

/// 解析带可选工程量级后缀的数值
///
/// 支持的后缀: T (1e12), G (1e9), MEG (1e6), K (1e3), M (1e-3),
/// U (1e-6), N (1e-9), P (1e-12), F (1e-15)，大小写不敏感。
pub fn parse_engineering_value(s: &str) -> Option<f64> {
    let s = s.trim().to_uppercase();

    // 先按普通数值解析（涵盖 1e-12 等科学计数法）
    if let Ok(v) = s.parse::<f64>() {
        return Some(v);
    }

    let num_end = s
        .find(|c: char| !c.is_ascii_digit() && c != '.' && c != '-' && c != '+' && c != 'E')
        .unwrap_or(s.len());

    if num_end == 0 {
        return None;
    }

    let (num_str, suffix) = s.split_at(num_end);
    let value: f64 = num_str.parse().ok()?;

    let multiplier = match suffix {
        "T" => 1e12,
        "G" => 1e9,
        "MEG" => 1e6,
        "K" => 1e3,
        "M" => 1e-3,
        "U" => 1e-6,
        "N" => 1e-9,
        "P" => 1e-12,
        "F" => 1e-15,
        _ => return None,
    };

    Some(value * multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_card() {
        let content = "\
# 1N4148 switching diode
name = 1N4148
is = 2.52n
n = 1.752
temperature = 300
";
        let card = parse_device_card_str(content, "test.dio").unwrap();

        assert_eq!(card.name.as_deref(), Some("1N4148"));
        assert!((card.parameters.saturation_current - 2.52e-9).abs() < 1e-21);
        assert!((card.parameters.ideality - 1.752).abs() < 1e-12);
        assert_eq!(card.parameters.temperature, 300.0);
    }

    #[test]
    fn test_temperature_defaults_to_300k() {
        let card = parse_device_card_str("is = 1e-12\nn = 1.0\n", "test.dio").unwrap();
        assert_eq!(card.parameters.temperature, 300.0);
        assert!(card.name.is_none());
    }

    #[test]
    fn test_missing_required_key() {
        let err = parse_device_card_str("is = 1e-12\n", "test.dio").unwrap_err();
        assert!(matches!(err, DiodesimError::ParseError { .. }));
        assert!(err.to_string().contains("'n'"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = parse_device_card_str("is = 1e-12\nn = 1\nvf = 0.7\n", "test.dio").unwrap_err();
        assert!(err.to_string().contains("unknown key 'vf'"));
    }

    #[test]
    fn test_malformed_line_rejected() {
        let err = parse_device_card_str("is 1e-12\n", "test.dio").unwrap_err();
        assert!(matches!(err, DiodesimError::ParseError { .. }));
    }

    fn assert_close(actual: Option<f64>, expected: f64) {
        let actual = actual.unwrap();
        assert!(
            (actual - expected).abs() <= expected.abs() * 1e-12,
            "{} != {}",
            actual,
            expected
        );
    }

    #[test]
    fn test_engineering_suffixes() {
        assert_eq!(parse_engineering_value("1e-12"), Some(1e-12));
        assert_eq!(parse_engineering_value("300"), Some(300.0));
        assert_close(parse_engineering_value("2.52n"), 2.52e-9);
        assert_close(parse_engineering_value("10p"), 10e-12);
        assert_close(parse_engineering_value("1.5meg"), 1.5e6);
        assert_close(parse_engineering_value("4.7k"), 4.7e3);
        assert_eq!(parse_engineering_value("abc"), None);
        assert_eq!(parse_engineering_value("1.0x"), None);
    }
}
