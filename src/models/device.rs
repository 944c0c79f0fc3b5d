//! # 二极管器件数据模型
//!
//! 定义统一的二极管器件参数表示，可以从预设、器件卡片文件或
//! CSV 清单构建。
//!
//! ## 依赖关系
//! - 被 `parsers/`、`iv/` 和 `commands/` 使用
//! - 使用 `models/constants.rs` 计算热电压

use serde::{Deserialize, Serialize};

use crate::error::{DiodesimError, Result};
use crate::models::constants::{BOLTZMANN, ELEMENTARY_CHARGE};

/// 默认器件温度 (K)
pub const DEFAULT_TEMPERATURE: f64 = 300.0;

/// 二极管器件参数
///
/// 所有参数必须为正值，`validate` 强制检查。热电压等派生量
/// 每次调用时重新计算，不作为独立状态缓存。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceParameters {
    /// 饱和电流 I_s (A)
    pub saturation_current: f64,

    /// 理想因子 n（无量纲）
    pub ideality: f64,

    /// 器件温度 T (K)
    pub temperature: f64,
}

impl DeviceParameters {
    /// 创建器件参数（不校验，校验由 `validate` 完成）
    pub fn new(saturation_current: f64, ideality: f64, temperature: f64) -> Self {
        Self {
            saturation_current,
            ideality,
            temperature,
        }
    }

    /// 典型硅二极管 (I_s = 1e-12 A, n = 1.0)
    pub fn silicon() -> Self {
        Self::new(1e-12, 1.0, DEFAULT_TEMPERATURE)
    }

    /// 典型锗二极管（更大的漏电流，更低的正向压降）
    pub fn germanium() -> Self {
        Self::new(1e-9, 1.5, DEFAULT_TEMPERATURE)
    }

    /// 典型肖特基势垒二极管
    pub fn schottky() -> Self {
        Self::new(1e-8, 1.05, DEFAULT_TEMPERATURE)
    }

    /// 典型 LED (高理想因子，极小的饱和电流)
    pub fn led() -> Self {
        Self::new(1e-18, 2.0, DEFAULT_TEMPERATURE)
    }

    /// 校验所有参数为正值
    pub fn validate(&self) -> Result<()> {
        if self.saturation_current <= 0.0 {
            return Err(DiodesimError::InvalidParameter {
                name: "saturation_current",
                value: self.saturation_current,
            });
        }
        if self.ideality <= 0.0 {
            return Err(DiodesimError::InvalidParameter {
                name: "ideality",
                value: self.ideality,
            });
        }
        if self.temperature <= 0.0 {
            return Err(DiodesimError::InvalidParameter {
                name: "temperature",
                value: self.temperature,
            });
        }
        Ok(())
    }

    /// 热电压 V_T = kT/q (V)
    ///
    /// T = 300 K 时约为 25.85 mV。
    pub fn thermal_voltage(&self) -> f64 {
        BOLTZMANN * self.temperature / ELEMENTARY_CHARGE
    }
}

/// CSV 清单中的一行器件记录
///
/// 列: `name, saturation_current, ideality, temperature`（温度可空缺，
/// 默认 300 K）。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceRecord {
    /// 器件名称（用作图表标题和输出文件名）
    pub name: String,

    /// 饱和电流 I_s (A)
    pub saturation_current: f64,

    /// 理想因子 n
    pub ideality: f64,

    /// 器件温度 T (K)，列缺失或为空时取默认值
    #[serde(default)]
    pub temperature: Option<f64>,
}

impl DeviceRecord {
    /// 转换为器件参数
    pub fn into_parameters(self) -> DeviceParameters {
        DeviceParameters::new(
            self.saturation_current,
            self.ideality,
            self.temperature.unwrap_or(DEFAULT_TEMPERATURE),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thermal_voltage_room_temperature() {
        let params = DeviceParameters::silicon();
        let vt = params.thermal_voltage();
        // kT/q at 300 K
        assert!((vt - 0.025852).abs() < 1e-5, "V_T = {}", vt);
    }

    #[test]
    fn test_presets_are_valid() {
        for params in [
            DeviceParameters::silicon(),
            DeviceParameters::germanium(),
            DeviceParameters::schottky(),
            DeviceParameters::led(),
        ] {
            params.validate().unwrap();
        }
    }

    #[test]
    fn test_nonpositive_parameters_rejected() {
        let cases = [
            DeviceParameters::new(0.0, 1.0, 300.0),
            DeviceParameters::new(-1e-12, 1.0, 300.0),
            DeviceParameters::new(1e-12, 0.0, 300.0),
            DeviceParameters::new(1e-12, 1.0, 0.0),
        ];

        for params in cases {
            let err = params.validate().unwrap_err();
            assert!(
                matches!(err, DiodesimError::InvalidParameter { .. }),
                "unexpected error: {}",
                err
            );
        }
    }
}
