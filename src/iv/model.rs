//! # Shockley 二极管模型
//!
//! 实现理想单指数二极管方程的求值核心：
//!
//! ```text
//! I(V) = I_s * (exp(V / (n * V_T)) - 1)
//! ```
//!
//! ## 数值语义
//! - 全程双精度浮点，无钳制
//! - 深正偏下指数项可能上溢为 +inf，这是接受的边界行为而非错误
//!   （在对数坐标图上表现为垂直渐近线）
//!
//! ## 参考
//! - S. M. Sze, Physics of Semiconductor Devices
//!
//! ## 依赖关系
//! - 被 `iv/sweep.rs` 调用
//! - 使用 `models/device.rs` 的 DeviceParameters

use crate::error::{DiodesimError, Result};
use crate::models::DeviceParameters;

/// Shockley 方程求值器
///
/// 构造时校验参数，之后的求值是纯函数、无副作用。
pub struct ShockleyModel {
    /// 饱和电流 I_s (A)
    saturation_current: f64,
    /// 热电压 V_T (V)
    thermal_voltage: f64,
    /// 理想因子 n
    ideality: f64,
}

impl ShockleyModel {
    /// 创建新的求值器
    ///
    /// 所有参数必须为正值，否则返回 `InvalidParameter`。
    pub fn new(saturation_current: f64, thermal_voltage: f64, ideality: f64) -> Result<Self> {
        if saturation_current <= 0.0 {
            return Err(DiodesimError::InvalidParameter {
                name: "saturation_current",
                value: saturation_current,
            });
        }
        if thermal_voltage <= 0.0 {
            return Err(DiodesimError::InvalidParameter {
                name: "thermal_voltage",
                value: thermal_voltage,
            });
        }
        if ideality <= 0.0 {
            return Err(DiodesimError::InvalidParameter {
                name: "ideality",
                value: ideality,
            });
        }

        Ok(Self {
            saturation_current,
            thermal_voltage,
            ideality,
        })
    }

    /// 从器件参数创建，热电压 V_T = kT/q 由温度推导
    pub fn from_device(params: &DeviceParameters) -> Result<Self> {
        params.validate()?;
        Self::new(
            params.saturation_current,
            params.thermal_voltage(),
            params.ideality,
        )
    }

    /// 单点求值: I(V) = I_s * (exp(V / (n * V_T)) - 1)
    pub fn current(&self, voltage: f64) -> f64 {
        self.saturation_current * ((voltage / (self.ideality * self.thermal_voltage)).exp() - 1.0)
    }

    /// 逐元素求值，保持输入顺序
    pub fn currents(&self, voltages: &[f64]) -> Vec<f64> {
        voltages.iter().map(|&v| self.current(v)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn silicon_model() -> ShockleyModel {
        ShockleyModel::from_device(&DeviceParameters::silicon()).unwrap()
    }

    #[test]
    fn test_zero_bias_zero_current() {
        let model = silicon_model();
        assert_eq!(model.current(0.0), 0.0);
    }

    #[test]
    fn test_current_strictly_increasing() {
        let model = silicon_model();

        let mut prev = model.current(-0.5);
        for i in 1..=120 {
            let v = -0.5 + i as f64 * 0.01;
            let i_v = model.current(v);
            assert!(i_v > prev, "I(V) not increasing at V = {}", v);
            prev = i_v;
        }
    }

    #[test]
    fn test_reverse_bias_floor() {
        // V -> -inf 时 I -> -I_s；-0.5 V 已深入反偏区
        let model = silicon_model();
        let i_rev = model.current(-0.5);
        assert!((i_rev + 1e-12).abs() < 1e-18, "I(-0.5) = {:e}", i_rev);
    }

    #[test]
    fn test_vectorized_matches_scalar() {
        let model = silicon_model();
        let voltages = [-0.5, -0.1, 0.0, 0.3, 0.6, 0.7];

        let currents = model.currents(&voltages);
        assert_eq!(currents.len(), voltages.len());
        for (v, i) in voltages.iter().zip(currents.iter()) {
            assert_eq!(*i, model.current(*v));
        }
    }

    #[test]
    fn test_forward_conduction_magnitude() {
        // 硅参数在 V = 0.6 V 时约 14.5 mA（数量级检查）
        let model = silicon_model();
        let i = model.current(0.6);
        assert!(i > 1e-3 && i < 1e-1, "I(0.6) = {:e}", i);
    }

    #[test]
    fn test_overflow_is_not_an_error() {
        let model = silicon_model();
        let i = model.current(50.0);
        assert!(i.is_infinite() && i > 0.0);
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        assert!(matches!(
            ShockleyModel::new(0.0, 0.025, 1.0),
            Err(DiodesimError::InvalidParameter {
                name: "saturation_current",
                ..
            })
        ));
        assert!(matches!(
            ShockleyModel::new(-1e-12, 0.025, 1.0),
            Err(DiodesimError::InvalidParameter { .. })
        ));
        assert!(matches!(
            ShockleyModel::new(1e-12, 0.025, 0.0),
            Err(DiodesimError::InvalidParameter { name: "ideality", .. })
        ));
        assert!(matches!(
            ShockleyModel::from_device(&DeviceParameters::new(1e-12, 1.0, 0.0)),
            Err(DiodesimError::InvalidParameter {
                name: "temperature",
                ..
            })
        ));
    }
}
