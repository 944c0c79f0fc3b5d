//! # 电压扫描驱动
//!
//! 在配置的电压区间上生成等间距采样序列，逐元素应用 Shockley
//! 模型，产出成对的 I-V 曲线数据。
//!
//! ## 不变量
//! - 采样序列含两端点，步长 = (stop - start) / (count - 1)
//! - 曲线的电压序列与电流序列长度恒相等，按位置一一对应
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `iv/model.rs` 的 ShockleyModel
//! - 使用 `models/device.rs` 的 DeviceParameters

use crate::error::{DiodesimError, Result};
use crate::iv::model::ShockleyModel;
use crate::models::DeviceParameters;

/// 电压扫描区间
#[derive(Debug, Clone, Copy)]
pub struct VoltageSweep {
    /// 起始电压 (V)
    start: f64,
    /// 终止电压 (V)
    stop: f64,
    /// 采样点数（含两端点）
    count: usize,
}

impl VoltageSweep {
    /// 创建扫描区间
    ///
    /// 要求 count >= 2 且 start < stop。
    pub fn new(start: f64, stop: f64, count: usize) -> Result<Self> {
        if count < 2 {
            return Err(DiodesimError::InvalidRange(format!(
                "need at least 2 sample points, got {}",
                count
            )));
        }
        if !(start < stop) {
            return Err(DiodesimError::InvalidRange(format!(
                "{} V .. {} V (start must be less than stop)",
                start, stop
            )));
        }

        Ok(Self { start, stop, count })
    }

    /// 起始电压 (V)
    pub fn start(&self) -> f64 {
        self.start
    }

    /// 终止电压 (V)
    pub fn stop(&self) -> f64 {
        self.stop
    }

    /// 采样点数
    pub fn count(&self) -> usize {
        self.count
    }

    /// 均匀步长 (V)
    pub fn step(&self) -> f64 {
        (self.stop - self.start) / (self.count - 1) as f64
    }

    /// 生成等间距采样序列
    pub fn samples(&self) -> Vec<f64> {
        let step = self.step();
        (0..self.count)
            .map(|i| {
                // 末点固定为 stop，避免浮点累积越过区间端点
                if i + 1 == self.count {
                    self.stop
                } else {
                    self.start + i as f64 * step
                }
            })
            .collect()
    }
}

/// I-V 特性曲线
///
/// 电压与电流序列等长，第 i 个电流对应第 i 个电压。附带图表
/// 标注所需的元数据。
#[derive(Debug, Clone)]
pub struct IvCurve {
    /// 电压采样序列 (V)
    pub voltages: Vec<f64>,
    /// 对应的电流序列 (A)
    pub currents: Vec<f64>,
    /// 器件标签（用于图表标题）
    pub device_label: String,
    /// 求值时使用的热电压 V_T (V)
    pub thermal_voltage: f64,
}

impl IvCurve {
    /// 采样点数
    pub fn len(&self) -> usize {
        self.voltages.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.voltages.is_empty()
    }

    /// 按位置配对的 (电压, 电流) 迭代器
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.voltages
            .iter()
            .copied()
            .zip(self.currents.iter().copied())
    }
}

/// 执行扫描：生成采样 -> 求值模型 -> 产出曲线
///
/// 器件参数非法时传播模型的 `InvalidParameter`；本身不做额外校验。
pub fn run_sweep(
    params: &DeviceParameters,
    sweep: &VoltageSweep,
    device_label: &str,
) -> Result<IvCurve> {
    let model = ShockleyModel::from_device(params)?;

    let voltages = sweep.samples();
    let currents = model.currents(&voltages);

    Ok(IvCurve {
        voltages,
        currents,
        device_label: device_label.to_string(),
        thermal_voltage: params.thermal_voltage(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweep_shape() {
        let sweep = VoltageSweep::new(-0.5, 0.7, 400).unwrap();
        let samples = sweep.samples();

        assert_eq!(samples.len(), 400);
        assert_eq!(samples[0], -0.5);
        assert_eq!(samples[399], 0.7);

        // 均匀间距 1.2 / 399
        let expected_step = 1.2 / 399.0;
        for pair in samples.windows(2) {
            assert!((pair[1] - pair[0] - expected_step).abs() < 1e-12);
        }
    }

    #[test]
    fn test_minimal_sweep() {
        let sweep = VoltageSweep::new(0.0, 1.0, 2).unwrap();
        assert_eq!(sweep.samples(), vec![0.0, 1.0]);
    }

    #[test]
    fn test_invalid_sweep_rejected() {
        assert!(matches!(
            VoltageSweep::new(0.0, 1.0, 1),
            Err(DiodesimError::InvalidRange(_))
        ));
        assert!(matches!(
            VoltageSweep::new(0.7, -0.5, 400),
            Err(DiodesimError::InvalidRange(_))
        ));
        assert!(matches!(
            VoltageSweep::new(0.5, 0.5, 10),
            Err(DiodesimError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_run_sweep_pairs_sequences() {
        let params = DeviceParameters::silicon();
        let sweep = VoltageSweep::new(-0.5, 0.7, 400).unwrap();

        let curve = run_sweep(&params, &sweep, "silicon").unwrap();

        assert_eq!(curve.len(), 400);
        assert_eq!(curve.voltages.len(), curve.currents.len());
        assert_eq!(curve.device_label, "silicon");
        assert!((curve.thermal_voltage - 0.025852).abs() < 1e-5);

        // 与单点求值逐项一致
        let model = ShockleyModel::from_device(&params).unwrap();
        for (v, i) in curve.points() {
            assert_eq!(i, model.current(v));
        }
    }

    #[test]
    fn test_run_sweep_propagates_invalid_parameter() {
        let params = DeviceParameters::new(-1.0, 1.0, 300.0);
        let sweep = VoltageSweep::new(-0.5, 0.7, 400).unwrap();

        assert!(matches!(
            run_sweep(&params, &sweep, "bad"),
            Err(DiodesimError::InvalidParameter { .. })
        ));
    }
}
