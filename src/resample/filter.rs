//! 多相滤波器组
//!
//! 两组预计算的 Kaiser 窗 sinc 系数（Fast / Best），进程内全局只读，
//! 所有 `Resampler` 实例共享，无初始化顺序问题。

use std::fmt;
use std::io::{self, Write};

use super::tables::{KAISER_BEST, KAISER_BEST_DELTA, KAISER_FAST, KAISER_FAST_DELTA};

/// 重采样质量
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Quality {
    /// 16 个过零点，8 倍过采样
    Fast,
    /// 64 个过零点，4 倍过采样
    #[default]
    Best,
}

impl Quality {
    /// 所有预设
    pub const ALL: [Quality; 2] = [Quality::Fast, Quality::Best];

    /// 获取该质量对应的滤波器组（O(1)）
    #[inline]
    pub fn filter_bank(self) -> &'static FilterBank {
        match self {
            Quality::Fast => &FAST,
            Quality::Best => &BEST,
        }
    }

    /// 获取滤波器配置
    #[inline]
    pub fn config(self) -> FilterConfig {
        self.filter_bank().config
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quality::Fast => write!(f, "Fast"),
            Quality::Best => write!(f, "Best"),
        }
    }
}

/// 滤波器配置
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterConfig {
    /// 每个输入样本间隔内的相位数
    pub oversample: usize,
    /// 表长度
    pub taps: usize,
}

impl FilterConfig {
    /// 半窗覆盖的过零点数
    pub fn zero_crossings(&self) -> usize {
        (self.taps - 1) / self.oversample
    }
}

/// 过采样冲激响应 + 相位间前向差分
///
/// 不变量：`table.len() == delta.len() == config.taps`
pub struct FilterBank {
    config: FilterConfig,
    table: &'static [f32],
    delta: &'static [f32],
}

static FAST: FilterBank = FilterBank {
    config: FilterConfig {
        oversample: 8,
        taps: 129,
    },
    table: &KAISER_FAST,
    delta: &KAISER_FAST_DELTA,
};

static BEST: FilterBank = FilterBank {
    config: FilterConfig {
        oversample: 4,
        taps: 257,
    },
    table: &KAISER_BEST,
    delta: &KAISER_BEST_DELTA,
};

impl FilterBank {
    #[inline]
    pub fn config(&self) -> FilterConfig {
        self.config
    }

    #[inline]
    pub fn oversample(&self) -> usize {
        self.config.oversample
    }

    #[inline]
    pub fn taps(&self) -> usize {
        self.config.taps
    }

    #[inline]
    pub fn table(&self) -> &'static [f32] {
        self.table
    }

    #[inline]
    pub fn delta(&self) -> &'static [f32] {
        self.delta
    }

    /// 在 `index` 处按 `eta` 线性插值得到的权重
    #[inline]
    pub(crate) fn weight(&self, index: usize, eta: f32) -> f32 {
        self.table[index] + eta * self.delta[index]
    }

    /// 以 CSV 导出系数表：`index,table,delta`
    pub fn write_csv<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writeln!(writer, "index,table,delta")?;
        for (i, (value, delta)) in self.table.iter().zip(self.delta).enumerate() {
            writeln!(writer, "{},{:e},{:e}", i, value, delta)?;
        }
        writer.flush()
    }
}

// 系数表太长，Debug 只输出配置
impl fmt::Debug for FilterBank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterBank")
            .field("oversample", &self.config.oversample)
            .field("taps", &self.config.taps)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_configs() {
        assert_eq!(
            Quality::Fast.config(),
            FilterConfig {
                oversample: 8,
                taps: 129
            }
        );
        assert_eq!(
            Quality::Best.config(),
            FilterConfig {
                oversample: 4,
                taps: 257
            }
        );
        assert_eq!(Quality::Fast.config().zero_crossings(), 16);
        assert_eq!(Quality::Best.config().zero_crossings(), 64);
        assert_eq!(Quality::default(), Quality::Best);
    }

    #[test]
    fn test_table_lengths() {
        for quality in Quality::ALL {
            let bank = quality.filter_bank();
            assert_eq!(bank.table().len(), bank.taps(), "{} table", quality);
            assert_eq!(bank.delta().len(), bank.taps(), "{} delta", quality);
        }
    }

    #[test]
    fn test_delta_is_forward_difference() {
        for quality in Quality::ALL {
            let bank = quality.filter_bank();
            let table = bank.table();
            let delta = bank.delta();

            // 最后一项为 0
            assert_eq!(delta[bank.taps() - 1], 0.0);

            for k in 0..bank.taps() - 1 {
                let expected = table[k + 1] - table[k];
                assert!(
                    (delta[k] - expected).abs() < 1e-6,
                    "{} delta[{}] = {}, expected {}",
                    quality,
                    k,
                    delta[k],
                    expected
                );
            }
        }
    }

    #[test]
    fn test_tap_zero_is_rolloff() {
        // 半窗起点 = rolloff，也是全表最大值
        assert_eq!(Quality::Fast.filter_bank().table()[0], 0.85);
        let best = Quality::Best.filter_bank().table();
        assert!((best[0] - 0.947_593_7).abs() < 1e-6);
        assert!(best.iter().all(|&v| v <= best[0]));
    }

    #[test]
    fn test_weight_interpolates() {
        let bank = Quality::Fast.filter_bank();
        assert_eq!(bank.weight(3, 0.0), bank.table()[3]);
        let half = bank.weight(3, 0.5);
        let lo = bank.table()[3].min(bank.table()[4]);
        let hi = bank.table()[3].max(bank.table()[4]);
        assert!(half > lo && half < hi);
    }

    #[test]
    fn test_write_csv() {
        let bank = Quality::Fast.filter_bank();
        let mut out = Vec::new();
        bank.write_csv(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "index,table,delta");
        assert_eq!(lines.len(), bank.taps() + 1);
        assert!(lines[1].starts_with("0,8.5e-1,"));
    }

    #[test]
    fn test_debug_omits_tables() {
        let text = format!("{:?}", Quality::Best.filter_bank());
        assert!(text.contains("taps: 257"));
        assert!(text.len() < 100);
    }
}
