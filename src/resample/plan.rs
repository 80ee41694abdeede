//! 卷积计划
//!
//! 由采样率比和滤波器组推导出的只读参数，构造时计算一次，
//! 标量与向量化实现共享同一套相位/边界计算，保证两者逐样本一致。

use super::filter::{FilterBank, Quality};
use super::ResampleError;

/// 单侧翼（左翼 / 右翼）的相位
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct Wing {
    /// 表内起始偏移
    pub offset: usize,
    /// 相邻相位之间的插值系数
    pub eta: f32,
    /// 表内可用的 tap 数
    pub len: usize,
}

/// 一个输出帧对应的卷积范围
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct Tap {
    /// 时间点之前（含）最近的输入帧
    pub n: usize,
    pub left: Wing,
    /// 左翼 j 的范围 `[left_start, left_end)`，读取 `src[n - j]`
    pub left_start: usize,
    pub left_end: usize,
    pub right: Wing,
    /// 右翼 j 的范围 `[0, right_end)`，读取 `src[n + j + 1]`
    pub right_end: usize,
}

#[derive(Clone, Debug)]
pub(crate) struct Plan {
    pub bank: &'static FilterBank,
    /// min(1, ratio)：降采样时同时把滤波器截止频率压低
    pub scale: f32,
    /// 虚拟时间步长 = 1 / ratio
    pub time_step: f64,
    /// 一个输入样本间隔在过采样表中的步长
    pub index_step: usize,
}

impl Plan {
    pub fn new(
        src_frequency: u32,
        dst_frequency: u32,
        quality: Quality,
    ) -> Result<Self, ResampleError> {
        let bank = quality.filter_bank();
        let ratio = dst_frequency as f64 / src_frequency as f64;
        let scale = ratio.min(1.0) as f32;
        let index_step = (scale * bank.oversample() as f32) as usize;

        // 降采样比低于 1/oversample 时表内步长为 0，无法表达对应的低通
        if index_step == 0 {
            return Err(ResampleError::RatioTooLow { ratio, quality });
        }

        Ok(Self {
            bank,
            scale,
            time_step: src_frequency as f64 / dst_frequency as f64,
            index_step,
        })
    }

    /// 由小数相位 `frac`（[0, scale]）计算表内偏移、插值系数和可用 tap 数
    #[inline]
    pub fn wing(&self, frac: f32) -> Wing {
        let index_frac = frac * self.bank.oversample() as f32;
        let offset = index_frac as usize;
        let eta = index_frac - offset as f32;
        // offset 不会超过 taps，这里仍然按 0 个 tap 处理
        let len = self
            .bank
            .taps()
            .checked_sub(offset)
            .map_or(0, |rest| rest / self.index_step);

        Wing { offset, eta, len }
    }

    /// 计算虚拟时间 `time` 处的卷积范围
    ///
    /// 两翼都被截断在 `[0, src_frames)` 内：边界附近少用几个 tap，不补零也不越界
    #[inline]
    pub fn locate(&self, time: f64, src_frames: usize) -> Tap {
        let n = time as usize;
        let frac = self.scale * (time - n as f64) as f32;

        let left = self.wing(frac);
        let right = self.wing(self.scale - frac);

        Tap {
            n,
            left,
            left_start: (n + 1).saturating_sub(src_frames),
            left_end: (n + 1).min(left.len),
            right,
            right_end: src_frames.saturating_sub(n + 1).min(right.len),
        }
    }

    /// 第 j 个 tap 的权重
    #[inline]
    pub fn weight(&self, wing: &Wing, j: usize) -> f32 {
        self.bank.weight(wing.offset + j * self.index_step, wing.eta)
    }

    /// 从第 `start` 个 tap 起依次产出权重，与 `weight(wing, start + k)` 逐个相等
    ///
    /// 按表内步长迭代到表尾，可能比 `wing.len` 多一个，调用方自行截断；
    /// 起点越过表尾时为空
    #[inline]
    pub fn weights(&self, wing: &Wing, start: usize) -> impl Iterator<Item = f32> + '_ {
        let first = wing.offset + start * self.index_step;
        let eta = wing.eta;
        let table = self.bank.table().get(first..).unwrap_or_default();
        let delta = self.bank.delta().get(first..).unwrap_or_default();

        table
            .iter()
            .step_by(self.index_step)
            .zip(delta.iter().step_by(self.index_step))
            .map(move |(&t, &d)| t + eta * d)
    }
}
