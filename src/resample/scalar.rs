//! 标量卷积实现
//!
//! 逐输出帧计算左右两翼的多相卷积，是向量化实现的参考结果。

use super::plan::Plan;
use super::MAX_CHANNELS;

/// 计算虚拟时间 `time` 处的一个输出帧
///
/// `src` 只包含有效帧（长度为 `channels` 的整数倍且非空），
/// `out` 长度等于 `channels`
#[inline]
pub(crate) fn render_frame(plan: &Plan, time: f64, channels: usize, src: &[i16], out: &mut [i16]) {
    let tap = plan.locate(time, src.len() / channels);
    let mut acc = [0.0f32; MAX_CHANNELS];

    // 左翼：n, n-1, n-2, ...
    for j in tap.left_start..tap.left_end {
        let weight = plan.weight(&tap.left, j);
        let frame = &src[(tap.n - j) * channels..][..channels];
        for (a, &s) in acc.iter_mut().zip(frame) {
            *a += weight * s as f32;
        }
    }

    // 右翼：n+1, n+2, ...
    for j in 0..tap.right_end {
        let weight = plan.weight(&tap.right, j);
        let frame = &src[(tap.n + j + 1) * channels..][..channels];
        for (a, &s) in acc.iter_mut().zip(frame) {
            *a += weight * s as f32;
        }
    }

    for (o, &a) in out.iter_mut().zip(&acc) {
        *o = to_i16(a * plan.scale);
    }
}

/// 四舍五入并饱和到 i16
#[inline]
pub(crate) fn to_i16(value: f32) -> i16 {
    value.round().clamp(i16::MIN as f32, i16::MAX as f32) as i16
}

pub(crate) fn run(plan: &Plan, channels: usize, dst: &mut [i16], src: &[i16]) {
    let mut time = 0.0f64;
    for out in dst.chunks_exact_mut(channels) {
        render_frame(plan, time, channels, src, out);
        time += plan.time_step;
    }
}
