//! 向量化卷积实现
//!
//! 一个输出帧的两翼在输入上覆盖一段连续的帧窗口：
//! 左翼 `n - j` 按帧升序翻转后与右翼 `n + j + 1` 首尾相接。
//! 因此每帧先把权重按交织布局展开到窗口缓冲区，
//! 再与输入窗口做连续的乘加（`LANES` 帧一组，定长累加器），
//! 热循环里没有下标检查、分支和分散读取，编译器可以直接生成 SIMD 指令。
//!
//! 累加顺序按 lane 分组，与标量实现相差不超过 1 LSB。

use super::plan::{Plan, Tap};
use super::scalar::to_i16;
use super::MAX_CHANNELS;

/// 每组帧数
pub const LANES: usize = 8;

pub(crate) fn run(plan: &Plan, channels: usize, dst: &mut [i16], src: &[i16]) {
    let src_frames = src.len() / channels;
    // 输入一次性转换为 f32，乘加循环里不再做整数转换
    let samples: Vec<f32> = src.iter().map(|&s| s as f32).collect();
    // 两翼合计不超过 2 * taps 帧
    let mut weights = vec![0.0f32; 2 * plan.bank.taps() * channels];

    let mut time = 0.0f64;
    for out in dst.chunks_exact_mut(channels) {
        let tap = plan.locate(time, src_frames);
        render_frame(plan, &tap, channels, &samples, &mut weights, out);
        time += plan.time_step;
    }
}

fn render_frame(
    plan: &Plan,
    tap: &Tap,
    channels: usize,
    samples: &[f32],
    weights: &mut [f32],
    out: &mut [i16],
) {
    let left = tap.left_end.saturating_sub(tap.left_start);
    let right = tap.right_end;
    // 左翼读取 n - left_start 及之前的 left 帧；右翼非空时 left_start 必为 0
    let first = tap.n + 1 - tap.left_start - left;
    let len = (left + right) * channels;

    let weights = &mut weights[..len];
    let (left_weights, right_weights) = weights.split_at_mut(left * channels);
    for (frame, weight) in left_weights
        .chunks_exact_mut(channels)
        .rev()
        .zip(plan.weights(&tap.left, tap.left_start))
    {
        frame.fill(weight);
    }
    for (frame, weight) in right_weights
        .chunks_exact_mut(channels)
        .zip(plan.weights(&tap.right, 0))
    {
        frame.fill(weight);
    }

    let window = &samples[first * channels..][..len];
    let acc = dot(weights, window, channels);

    for (c, o) in out.iter_mut().enumerate() {
        let sum: f32 = acc[c..LANES * channels].iter().step_by(channels).sum();
        *o = to_i16(sum * plan.scale);
    }
}

/// 交织布局的分组点积
///
/// 累加器下标 `i` 对应声道 `i % channels`，组长是 `channels` 的整数倍，
/// 尾部不足一组的部分也按同样的下标累加。
#[inline(always)]
fn dot(weights: &[f32], window: &[f32], channels: usize) -> [f32; LANES * MAX_CHANNELS] {
    let mut acc = [0.0f32; LANES * MAX_CHANNELS];
    let block = LANES * channels;
    let lanes = &mut acc[..block];

    let mut weight_blocks = weights.chunks_exact(block);
    let mut sample_blocks = window.chunks_exact(block);
    for (wb, sb) in (&mut weight_blocks).zip(&mut sample_blocks) {
        for ((a, &w), &s) in lanes.iter_mut().zip(wb).zip(sb) {
            *a += w * s;
        }
    }
    for ((a, &w), &s) in lanes
        .iter_mut()
        .zip(weight_blocks.remainder())
        .zip(sample_blocks.remainder())
    {
        *a += w * s;
    }

    acc
}
