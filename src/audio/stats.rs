//! 转换统计模块
//!
//! 记录一次转换的帧数、耗时，以及两种执行方式的对比结果

use std::time::Duration;

use crate::resample::{Backend, Quality};

/// 单次转换统计
#[derive(Clone, Debug)]
pub struct ConversionStats {
    pub src_rate: u32,
    pub dst_rate: u32,
    pub channels: u16,
    pub quality: Quality,
    pub backend: Backend,
    pub src_frames: usize,
    pub dst_frames: usize,
    pub elapsed: Duration,
}

impl ConversionStats {
    /// 输入音频时长（秒）
    pub fn audio_secs(&self) -> f64 {
        if self.src_rate == 0 {
            return 0.0;
        }
        self.src_frames as f64 / self.src_rate as f64
    }

    /// 实时倍率：音频时长 / 处理耗时
    pub fn realtime_factor(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.audio_secs() / secs
        } else {
            f64::INFINITY
        }
    }

    /// 每秒输出帧数
    pub fn frames_per_sec(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.dst_frames as f64 / secs
        } else {
            f64::INFINITY
        }
    }
}

impl std::fmt::Display for ConversionStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Conversion Statistics")?;
        writeln!(f, "=====================")?;
        writeln!(
            f,
            "Rate: {} Hz → {} Hz ({} ch)",
            self.src_rate, self.dst_rate, self.channels
        )?;
        writeln!(f, "Quality: {} | Backend: {}", self.quality, self.backend)?;
        writeln!(f, "Frames: {} → {}", self.src_frames, self.dst_frames)?;
        writeln!(f, "Audio: {:.2} s", self.audio_secs())?;
        writeln!(
            f,
            "Elapsed: {:.3} ms",
            self.elapsed.as_secs_f64() * 1000.0
        )?;
        writeln!(f, "Realtime: {:.1}x", self.realtime_factor())?;

        Ok(())
    }
}

/// 标量 / 向量化执行方式对比
#[derive(Clone, Debug)]
pub struct BackendComparison {
    pub frames: usize,
    pub channels: u16,
    pub scalar: Duration,
    pub vectorized: Duration,
    /// 两者输出的最大样本差（LSB）
    pub max_diff: u16,
}

impl BackendComparison {
    /// 向量化相对标量的加速比
    pub fn speedup(&self) -> f64 {
        let vectorized = self.vectorized.as_secs_f64();
        if vectorized > 0.0 {
            self.scalar.as_secs_f64() / vectorized
        } else {
            f64::INFINITY
        }
    }

    /// 输出是否在 1 LSB 内一致
    pub fn is_equivalent(&self) -> bool {
        self.max_diff <= 1
    }
}

impl std::fmt::Display for BackendComparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Backend Comparison")?;
        writeln!(f, "==================")?;
        writeln!(f, "Output: {} frames x {} ch", self.frames, self.channels)?;
        writeln!(
            f,
            "  scalar:     {:>10} µs",
            self.scalar.as_micros()
        )?;
        writeln!(
            f,
            "  vectorized: {:>10} µs",
            self.vectorized.as_micros()
        )?;
        writeln!(f, "Speedup: {:.2}x", self.speedup())?;
        writeln!(
            f,
            "Max difference: {} LSB ({})",
            self.max_diff,
            if self.is_equivalent() { "ok" } else { "MISMATCH" }
        )?;

        Ok(())
    }
}
