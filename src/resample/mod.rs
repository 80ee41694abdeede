//! 重采样模块
//!
//! 带限插值：用 Kaiser 窗 sinc 低通隐式重建连续信号，再按目标采样率取样。
//! - `filter`: Fast / Best 两组预计算多相滤波器
//! - `scalar`: 逐帧卷积（参考实现）
//! - `vectorized`: 连续窗口点积的等价实现
//!
//! `Resampler` 构造后不可变，可在多个线程间共享并发调用。

mod filter;
mod plan;
mod scalar;
mod tables;
mod vectorized;

use std::fmt;

use thiserror::Error;

pub use filter::{FilterBank, FilterConfig, Quality};
pub use vectorized::LANES;

use plan::Plan;

/// 单次调用支持的最大声道数
pub const MAX_CHANNELS: usize = 8;

/// 缓冲区标识（用于错误信息）
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BufferKind {
    Source,
    Destination,
}

impl fmt::Display for BufferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => write!(f, "source"),
            Self::Destination => write!(f, "destination"),
        }
    }
}

/// 重采样错误
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResampleError {
    /// 采样率为 0
    #[error("invalid sample rates: {src_frequency}Hz -> {dst_frequency}Hz (both must be positive)")]
    InvalidFrequency {
        src_frequency: u32,
        dst_frequency: u32,
    },
    /// 降采样比太低，滤波器表无法表达对应的低通
    #[error("ratio {ratio:.4} is too low for {quality} quality, try Fast")]
    RatioTooLow { ratio: f64, quality: Quality },
    /// 声道数不在 1..=MAX_CHANNELS
    #[error("unsupported channel count: {0} (expected 1..={})", MAX_CHANNELS)]
    UnsupportedChannels(usize),
    /// 缓冲区样本数不足
    #[error("{buffer} buffer too small: need {required} samples, got {actual}")]
    BufferTooSmall {
        buffer: BufferKind,
        required: usize,
        actual: usize,
    },
    /// frames * channels 溢出 usize
    #[error("{buffer} buffer size overflows: {frames} frames x {channels} channels")]
    SizeOverflow {
        buffer: BufferKind,
        frames: usize,
        channels: usize,
    },
}

impl ResampleError {
    /// 构造期配置错误
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::InvalidFrequency { .. } | Self::RatioTooLow { .. })
    }

    /// 调用期契约违反（缓冲区 / 声道数）
    pub fn is_contract_violation(&self) -> bool {
        !self.is_configuration()
    }
}

/// 卷积执行方式
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Backend {
    /// 逐帧标量卷积
    #[default]
    Scalar,
    /// 权重展开到连续窗口后按 LANES 帧分组点积
    Vectorized,
}

impl Backend {
    pub const ALL: [Backend; 2] = [Backend::Scalar, Backend::Vectorized];

    fn run(self, plan: &Plan, channels: usize, dst: &mut [i16], src: &[i16]) {
        match self {
            Self::Scalar => scalar::run(plan, channels, dst, src),
            Self::Vectorized => vectorized::run(plan, channels, dst, src),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar => write!(f, "scalar"),
            Self::Vectorized => write!(f, "vectorized"),
        }
    }
}

/// 重采样配置
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResamplerConfig {
    /// 源采样率（Hz）
    pub src_frequency: u32,
    /// 目标采样率（Hz）
    pub dst_frequency: u32,
    pub quality: Quality,
    pub backend: Backend,
}

impl Default for ResamplerConfig {
    fn default() -> Self {
        Self {
            src_frequency: 44100,
            dst_frequency: 48000,
            quality: Quality::Best,
            backend: Backend::Scalar,
        }
    }
}

impl ResamplerConfig {
    /// 目标 / 源 采样率比
    pub fn sample_ratio(&self) -> f64 {
        self.dst_frequency as f64 / self.src_frequency as f64
    }
}

/// 带限插值重采样器
///
/// 构造后不可变：`resample` 只读取配置和滤波器表，
/// 同一实例可以在多个线程上并发调用（各自使用独立的缓冲区）。
#[derive(Clone, Debug)]
pub struct Resampler {
    config: ResamplerConfig,
    plan: Plan,
}

impl Resampler {
    /// 创建重采样器
    pub fn new(
        src_frequency: u32,
        dst_frequency: u32,
        quality: Quality,
    ) -> Result<Self, ResampleError> {
        Self::from_config(ResamplerConfig {
            src_frequency,
            dst_frequency,
            quality,
            ..Default::default()
        })
    }

    /// 从完整配置创建
    pub fn from_config(config: ResamplerConfig) -> Result<Self, ResampleError> {
        if config.src_frequency == 0 || config.dst_frequency == 0 {
            return Err(ResampleError::InvalidFrequency {
                src_frequency: config.src_frequency,
                dst_frequency: config.dst_frequency,
            });
        }

        let plan = Plan::new(config.src_frequency, config.dst_frequency, config.quality)?;

        log::debug!(
            "Resampler: {}Hz → {}Hz (ratio {:.6}, {} quality, {} backend, index step {})",
            config.src_frequency,
            config.dst_frequency,
            config.sample_ratio(),
            config.quality,
            config.backend,
            plan.index_step
        );

        Ok(Self { config, plan })
    }

    /// 切换执行方式（结果在 1 LSB 内一致）
    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.config.backend = backend;
        self
    }

    #[inline]
    pub fn config(&self) -> &ResamplerConfig {
        &self.config
    }

    #[inline]
    pub fn src_frequency(&self) -> u32 {
        self.config.src_frequency
    }

    #[inline]
    pub fn dst_frequency(&self) -> u32 {
        self.config.dst_frequency
    }

    #[inline]
    pub fn sample_ratio(&self) -> f64 {
        self.config.sample_ratio()
    }

    #[inline]
    pub fn quality(&self) -> Quality {
        self.config.quality
    }

    #[inline]
    pub fn backend(&self) -> Backend {
        self.config.backend
    }

    /// 给定输入帧数时推荐的输出帧数：round(src_frames * ratio)
    pub fn output_frames(&self, src_frames: usize) -> usize {
        (src_frames as f64 * self.sample_ratio()).round() as usize
    }

    /// 输出帧数和对应的样本数 `output_frames * channels`，乘积溢出时报错
    pub fn output_len(
        &self,
        src_frames: usize,
        channels: usize,
    ) -> Result<(usize, usize), ResampleError> {
        let dst_frames = self.output_frames(src_frames);
        let len = required_len(BufferKind::Destination, usize::MAX, dst_frames, channels)?;
        Ok((dst_frames, len))
    }

    /// 重采样一个完整缓冲区
    ///
    /// - `dst` 至少 `dst_frames * channels` 个样本，`src` 至少 `src_frames * channels` 个样本
    /// - 多出的部分不读也不写
    /// - `dst_frames` 通常取 `output_frames(src_frames)`，这里不强制
    ///
    /// 返回写入的帧数。参数不满足时在写入任何样本之前返回错误。
    pub fn resample(
        &self,
        channels: usize,
        dst_frames: usize,
        dst: &mut [i16],
        src_frames: usize,
        src: &[i16],
    ) -> Result<usize, ResampleError> {
        self.resample_with(self.config.backend, channels, dst_frames, dst, src_frames, src)
    }

    /// 使用指定执行方式重采样（忽略配置中的 backend）
    pub fn resample_with(
        &self,
        backend: Backend,
        channels: usize,
        dst_frames: usize,
        dst: &mut [i16],
        src_frames: usize,
        src: &[i16],
    ) -> Result<usize, ResampleError> {
        if channels == 0 || channels > MAX_CHANNELS {
            return Err(ResampleError::UnsupportedChannels(channels));
        }
        let dst_len = required_len(BufferKind::Destination, dst.len(), dst_frames, channels)?;
        let src_len = required_len(BufferKind::Source, src.len(), src_frames, channels)?;
        let dst = &mut dst[..dst_len];
        let src = &src[..src_len];

        if src.is_empty() {
            // 没有输入：输出静音
            dst.fill(0);
        } else {
            backend.run(&self.plan, channels, dst, src);
        }

        Ok(dst_frames)
    }

    /// 分配输出缓冲区并重采样全部输入
    ///
    /// `src` 长度必须是 `channels` 的整数倍
    pub fn process(&self, channels: usize, src: &[i16]) -> Result<Vec<i16>, ResampleError> {
        if channels == 0 || channels > MAX_CHANNELS {
            return Err(ResampleError::UnsupportedChannels(channels));
        }
        if src.len() % channels != 0 {
            return Err(ResampleError::BufferTooSmall {
                buffer: BufferKind::Source,
                required: src.len().next_multiple_of(channels),
                actual: src.len(),
            });
        }

        let src_frames = src.len() / channels;
        let (dst_frames, len) = self.output_len(src_frames, channels)?;

        let mut dst = vec![0i16; len];
        self.resample(channels, dst_frames, &mut dst, src_frames, src)?;
        Ok(dst)
    }
}

/// 校验缓冲区长度，返回需要的样本数 `frames * channels`
fn required_len(
    buffer: BufferKind,
    actual: usize,
    frames: usize,
    channels: usize,
) -> Result<usize, ResampleError> {
    let required = frames
        .checked_mul(channels)
        .ok_or(ResampleError::SizeOverflow {
            buffer,
            frames,
            channels,
        })?;
    if actual < required {
        return Err(ResampleError::BufferTooSmall {
            buffer,
            required,
            actual,
        });
    }
    Ok(required)
}
