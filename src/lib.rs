//! HiFi Resampler Library
//!
//! Band-limited sample rate conversion for 16-bit PCM.
//!
//! - `resample`: 多相 Kaiser-sinc 重采样核心（标量 / 向量化）
//! - `audio`: 裸 s16le 格式与转换统计
//! - `engine`: 整文件转换流程

pub mod audio;
pub mod engine;
pub mod resample;

pub use engine::{Engine, EngineConfig, EngineError};
pub use resample::{Backend, Quality, ResampleError, Resampler, ResamplerConfig};
