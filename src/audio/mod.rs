//! 音频数据模块
//!
//! 包含：
//! - Format: s16le 裸 PCM 格式和样本编解码
//! - Stats: 转换统计

pub mod format;
pub mod stats;

pub use format::{FormatError, PcmBuffer, PcmFormat};
pub use stats::{BackendComparison, ConversionStats};
