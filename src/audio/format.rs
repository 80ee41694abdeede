//! PCM 格式和样本编解码
//!
//! 只处理 16-bit 有符号、交织、little-endian 的裸 PCM：
//! `sample[frame * channels + channel]`

use thiserror::Error;

/// 每样本字节数
pub const BYTES_PER_SAMPLE: usize = 2;

/// 格式错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// 字节数不是完整帧的整数倍
    #[error("{len} bytes is not a whole number of {channels}-channel s16 frames")]
    PartialFrame { len: usize, channels: u16 },
    #[error("channel count must be positive")]
    NoChannels,
}

/// PCM 格式
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PcmFormat {
    pub sample_rate: u32,
    pub channels: u16,
}

impl PcmFormat {
    /// 创建新的 PCM 格式
    pub fn new(sample_rate: u32, channels: u16) -> Self {
        Self {
            sample_rate,
            channels,
        }
    }

    /// 每帧的样本数（= 声道数）
    #[inline]
    pub fn samples_per_frame(&self) -> usize {
        self.channels as usize
    }

    /// 每帧的字节数
    #[inline]
    pub fn bytes_per_frame(&self) -> usize {
        BYTES_PER_SAMPLE * self.channels as usize
    }

    /// 帧数对应的时长（秒）
    pub fn duration_secs(&self, frames: usize) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        frames as f64 / self.sample_rate as f64
    }

    /// 把 little-endian 字节解码为 i16 样本
    ///
    /// 返回写入的样本数
    pub fn bytes_to_samples(&self, bytes: &[u8], output: &mut [i16]) -> usize {
        let mut written = 0;
        for (out, chunk) in output.iter_mut().zip(bytes.chunks_exact(BYTES_PER_SAMPLE)) {
            *out = i16::from_le_bytes([chunk[0], chunk[1]]);
            written += 1;
        }
        written
    }

    /// 把 i16 样本编码为 little-endian 字节
    ///
    /// 返回写入的字节数
    pub fn samples_to_bytes(&self, samples: &[i16], output: &mut [u8]) -> usize {
        let mut written = 0;
        for (chunk, &sample) in output.chunks_exact_mut(BYTES_PER_SAMPLE).zip(samples) {
            chunk.copy_from_slice(&sample.to_le_bytes());
            written += BYTES_PER_SAMPLE;
        }
        written
    }
}

/// 完整载入内存的交织 PCM 缓冲区
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PcmBuffer {
    pub format: PcmFormat,
    pub samples: Vec<i16>,
}

impl PcmBuffer {
    pub fn new(format: PcmFormat, samples: Vec<i16>) -> Self {
        Self { format, samples }
    }

    /// 从裸 s16le 字节构造，字节数必须是整帧
    pub fn from_le_bytes(format: PcmFormat, bytes: &[u8]) -> Result<Self, FormatError> {
        if format.channels == 0 {
            return Err(FormatError::NoChannels);
        }
        if bytes.len() % format.bytes_per_frame() != 0 {
            return Err(FormatError::PartialFrame {
                len: bytes.len(),
                channels: format.channels,
            });
        }

        let mut samples = vec![0i16; bytes.len() / BYTES_PER_SAMPLE];
        format.bytes_to_samples(bytes, &mut samples);
        Ok(Self { format, samples })
    }

    /// 编码为裸 s16le 字节
    pub fn to_le_bytes(&self) -> Vec<u8> {
        let mut bytes = vec![0u8; self.samples.len() * BYTES_PER_SAMPLE];
        self.format.samples_to_bytes(&self.samples, &mut bytes);
        bytes
    }

    /// 帧数
    #[inline]
    pub fn frames(&self) -> usize {
        match self.format.samples_per_frame() {
            0 => 0,
            channels => self.samples.len() / channels,
        }
    }

    /// 时长（秒）
    pub fn duration_secs(&self) -> f64 {
        self.format.duration_secs(self.frames())
    }
}
