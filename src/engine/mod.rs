//! 转换引擎
//!
//! 整合 PCM 读取、重采样、写出：
//! 输入一次性完整读入内存 → `Resampler` 处理整块 → 写出，
//! 不做分块流式处理（没有跨调用的历史状态）。

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::time::Instant;

use thiserror::Error;

use crate::audio::{BackendComparison, ConversionStats, FormatError, PcmBuffer, PcmFormat};
use crate::resample::{Backend, ResampleError, Resampler, ResamplerConfig, MAX_CHANNELS};

/// 引擎配置
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// 重采样配置（采样率、质量、执行方式）
    pub resampler: ResamplerConfig,
    /// 输入声道数（裸 PCM 没有头，需要显式指定）
    pub channels: u16,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            resampler: ResamplerConfig::default(),
            channels: 2,
        }
    }
}

/// 引擎错误
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Format error: {0}")]
    Format(#[from] FormatError),
    #[error("Resample error: {0}")]
    Resample(#[from] ResampleError),
    #[error("input is {actual:?}, engine expects {expected:?}")]
    FormatMismatch {
        expected: PcmFormat,
        actual: PcmFormat,
    },
}

/// 转换引擎
pub struct Engine {
    config: EngineConfig,
    resampler: Resampler,
}

impl Engine {
    /// 创建新引擎
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        let channels = config.channels as usize;
        if channels == 0 || channels > MAX_CHANNELS {
            return Err(ResampleError::UnsupportedChannels(channels).into());
        }

        let resampler = Resampler::from_config(config.resampler)?;
        Ok(Self { config, resampler })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn resampler(&self) -> &Resampler {
        &self.resampler
    }

    /// 输入格式
    pub fn source_format(&self) -> PcmFormat {
        PcmFormat::new(self.config.resampler.src_frequency, self.config.channels)
    }

    /// 输出格式
    pub fn target_format(&self) -> PcmFormat {
        PcmFormat::new(self.config.resampler.dst_frequency, self.config.channels)
    }

    /// 转换内存中的缓冲区
    pub fn convert_buffer(
        &self,
        input: &PcmBuffer,
    ) -> Result<(PcmBuffer, ConversionStats), EngineError> {
        self.check_format(input)?;

        let channels = self.config.channels as usize;
        let start = Instant::now();
        let samples = self.resampler.process(channels, &input.samples)?;
        let elapsed = start.elapsed();

        let output = PcmBuffer::new(self.target_format(), samples);
        let stats = ConversionStats {
            src_rate: self.resampler.src_frequency(),
            dst_rate: self.resampler.dst_frequency(),
            channels: self.config.channels,
            quality: self.resampler.quality(),
            backend: self.resampler.backend(),
            src_frames: input.frames(),
            dst_frames: output.frames(),
            elapsed,
        };

        log::debug!(
            "Resampled {} → {} frames in {:.3} ms ({} backend)",
            stats.src_frames,
            stats.dst_frames,
            elapsed.as_secs_f64() * 1000.0,
            stats.backend
        );

        Ok((output, stats))
    }

    /// 从 reader 读取全部 s16le 数据，转换后写入 writer
    pub fn convert<R: Read, W: Write>(
        &self,
        mut reader: R,
        mut writer: W,
    ) -> Result<ConversionStats, EngineError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let input = PcmBuffer::from_le_bytes(self.source_format(), &bytes)?;

        let (output, stats) = self.convert_buffer(&input)?;

        writer.write_all(&output.to_le_bytes())?;
        writer.flush()?;

        log::info!(
            "Converted {:.2}s of audio: {}Hz → {}Hz ({} ch, {} quality)",
            stats.audio_secs(),
            stats.src_rate,
            stats.dst_rate,
            stats.channels,
            stats.quality
        );

        Ok(stats)
    }

    /// 转换文件
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input: P,
        output: Q,
    ) -> Result<ConversionStats, EngineError> {
        let input = input.as_ref();
        let output = output.as_ref();
        log::info!("Loading: {}", input.display());

        let reader = BufReader::new(File::open(input)?);
        let writer = BufWriter::new(File::create(output)?);
        let stats = self.convert(reader, writer)?;

        log::info!("Written: {}", output.display());
        Ok(stats)
    }

    /// 在同一输入上分别计时两种执行方式，并比较输出
    pub fn compare_backends(&self, input: &PcmBuffer) -> Result<BackendComparison, EngineError> {
        self.check_format(input)?;

        let channels = self.config.channels as usize;
        let src_frames = input.frames();
        let (dst_frames, len) = self.resampler.output_len(src_frames, channels)?;

        let mut scalar = vec![0i16; len];
        let mut vectorized = vec![0i16; len];

        let start = Instant::now();
        self.resampler.resample_with(
            Backend::Scalar,
            channels,
            dst_frames,
            &mut scalar,
            src_frames,
            &input.samples,
        )?;
        let scalar_elapsed = start.elapsed();

        let start = Instant::now();
        self.resampler.resample_with(
            Backend::Vectorized,
            channels,
            dst_frames,
            &mut vectorized,
            src_frames,
            &input.samples,
        )?;
        let vectorized_elapsed = start.elapsed();

        let max_diff = scalar
            .iter()
            .zip(&vectorized)
            .map(|(&a, &b)| (a as i32 - b as i32).unsigned_abs())
            .max()
            .unwrap_or(0);

        if max_diff > 1 {
            log::warn!("Backends disagree by {} LSB", max_diff);
        }

        Ok(BackendComparison {
            frames: dst_frames,
            channels: self.config.channels,
            scalar: scalar_elapsed,
            vectorized: vectorized_elapsed,
            max_diff: max_diff.min(u16::MAX as u32) as u16,
        })
    }

    fn check_format(&self, input: &PcmBuffer) -> Result<(), EngineError> {
        let expected = self.source_format();
        if input.format != expected {
            return Err(EngineError::FormatMismatch {
                expected,
                actual: input.format,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::resample::Quality;

    fn engine(src: u32, dst: u32, channels: u16) -> Engine {
        Engine::new(EngineConfig {
            resampler: ResamplerConfig {
                src_frequency: src,
                dst_frequency: dst,
                quality: Quality::Best,
                backend: Backend::Scalar,
            },
            channels,
        })
        .unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.channels, 2);
        assert_eq!(config.resampler.src_frequency, 44100);
        assert_eq!(config.resampler.dst_frequency, 48000);
        assert!(Engine::new(config).is_ok());
    }

    #[test]
    fn test_rejects_bad_config() {
        let config = EngineConfig {
            channels: 0,
            ..Default::default()
        };
        assert!(matches!(
            Engine::new(config),
            Err(EngineError::Resample(ResampleError::UnsupportedChannels(0)))
        ));

        let mut config = EngineConfig::default();
        config.resampler.src_frequency = 0;
        assert!(matches!(
            Engine::new(config),
            Err(EngineError::Resample(ResampleError::InvalidFrequency { .. }))
        ));
    }

    #[test]
    fn test_convert_stream() {
        let engine = engine(8000, 16000, 1);
        let input: Vec<u8> = [0i16, 1000, -1000, 2000, -2000, 0]
            .iter()
            .flat_map(|s| s.to_le_bytes())
            .collect();

        let mut output = Vec::new();
        let stats = engine.convert(Cursor::new(input), &mut output).unwrap();

        assert_eq!(stats.src_frames, 6);
        assert_eq!(stats.dst_frames, 12);
        assert_eq!(output.len(), 24);

        let samples: Vec<i16> = output
            .chunks_exact(2)
            .map(|b| i16::from_le_bytes([b[0], b[1]]))
            .collect();
        assert_eq!(
            samples,
            [297, 1219, 694, -641, -689, 839, 1688, 320, -1690, -1868, -303, 766]
        );
    }

    #[test]
    fn test_convert_rejects_partial_frame() {
        let engine = engine(44100, 48000, 2);
        let err = engine
            .convert(Cursor::new(vec![0u8; 6]), Vec::new())
            .unwrap_err();
        assert!(matches!(err, EngineError::Format(FormatError::PartialFrame { .. })));
    }

    #[test]
    fn test_format_mismatch() {
        let engine = engine(44100, 48000, 2);
        let input = PcmBuffer::new(PcmFormat::new(48000, 2), vec![0; 8]);
        assert!(matches!(
            engine.convert_buffer(&input),
            Err(EngineError::FormatMismatch { .. })
        ));
    }

    #[test]
    fn test_convert_buffer_stereo() {
        let engine = engine(44100, 22050, 2);
        let samples: Vec<i16> = (0..882).map(|i| if i % 2 == 0 { 5000 } else { -5000 }).collect();
        let input = PcmBuffer::new(engine.source_format(), samples);

        let (output, stats) = engine.convert_buffer(&input).unwrap();
        assert_eq!(output.format, PcmFormat::new(22050, 2));
        assert_eq!(output.frames(), 221);
        assert_eq!(stats.dst_frames, 221);

        // 两个声道各自是直流，远离边缘的中段保持电平
        let mid = &output.samples[200..240];
        for frame in mid.chunks_exact(2) {
            assert!(frame[0] > 4000 && frame[1] < -4000, "{:?}", frame);
        }
    }

    #[test]
    fn test_compare_backends() {
        let engine = engine(44100, 48000, 2);
        let samples: Vec<i16> = (0..4410).map(|i| ((i * 7919) % 30001 - 15000) as i16).collect();
        let input = PcmBuffer::new(engine.source_format(), samples);

        let comparison = engine.compare_backends(&input).unwrap();
        assert_eq!(comparison.frames, 2400);
        assert_eq!(comparison.channels, 2);
        assert!(comparison.is_equivalent());
    }
}
