//! HiFi Resampler - 带限重采样命令行工具
//!
//! 输入输出均为裸 s16le 交织 PCM（无文件头），采样率和声道数由参数给出。

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use hifi_resampler::audio::{PcmBuffer, PcmFormat};
use hifi_resampler::{Backend, Engine, EngineConfig, Quality, ResamplerConfig};

/// HiFi Resampler - band-limited sample rate converter for s16 PCM
#[derive(Parser)]
#[command(name = "hifi-resampler")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Show verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Resample a raw s16le file
    Convert {
        /// Input file (raw interleaved s16le)
        input: PathBuf,

        /// Output file
        output: PathBuf,

        /// Source sample rate in Hz
        #[arg(long, default_value = "44100")]
        from: u32,

        /// Target sample rate in Hz
        #[arg(long, default_value = "48000")]
        to: u32,

        /// Interleaved channel count
        #[arg(short, long, default_value = "2")]
        channels: u16,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Time the scalar and vectorized backends on white noise
    Bench {
        /// Seconds of audio to generate
        #[arg(short, long, default_value = "10")]
        seconds: u32,

        #[arg(long, default_value = "44100")]
        from: u32,

        #[arg(long, default_value = "48000")]
        to: u32,

        #[arg(short, long, default_value = "2")]
        channels: u16,

        /// Quality preset
        #[arg(short, long, value_enum, default_value_t = QualityArg::Best)]
        quality: QualityArg,

        /// Noise seed
        #[arg(long, default_value = "0")]
        seed: u64,
    },

    /// Dump a filter table as CSV
    Tables {
        #[arg(short, long, value_enum, default_value_t = QualityArg::Best)]
        quality: QualityArg,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show filter presets
    Info,
}

#[derive(clap::Args)]
struct FilterArgs {
    /// Quality preset
    #[arg(short, long, value_enum, default_value_t = QualityArg::Best)]
    quality: QualityArg,

    /// Convolution backend
    #[arg(short, long, value_enum, default_value_t = BackendArg::Scalar)]
    backend: BackendArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum QualityArg {
    Fast,
    Best,
}

impl From<QualityArg> for Quality {
    fn from(arg: QualityArg) -> Self {
        match arg {
            QualityArg::Fast => Quality::Fast,
            QualityArg::Best => Quality::Best,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum BackendArg {
    Scalar,
    Vectorized,
}

impl From<BackendArg> for Backend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Scalar => Backend::Scalar,
            BackendArg::Vectorized => Backend::Vectorized,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 初始化日志
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    match cli.command {
        Commands::Convert {
            input,
            output,
            from,
            to,
            channels,
            filter,
        } => {
            let config = EngineConfig {
                resampler: ResamplerConfig {
                    src_frequency: from,
                    dst_frequency: to,
                    quality: filter.quality.into(),
                    backend: filter.backend.into(),
                },
                channels,
            };
            convert(&input, &output, config)?;
        }
        Commands::Bench {
            seconds,
            from,
            to,
            channels,
            quality,
            seed,
        } => {
            let config = EngineConfig {
                resampler: ResamplerConfig {
                    src_frequency: from,
                    dst_frequency: to,
                    quality: quality.into(),
                    ..Default::default()
                },
                channels,
            };
            bench(config, seconds, seed)?;
        }
        Commands::Tables { quality, output } => {
            dump_tables(quality.into(), output)?;
        }
        Commands::Info => show_presets(),
    }

    Ok(())
}

/// 转换单个文件并打印统计
fn convert(input: &Path, output: &Path, config: EngineConfig) -> anyhow::Result<()> {
    let engine = Engine::new(config).context("Invalid conversion settings")?;

    println!("HiFi Resampler");
    println!("Loading: {}", input.display());

    let stats = engine
        .convert_file(input, output)
        .with_context(|| format!("Failed to convert {}", input.display()))?;

    println!("Written: {}\n", output.display());
    print!("{}", stats);

    Ok(())
}

/// 在随机白噪声上对比两种执行方式
fn bench(config: EngineConfig, seconds: u32, seed: u64) -> anyhow::Result<()> {
    let engine = Engine::new(config).context("Invalid benchmark settings")?;
    let format = PcmFormat::new(config.resampler.src_frequency, config.channels);

    let len = (format.sample_rate as usize)
        .checked_mul(seconds as usize)
        .and_then(|frames| frames.checked_mul(format.samples_per_frame()))
        .context("Benchmark length overflows")?;

    let start = Instant::now();
    let mut rng = StdRng::seed_from_u64(seed);
    let samples: Vec<i16> = (0..len).map(|_| rng.gen_range(-16384..=16384)).collect();
    let input = PcmBuffer::new(format, samples);
    log::info!(
        "Generated {:.1}s of noise in {:?}",
        input.duration_secs(),
        start.elapsed()
    );

    println!(
        "{} Hz → {} Hz, {} quality, {:.1}s of audio\n",
        config.resampler.src_frequency,
        config.resampler.dst_frequency,
        engine.resampler().quality(),
        input.duration_secs()
    );

    let comparison = engine.compare_backends(&input)?;
    print!("{}", comparison);

    if !comparison.is_equivalent() {
        anyhow::bail!(
            "backends differ by {} LSB (expected at most 1)",
            comparison.max_diff
        );
    }

    Ok(())
}

/// 导出滤波器表
fn dump_tables(quality: Quality, output: Option<PathBuf>) -> anyhow::Result<()> {
    let bank = quality.filter_bank();

    match output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            bank.write_csv(&mut writer)?;
            writer.flush()?;
            println!("{} table written to {}", quality, path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            bank.write_csv(&mut writer)?;
            writer.flush()?;
        }
    }

    Ok(())
}

/// 打印预设参数
fn show_presets() {
    println!("=== Filter Presets ===\n");

    for quality in Quality::ALL {
        let config = quality.config();
        println!(
            "{:<5} oversample {:>2}  taps {:>3}  zero crossings {:>2}",
            quality.to_string(),
            config.oversample,
            config.taps,
            config.zero_crossings()
        );
    }

    println!();
    println!("Lowest downsampling ratio per preset:");
    for quality in Quality::ALL {
        let config = quality.config();
        println!("  {:<5} {:.4}", quality.to_string(), 1.0 / config.oversample as f64);
    }
}
