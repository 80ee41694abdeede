//! 重采样器集成测试
//!
//! 只通过公开 API：固定输出、契约检查、越界保护、执行方式一致性、多线程共享。

use hifi_resampler::resample::{BufferKind, LANES, MAX_CHANNELS};
use hifi_resampler::{Backend, Quality, ResampleError, Resampler};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const GOLDEN_SRC: [i16; 6] = [0, 1000, -1000, 2000, -2000, 0];

fn noise(rng: &mut StdRng, len: usize, amplitude: i16) -> Vec<i16> {
    (0..len).map(|_| rng.gen_range(-amplitude..=amplitude)).collect()
}

fn max_diff(a: &[i16], b: &[i16]) -> i32 {
    a.iter()
        .zip(b)
        .map(|(&x, &y)| (x as i32 - y as i32).abs())
        .max()
        .unwrap_or(0)
}

// ─── 固定输出 ──────────────────────────────────────────────────────

#[test]
fn golden_upsample_best() {
    let resampler = Resampler::new(8000, 16000, Quality::Best).unwrap();
    let mut dst = [0i16; 12];
    for backend in Backend::ALL {
        resampler
            .resample_with(backend, 1, 12, &mut dst, 6, &GOLDEN_SRC)
            .unwrap();
        assert_eq!(
            dst,
            [297, 1219, 694, -641, -689, 839, 1688, 320, -1690, -1868, -303, 766],
            "{} backend",
            backend
        );
    }
}

#[test]
fn golden_upsample_fast() {
    let resampler = Resampler::new(8000, 16000, Quality::Fast).unwrap();
    let out = resampler.process(1, &GOLDEN_SRC).unwrap();
    assert_eq!(
        out,
        [562, 849, 284, -400, -181, 772, 1152, 200, -1204, -1583, -676, 367]
    );
}

#[test]
fn single_source_frame() {
    let mut dst = [0i16; 4];

    let fast = Resampler::new(8000, 16000, Quality::Fast).unwrap();
    fast.resample(1, 4, &mut dst, 1, &[10000]).unwrap();
    assert_eq!(dst, [8500, 6166, 1423, -1558]);

    let best = Resampler::new(8000, 16000, Quality::Best).unwrap();
    best.resample(1, 4, &mut dst, 1, &[10000]).unwrap();
    assert_eq!(dst, [9476, 6342, 521, -2050]);
}

#[test]
fn dc_level_preserved_when_upsampling() {
    const N: usize = 600;
    let src = vec![10000i16; N];

    for quality in Quality::ALL {
        let resampler = Resampler::new(44100, 48000, quality).unwrap();
        let out = resampler.process(1, &src).unwrap();
        assert_eq!(out.len(), 653);

        // 边缘处滤波器窗被截断，只检查中段
        let edge = quality.config().zero_crossings() * 2;
        for (i, &sample) in out[edge..out.len() - edge].iter().enumerate() {
            assert!(
                (sample as i32 - 10000).abs() <= 2,
                "{} frame {}: {}",
                quality,
                i + edge,
                sample
            );
        }
    }
}

// ─── 配置 ──────────────────────────────────────────────────────

#[test]
fn downsampling_limit_depends_on_preset() {
    // 48k → 8k：Best 每相位步进 0，Fast 仍可用
    let err = Resampler::new(48000, 8000, Quality::Best).unwrap_err();
    assert!(matches!(err, ResampleError::RatioTooLow { quality: Quality::Best, .. }));
    assert!(Resampler::new(48000, 8000, Quality::Fast).is_ok());

    // 恰好 1/4 时 Best 仍可用
    assert!(Resampler::new(44100, 11025, Quality::Best).is_ok());
}

#[test]
fn contract_violations_leave_output_untouched() {
    let resampler = Resampler::new(44100, 48000, Quality::Best).unwrap();
    let src = [100i16; 32];
    let mut dst = [-1i16; 32];

    let cases = [
        (0, 4, 4, ResampleError::UnsupportedChannels(0)),
        (
            MAX_CHANNELS + 1,
            1,
            1,
            ResampleError::UnsupportedChannels(MAX_CHANNELS + 1),
        ),
        (
            2,
            4,
            17,
            ResampleError::BufferTooSmall {
                buffer: BufferKind::Source,
                required: 34,
                actual: 32,
            },
        ),
        (
            4,
            9,
            8,
            ResampleError::BufferTooSmall {
                buffer: BufferKind::Destination,
                required: 36,
                actual: 32,
            },
        ),
    ];

    for (channels, dst_frames, src_frames, expected) in cases {
        let err = resampler
            .resample(channels, dst_frames, &mut dst, src_frames, &src)
            .unwrap_err();
        assert_eq!(err, expected);
        assert!(err.is_contract_violation());
        assert!(dst.iter().all(|&s| s == -1));
    }
}

// ─── 越界 ─────────────────────────────────────────────────────────────

#[test]
fn never_touches_memory_outside_the_requested_frames() {
    const GUARD: i16 = 0x5A5A;
    let mut rng = StdRng::seed_from_u64(7);

    let rates = [
        (8000, 16000),
        (11025, 44100),
        (44100, 48000),
        (48000, 44100),
        (44100, 11025),
        (48000, 48000),
    ];
    let src_lengths = [1usize, 2, 3, 5, 8, 17, 64, 129, 300];

    for (src_rate, dst_rate) in rates {
        for quality in Quality::ALL {
            let resampler = Resampler::new(src_rate, dst_rate, quality).unwrap();
            for backend in Backend::ALL {
                for channels in 1..=3 {
                    for src_frames in src_lengths {
                        let src = noise(&mut rng, src_frames * channels, i16::MAX);
                        let dst_frames = resampler.output_frames(src_frames) + LANES + 1;
                        let len = dst_frames * channels;
                        let mut dst = vec![GUARD; len + 16];

                        let written = resampler
                            .resample_with(backend, channels, dst_frames, &mut dst, src_frames, &src)
                            .unwrap();

                        assert_eq!(written, dst_frames);
                        assert!(
                            dst[len..].iter().all(|&s| s == GUARD),
                            "{}Hz→{}Hz {} {} {}ch {} frames wrote past the end",
                            src_rate,
                            dst_rate,
                            quality,
                            backend,
                            channels,
                            src_frames
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn silence_in_silence_out() {
    for quality in Quality::ALL {
        let resampler = Resampler::new(48000, 44100, quality).unwrap();
        let out = resampler.process(2, &[0i16; 1000]).unwrap();
        assert!(out.iter().all(|&s| s == 0));
    }
}

// ─── 执行方式 ───────────────────────────────────────────────────────────

#[test]
fn backends_agree_on_seeded_noise() {
    let mut rng = StdRng::seed_from_u64(0x5EED);

    for (src_rate, dst_rate) in [(44100, 48000), (48000, 44100), (22050, 44100), (96000, 32000)] {
        for quality in Quality::ALL {
            let resampler = match Resampler::new(src_rate, dst_rate, quality) {
                Ok(resampler) => resampler,
                Err(ResampleError::RatioTooLow { .. }) => continue,
                Err(err) => panic!("{}", err),
            };

            for channels in 1..=MAX_CHANNELS {
                let src_frames = rng.gen_range(1..400);
                let src = noise(&mut rng, src_frames * channels, 20000);
                let dst_frames = resampler.output_frames(src_frames);

                let mut scalar = vec![0i16; dst_frames * channels];
                let mut vectorized = vec![0i16; dst_frames * channels];
                resampler
                    .resample_with(Backend::Scalar, channels, dst_frames, &mut scalar, src_frames, &src)
                    .unwrap();
                resampler
                    .resample_with(
                        Backend::Vectorized,
                        channels,
                        dst_frames,
                        &mut vectorized,
                        src_frames,
                        &src,
                    )
                    .unwrap();

                let diff = max_diff(&scalar, &vectorized);
                assert!(
                    diff <= 1,
                    "{}Hz→{}Hz {} {}ch: {} LSB",
                    src_rate,
                    dst_rate,
                    quality,
                    channels,
                    diff
                );
            }
        }
    }
}

#[test]
#[ignore = "计时测试：cargo test --release -- --ignored"]
fn vectorized_backend_is_faster() {
    use std::time::{Duration, Instant};

    const FRAMES: usize = 2 * 44100;
    let mut rng = StdRng::seed_from_u64(1);
    let src = noise(&mut rng, 2 * FRAMES, 16000);

    for quality in Quality::ALL {
        let resampler = Resampler::new(44100, 48000, quality).unwrap();
        let dst_frames = resampler.output_frames(FRAMES);
        let mut dst = vec![0i16; dst_frames * 2];

        // 各取 3 次中最快的一次
        let mut best = [Duration::MAX; 2];
        for _ in 0..3 {
            for (slot, backend) in best.iter_mut().zip(Backend::ALL) {
                let start = Instant::now();
                resampler
                    .resample_with(backend, 2, dst_frames, &mut dst, FRAMES, &src)
                    .unwrap();
                *slot = (*slot).min(start.elapsed());
            }
        }

        let [scalar, vectorized] = best;
        assert!(
            vectorized < scalar,
            "{}: scalar {:?}, vectorized {:?}",
            quality,
            scalar,
            vectorized
        );
    }
}

// ─── 并发 ────────────────────────────────────────────────────────

#[test]
fn shared_resampler_across_threads() {
    const THREADS: usize = 8;
    const FRAMES: usize = 2000;
    let resampler = Resampler::new(44100, 48000, Quality::Best).unwrap();
    let dst_frames = resampler.output_frames(FRAMES);

    let mut rng = StdRng::seed_from_u64(42);
    let inputs: Vec<Vec<i16>> = (0..THREADS).map(|_| noise(&mut rng, 2 * FRAMES, 16000)).collect();
    let expected: Vec<Vec<i16>> = inputs
        .iter()
        .map(|src| resampler.process(2, src).unwrap())
        .collect();

    // 所有线程借用同一个实例，不克隆
    let shared: &Resampler = &resampler;
    let outputs: Vec<Vec<i16>> = std::thread::scope(|s| {
        let handles: Vec<_> = inputs
            .iter()
            .enumerate()
            .map(|(i, src)| {
                s.spawn(move || {
                    let backend = Backend::ALL[i % 2];
                    let mut out = vec![0i16; dst_frames * 2];
                    let mut first = None;
                    // 多次调用，结果必须稳定
                    for _ in 0..4 {
                        shared
                            .resample_with(backend, 2, dst_frames, &mut out, FRAMES, src)
                            .unwrap();
                        match &first {
                            None => first = Some(out.clone()),
                            Some(first) => assert_eq!(first, &out),
                        }
                    }
                    out
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (i, (out, expected)) in outputs.iter().zip(&expected).enumerate() {
        assert!(max_diff(out, expected) <= 1, "thread {}", i);
    }
}
