//! Test helpers and fixtures for levelcalc integration tests
//!
//! Signals are generated deterministically and fed to the engine in
//! fixed-size planar buffers, the way a host audio callback would.
//!
//! ## Tolerance Levels
//!
//! Use the appropriate tolerance from [`tolerances`] module:
//! - `FLOAT_EPSILON` (1e-6): linear values that should be exact
//! - `LEVEL_DB_TOLERANCE` (0.2 dB): RMS/peak against analytic references
//! - `LUFS_EPSILON` (1e-3 dB): loudness compared across buffer sizes

#![allow(dead_code)]

pub mod tolerances;

use levelcalc::prelude::*;

/// Default test sample rate (matches common hardware)
pub const TEST_SAMPLE_RATE: u32 = 48_000;

/// 10 ms buffers: a 1 kHz tone fits exactly ten cycles.
pub const TEST_BUFFER_SIZE: usize = 480;

/// Install a test-friendly tracing subscriber (idempotent).
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Engine at the test sample rate with `channels` channels.
pub fn test_calc(channels: usize) -> LevelCalc {
    init_tracing();
    let mut calc = LevelCalc::new();
    calc.set_sample_rate(TEST_SAMPLE_RATE);
    calc.set_channels(channels);
    calc
}

/// Sine wave at given frequency and amplitude.
pub fn generate_sine(frequency: f64, amplitude: f32, sample_rate: u32, num_samples: usize) -> Vec<f32> {
    (0..num_samples)
        .map(|i| {
            let t = i as f64 / sample_rate as f64;
            amplitude * (2.0 * std::f64::consts::PI * frequency * t).sin() as f32
        })
        .collect()
}

/// Generate silence (zero samples).
pub fn generate_silence(num_samples: usize) -> Vec<f32> {
    vec![0.0; num_samples]
}

/// Generate white noise (random samples in -1..1).
pub fn generate_noise(num_samples: usize, seed: u64) -> Vec<f32> {
    // Simple LCG for reproducible "random" noise
    let mut rng = seed;
    (0..num_samples)
        .map(|_| {
            rng = rng.wrapping_mul(6364136223846793005).wrapping_add(1);
            ((rng >> 33) as f32 / u32::MAX as f32) * 4.0 - 1.0
        })
        .collect()
}

/// Number of samples in `seconds` at the test rate.
pub fn samples_for(seconds: f64) -> usize {
    (seconds * TEST_SAMPLE_RATE as f64).round() as usize
}

/// Feed whole planar channels through the engine in `buffer_size` chunks.
/// A trailing partial chunk is processed too.
pub fn feed(calc: &mut LevelCalc, channels: &[Vec<f32>], buffer_size: usize) {
    let len = channels.iter().map(Vec::len).min().unwrap_or(0);
    let mut start = 0;
    while start < len {
        let end = (start + buffer_size).min(len);
        let planar: Vec<&[f32]> = channels.iter().map(|c| &c[start..end]).collect();
        calc.process(&planar, end - start, planar.len());
        start = end;
    }
}

/// `|B(e^jw)|² / |A(e^jw)|²`. Coefficients need not be normalised.
fn magnitude_squared(b: &[f64], a: &[f64], w: f64) -> f64 {
    let eval = |coeffs: &[f64]| {
        coeffs
            .iter()
            .enumerate()
            .fold((0.0, 0.0), |(re, im), (k, c)| {
                let phase = k as f64 * w;
                (re + c * phase.cos(), im - c * phase.sin())
            })
    };
    let (nr, ni) = eval(b);
    let (dr, di) = eval(a);
    (nr * nr + ni * ni) / (dr * dr + di * di)
}

/// Gain in dB of the meter's weighting curve (two 60 Hz one-pole
/// high-passes and a +4 dB RBJ shelf at 1681.97 Hz) at `frequency`.
pub fn k_weighting_gain_db(frequency: f64, sample_rate: u32) -> f64 {
    use std::f64::consts::{PI, SQRT_2};

    let fs = sample_rate as f64;
    let w = 2.0 * PI * frequency / fs;

    let k = fs / (PI * 60.0);
    let hp_b0 = k / (k + 1.0);
    let highpass = magnitude_squared(&[hp_b0, -hp_b0], &[1.0, (1.0 - k) / (1.0 + k)], w);

    let a = 10f64.powf(4.0 / 20.0).sqrt();
    let w0 = 2.0 * PI * 1681.974450955533 / fs;
    let (cos_w0, alpha) = (w0.cos(), w0.sin() * SQRT_2 / 2.0);
    let two_sqrt_a_alpha = 2.0 * a.sqrt() * alpha;
    let shelf = magnitude_squared(
        &[
            a * ((a + 1.0) + (a - 1.0) * cos_w0 + two_sqrt_a_alpha),
            -2.0 * a * ((a - 1.0) + (a + 1.0) * cos_w0),
            a * ((a + 1.0) + (a - 1.0) * cos_w0 - two_sqrt_a_alpha),
        ],
        &[
            (a + 1.0) - (a - 1.0) * cos_w0 + two_sqrt_a_alpha,
            2.0 * ((a - 1.0) - (a + 1.0) * cos_w0),
            (a + 1.0) - (a - 1.0) * cos_w0 - two_sqrt_a_alpha,
        ],
        w,
    );

    10.0 * (highpass * highpass * shelf).log10()
}

/// Steady-state loudness of one channel carrying a sine of `amplitude` at `frequency`.
pub fn sine_loudness(frequency: f64, amplitude: f32, sample_rate: u32) -> f32 {
    let mean_square = (amplitude as f64).powi(2) / 2.0;
    (-0.691 + 10.0 * mean_square.log10() + k_weighting_gain_db(frequency, sample_rate)) as f32
}

/// Convert linear amplitude to dB.
pub fn to_db(linear: f32) -> f32 {
    20.0 * linear.log10()
}

/// Assert a dB reading lies within `tolerance` of `expected`.
pub fn assert_db_near(actual: f32, expected: f32, tolerance: f32, context: &str) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "{}: expected {:.3} dB (±{}), got {:.3} dB",
        context,
        expected,
        tolerance,
        actual
    );
}
