//! Real-time loudness and level metering kernel.
//!
//! # Primary API
//!
//! - [`LevelCalc`]: the engine, fed from the audio callback
//! - [`MeterHandle`]: cheap clonable reader for UI threads
//! - [`MeterSnapshot`]: every published value at once
//! - [`MeterConfig`]: validated engine configuration
//!
//! # Pipeline
//!
//! ```text
//! planar f32 ──► K-weighting ──► 100 ms hops ──► 400 ms / 3 s windows ──► LUFS ──► smoothing ──┐
//!          └───► raw RMS / peak ─────────────────────────────────────────────────────────────┴──► atomics
//! ```
//!
//! Loudness values follow `-0.691 + 10·log10(energy)` with per-channel energies
//! summed unweighted and no gating. They are LUFS-like, not certified BS.1770.
//!
//! # Example
//!
//! ```
//! use levelcalc_core::LevelCalc;
//!
//! let mut calc = LevelCalc::new();
//! calc.set_sample_rate(48_000);
//! calc.set_channels(2);
//!
//! let meters = calc.meters().clone(); // hand this to the UI thread
//!
//! let left = vec![0.25f32; 480];
//! let right = vec![0.25f32; 480];
//! calc.process(&[&left, &right], 480, 2);
//!
//! assert!(meters.peak() > -13.0);
//! assert_eq!(meters.lufs_momentary(), levelcalc_core::LUFS_FLOOR);
//! ```

pub mod error;
pub use error::{Error, Result};

mod config;
pub use config::MeterConfig;

pub(crate) mod lockfree;
pub use lockfree::AtomicFloat;

pub mod smooth;
pub use smooth::LoudnessSmoother;

pub(crate) mod metering;
pub use metering::{
    energy_to_lufs, linear_to_dbfs, FilterBank, HopAccumulator, KWeightingFilter, LevelCalc,
    MeterHandle, MeterSnapshot, PublishedMetrics, RawLevels, RollingWindow, WindowAggregator,
    WindowEnergy, MOMENTARY_DEPTH, SHORT_TERM_DEPTH,
};

/// Maximum number of metered channels. Extra channels are ignored.
pub const MAX_CHANNELS: usize = 8;

/// Published value meaning "silence" or "not enough data yet".
pub const LUFS_FLOOR: f32 = -120.0;
