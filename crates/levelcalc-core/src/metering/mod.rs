//! Loudness and level metering.
//!
//! - Audio thread: [`LevelCalc`] runs K-weighting, hop accumulation, rolling windows
//!   and raw level measurement, then publishes to atomics
//! - Any thread: [`MeterHandle`] reads the published values

mod amplitude;
mod engine;
mod handle;
mod hop;
mod kweight;
mod loudness;
mod published;
mod window;

pub use amplitude::RawLevels;
pub use engine::LevelCalc;
pub use handle::{MeterHandle, MeterSnapshot};
pub use hop::HopAccumulator;
pub use kweight::{FilterBank, KWeightingFilter};
pub use loudness::{energy_to_lufs, linear_to_dbfs};
pub use published::PublishedMetrics;
pub use window::{RollingWindow, WindowAggregator, WindowEnergy, MOMENTARY_DEPTH, SHORT_TERM_DEPTH};
