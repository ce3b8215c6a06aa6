//! Error types for levelcalc-core.
//!
//! The metering path itself never fails; these only come out of
//! configuration validation.

use thiserror::Error;

/// Error type for levelcalc-core operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid sample rate: {0} Hz. Must be between 8000 and 384000 Hz")]
    InvalidSampleRate(u32),

    #[error("Invalid channel count: {0}. Must be between 1 and {max}", max = crate::MAX_CHANNELS)]
    InvalidChannelCount(usize),

    #[error("Invalid smoothing factor: {0}. Must be in (0, 1]")]
    InvalidSmoothing(f32),
}

/// Result type alias.
pub type Result<T> = core::result::Result<T, Error>;
