//! Tolerance constants for meter testing.
//!
//! Meter outputs are in dB, so most comparisons are in dB too.

/// Floating point rounding errors on linear values.
pub const FLOAT_EPSILON: f32 = 1e-6;

/// Accuracy expected from RMS/peak against an analytic reference.
pub const LEVEL_DB_TOLERANCE: f32 = 0.2;

/// Two loudness readings of the same signal through different buffer sizes.
pub const LUFS_EPSILON: f32 = 1e-3;

/// Measured sine loudness against the analytic weighting curve.
pub const SINE_LUFS_TOLERANCE: f32 = 0.02;

/// dB difference for equal-energy channels summed unweighted (10·log10(2)).
pub const TWO_CHANNEL_SUM_DB: f32 = 3.0103;
