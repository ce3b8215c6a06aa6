//! Builder for configuring and constructing a `MeterSession`.

use crate::core::MeterConfig;
use crate::{MeterSession, Result};

/// Unset fields fall back to [`MeterConfig::default()`] (48 kHz, stereo, 0.15 smoothing).
///
/// # Example
///
/// ```
/// use levelcalc::prelude::*;
///
/// let session = MeterSession::builder()
///     .sample_rate(44_100)
///     .channels(2)
///     .build()?;
///
/// assert_eq!(session.config().sample_rate, 44_100);
/// # Ok::<(), levelcalc::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct MeterSessionBuilder {
    config: MeterConfig,
}

impl MeterSessionBuilder {
    /// Default: 48000
    pub fn sample_rate(mut self, hz: u32) -> Self {
        self.config.sample_rate = hz;
        self
    }

    /// Default: 2
    pub fn channels(mut self, count: usize) -> Self {
        self.config.channels = count;
        self
    }

    /// Default: 0.15
    pub fn smoothing(mut self, alpha: f32) -> Self {
        self.config.smoothing = alpha;
        self
    }

    pub fn config(mut self, config: MeterConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<MeterSession> {
        MeterSession::from_config(self.config)
    }
}
