//! Meter engine configuration.

use crate::{Error, Result, MAX_CHANNELS};

/// Default exponential smoothing factor for the short-term display value.
pub(crate) const DEFAULT_SMOOTHING: f32 = 0.15;

/// Configuration for the metering engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeterConfig {
    pub sample_rate: u32,
    pub channels: usize,
    /// Weight of the newest short-term value in the display smoother.
    pub smoothing: f32,
}

impl Default for MeterConfig {
    fn default() -> Self {
        Self {
            sample_rate: 48_000,
            channels: 2,
            smoothing: DEFAULT_SMOOTHING,
        }
    }
}

impl MeterConfig {
    pub fn validate(&self) -> Result<()> {
        if !(8_000..=384_000).contains(&self.sample_rate) {
            return Err(Error::InvalidSampleRate(self.sample_rate));
        }
        if self.channels == 0 || self.channels > MAX_CHANNELS {
            return Err(Error::InvalidChannelCount(self.channels));
        }
        if !(self.smoothing > 0.0 && self.smoothing <= 1.0) {
            return Err(Error::InvalidSmoothing(self.smoothing));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MeterConfig::default();
        assert_eq!(config.sample_rate, 48_000);
        assert_eq!(config.channels, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        let config = MeterConfig {
            sample_rate: 4_000,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(Error::InvalidSampleRate(4_000)));

        let config = MeterConfig {
            channels: 9,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(Error::InvalidChannelCount(9)));

        let config = MeterConfig {
            channels: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(Error::InvalidChannelCount(0)));

        let config = MeterConfig {
            smoothing: 0.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidSmoothing(_))));

        let config = MeterConfig {
            smoothing: f32::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
