//! Meter session: owns the engine and hands it out explicitly.

use crate::core::{LevelCalc, MeterConfig, MeterHandle};
use crate::{MeterSessionBuilder, Result};

/// Owner of one metering engine and its configuration.
///
/// A host creates one session per metered audio connection. The session keeps
/// the [`LevelCalc`] until the audio callback is wired up, then
/// [`split`](Self::split) moves the writer into the callback and returns a
/// reader for the UI poller. Nothing is global.
///
/// # Example
///
/// ```
/// use levelcalc::prelude::*;
///
/// let session = MeterSession::builder().channels(2).build()?;
/// let (mut calc, meters) = session.split();
///
/// // audio callback
/// let buf = vec![0.0f32; 256];
/// calc.process(&[&buf, &buf], 256, 2);
///
/// // UI timer
/// let _ = meters.smoothed_lufs_short();
/// # Ok::<(), levelcalc::Error>(())
/// ```
pub struct MeterSession {
    calc: LevelCalc,
    config: MeterConfig,
}

impl MeterSession {
    pub fn builder() -> MeterSessionBuilder {
        MeterSessionBuilder::default()
    }

    pub(crate) fn from_config(config: MeterConfig) -> Result<Self> {
        let calc = LevelCalc::with_config(&config)?;

        tracing::debug!(
            "Meter session ready: {} Hz, {} channels, smoothing {}",
            config.sample_rate,
            config.channels,
            config.smoothing
        );

        Ok(Self { calc, config })
    }

    pub fn config(&self) -> &MeterConfig {
        &self.config
    }

    /// Reader for the published meters.
    pub fn meters(&self) -> &MeterHandle {
        self.calc.meters()
    }

    /// Direct access to the engine while it is not yet attached to audio.
    pub fn calc_mut(&mut self) -> &mut LevelCalc {
        &mut self.calc
    }

    /// Apply a new configuration. Resets all meter state.
    pub fn reconfigure(&mut self, config: MeterConfig) -> Result<()> {
        config.validate()?;

        self.calc.set_smoothing(config.smoothing);
        self.calc.set_sample_rate(config.sample_rate);
        self.calc.set_channels(config.channels);
        self.config = config;
        Ok(())
    }

    /// Engine for the audio callback, reader for everyone else.
    pub fn split(self) -> (LevelCalc, MeterHandle) {
        let meters = self.calc.meters().clone();
        (self.calc, meters)
    }
}
