//! The metering engine, driven from the audio callback.

use super::amplitude::finite_or_silence;
use super::hop::{hop_samples, HOPS_PER_BLOCK};
use super::{
    energy_to_lufs, FilterBank, HopAccumulator, MeterHandle, PublishedMetrics, RawLevels,
    WindowAggregator, WindowEnergy,
};
use crate::{LoudnessSmoother, MeterConfig, Result, LUFS_FLOOR, MAX_CHANNELS};
use std::sync::Arc;

/// Real-time loudness and level meter.
///
/// `process()` is called from exactly one audio context. It takes no locks,
/// never allocates and never logs; all per-channel state lives in fixed
/// arrays sized for [`MAX_CHANNELS`]. Results are published to atomics that
/// any number of [`MeterHandle`]s read concurrently.
///
/// Reconfiguration (`set_sample_rate`, `set_channels`) needs `&mut self`, so
/// it cannot overlap a `process()` call.
pub struct LevelCalc {
    meters: MeterHandle,

    sample_rate: u32,
    hop_samples: usize,
    channels: usize,

    filters: FilterBank,
    hops: [HopAccumulator; MAX_CHANNELS],
    windows: WindowAggregator,

    smoother: LoudnessSmoother,
    smoother_ch: [LoudnessSmoother; MAX_CHANNELS],
}

impl Default for LevelCalc {
    fn default() -> Self {
        Self::new()
    }
}

impl LevelCalc {
    /// Unconfigured engine: no channels, no sample rate. Every meter reads the floor.
    pub fn new() -> Self {
        let smoother = LoudnessSmoother::default();
        Self {
            meters: MeterHandle::new(Arc::new(PublishedMetrics::new())),
            sample_rate: 0,
            hop_samples: 0,
            channels: 0,
            filters: FilterBank::new(),
            hops: [HopAccumulator::new(); MAX_CHANNELS],
            windows: WindowAggregator::new(0),
            smoother,
            smoother_ch: [smoother; MAX_CHANNELS],
        }
    }

    /// Engine configured from a validated [`MeterConfig`].
    pub fn with_config(config: &MeterConfig) -> Result<Self> {
        config.validate()?;

        let mut calc = Self::new();
        calc.set_smoothing(config.smoothing);
        calc.set_sample_rate(config.sample_rate);
        calc.set_channels(config.channels);
        Ok(calc)
    }

    /// Recompute hop size and filter coefficients, then reset all state.
    pub fn set_sample_rate(&mut self, hz: u32) {
        self.sample_rate = hz;
        self.hop_samples = hop_samples(hz);
        if hz > 0 {
            self.filters.configure(hz);
        } else {
            self.filters = FilterBank::new();
        }
        self.reset(self.channels);

        tracing::debug!(
            "Meter sample rate set to {} Hz ({} samples per hop)",
            hz,
            self.hop_samples
        );
    }

    /// Meter `n` channels (at most [`MAX_CHANNELS`]) and reset all state.
    pub fn set_channels(&mut self, n: usize) {
        let channels = n.min(MAX_CHANNELS);
        self.reset(channels);

        if channels != n {
            tracing::debug!("Meter channel count {} clamped to {}", n, channels);
        } else {
            tracing::debug!("Meter channel count set to {}", channels);
        }
    }

    /// Weight of the newest value in the short-term display smoother.
    pub fn set_smoothing(&mut self, alpha: f32) {
        self.smoother.set_alpha(alpha);
        for smoother in &mut self.smoother_ch {
            smoother.set_alpha(alpha);
        }
    }

    /// Clear filters, hop accumulators, windows, smoothers and published values.
    fn reset(&mut self, channels: usize) {
        self.channels = channels;
        self.filters.reset();
        for hop in &mut self.hops {
            hop.reset();
        }
        self.windows.reset(channels);
        self.smoother.reset();
        for smoother in &mut self.smoother_ch {
            smoother.reset();
        }
        self.meters.inner().reset(channels);
    }

    /// Meter one buffer of planar f32 audio.
    ///
    /// `buffers` holds one slice per channel. Only the first `frame_count`
    /// samples are read, further limited to the shortest buffer. If
    /// `channel_count` (clamped to the buffers provided and [`MAX_CHANNELS`])
    /// differs from the configured count, the engine reconfigures itself first.
    ///
    /// An empty buffer list or zero frames leaves every published value untouched.
    pub fn process(&mut self, buffers: &[&[f32]], frame_count: usize, channel_count: usize) {
        let channels = channel_count.min(buffers.len()).min(MAX_CHANNELS);
        if channels == 0 || frame_count == 0 {
            return;
        }

        let buffers = &buffers[..channels];
        let frames = buffers
            .iter()
            .fold(frame_count, |frames, buf| frames.min(buf.len()));
        if frames == 0 {
            return;
        }

        if channels != self.channels {
            self.reset(channels);
        }

        let levels = RawLevels::measure(buffers, frames);
        self.meters.inner().store_levels(&levels, channels);

        if self.hop_samples == 0 {
            return;
        }

        for (ch, buf) in buffers.iter().enumerate() {
            for &sample in &buf[..frames] {
                let weighted = self.filters.process(ch, finite_or_silence(sample));
                if let Some(mean_square) = self.hops[ch].push(weighted, self.hop_samples) {
                    self.windows.push(ch, mean_square);
                }
            }
        }

        self.publish_loudness();
    }

    fn publish_loudness(&mut self) {
        let channels = self.channels;
        let metrics = self.meters.inner();

        let (momentary, momentary_ch) = loudness_of(self.windows.momentary());
        let (short, short_ch) = loudness_of(self.windows.short_term());
        metrics.store_momentary(momentary, &momentary_ch, channels);
        metrics.store_short(short, &short_ch, channels);

        let smoothed = self.smoother.next(short, momentary);
        let mut smoothed_ch = [LUFS_FLOOR; MAX_CHANNELS];
        for (ch, slot) in smoothed_ch.iter_mut().enumerate().take(channels) {
            *slot = self.smoother_ch[ch].next(short_ch[ch], momentary_ch[ch]);
        }
        metrics.store_smoothed(smoothed, &smoothed_ch, channels);
    }

    /// Reader for the published meters. Clone it to hand to another thread.
    pub fn meters(&self) -> &MeterHandle {
        &self.meters
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Samples per 100 ms hop; zero until a sample rate is set.
    pub fn hop_samples(&self) -> usize {
        self.hop_samples
    }

    /// Samples in the 400 ms momentary block.
    pub fn block_window_samples(&self) -> usize {
        self.hop_samples * HOPS_PER_BLOCK
    }
}

/// Combined and per-channel loudness of a window, or the floor if incomplete.
fn loudness_of(energy: Option<WindowEnergy>) -> (f32, [f32; MAX_CHANNELS]) {
    match energy {
        Some(energy) => (
            energy_to_lufs(energy.combined),
            energy.per_channel.map(energy_to_lufs),
        ),
        None => (LUFS_FLOOR, [LUFS_FLOOR; MAX_CHANNELS]),
    }
}
