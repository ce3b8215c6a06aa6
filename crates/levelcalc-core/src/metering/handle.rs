//! Reader handle for UI threads.

use super::PublishedMetrics;
use crate::{LUFS_FLOOR, MAX_CHANNELS};
use std::sync::Arc;

/// Clonable, thread-safe reader for the engine's published meters.
///
/// Created via `LevelCalc::meters()`. Every getter is a handful of relaxed
/// atomic loads and never blocks, so it is safe to poll from a UI timer.
///
/// # Example
/// ```
/// # use levelcalc_core::LevelCalc;
/// let calc = LevelCalc::new();
/// let meters = calc.meters().clone();
///
/// std::thread::spawn(move || {
///     let m = meters.lufs_momentary();
///     let s = meters.smoothed_lufs_short();
///     let (l, r) = (meters.peak_ch(0), meters.peak_ch(1));
///     # let _ = (m, s, l, r);
/// })
/// .join()
/// .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct MeterHandle {
    metrics: Arc<PublishedMetrics>,
}

impl MeterHandle {
    pub fn new(metrics: Arc<PublishedMetrics>) -> Self {
        Self { metrics }
    }

    /// Channels currently being metered.
    pub fn channels(&self) -> usize {
        self.metrics.channels()
    }

    /// Combined RMS in dBFS.
    pub fn rms(&self) -> f32 {
        self.metrics.rms()
    }

    /// Combined sample peak of the last buffer in dBFS.
    pub fn peak(&self) -> f32 {
        self.metrics.peak()
    }

    pub fn rms_ch(&self, ch: usize) -> f32 {
        self.metrics.rms_ch(ch)
    }

    pub fn peak_ch(&self, ch: usize) -> f32 {
        self.metrics.peak_ch(ch)
    }

    /// 400 ms window.
    pub fn lufs_momentary(&self) -> f32 {
        self.metrics.lufs_momentary()
    }

    pub fn lufs_momentary_ch(&self, ch: usize) -> f32 {
        self.metrics.lufs_momentary_ch(ch)
    }

    /// 3-second window, unsmoothed.
    pub fn lufs_short(&self) -> f32 {
        self.metrics.lufs_short()
    }

    pub fn lufs_short_ch(&self, ch: usize) -> f32 {
        self.metrics.lufs_short_ch(ch)
    }

    /// 3-second window after display smoothing.
    pub fn smoothed_lufs_short(&self) -> f32 {
        self.metrics.smoothed_lufs_short()
    }

    pub fn smoothed_lufs_short_ch(&self, ch: usize) -> f32 {
        self.metrics.smoothed_lufs_short_ch(ch)
    }

    /// Alias for [`lufs_momentary`](Self::lufs_momentary), kept for older callers.
    pub fn lufs(&self) -> f32 {
        self.lufs_momentary()
    }

    pub fn snapshot(&self) -> MeterSnapshot {
        let m = &self.metrics;
        MeterSnapshot {
            channels: m.channels(),
            rms: m.rms(),
            peak: m.peak(),
            rms_ch: core::array::from_fn(|ch| m.rms_ch(ch)),
            peak_ch: core::array::from_fn(|ch| m.peak_ch(ch)),
            lufs_momentary: m.lufs_momentary(),
            lufs_momentary_ch: core::array::from_fn(|ch| m.lufs_momentary_ch(ch)),
            lufs_short: m.lufs_short(),
            lufs_short_ch: core::array::from_fn(|ch| m.lufs_short_ch(ch)),
            smoothed_lufs_short: m.smoothed_lufs_short(),
            smoothed_lufs_short_ch: core::array::from_fn(|ch| m.smoothed_lufs_short_ch(ch)),
        }
    }

    pub fn inner(&self) -> &Arc<PublishedMetrics> {
        &self.metrics
    }
}

/// Plain copy of every published value, read field by field.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeterSnapshot {
    pub channels: usize,
    pub rms: f32,
    pub peak: f32,
    pub rms_ch: [f32; MAX_CHANNELS],
    pub peak_ch: [f32; MAX_CHANNELS],
    pub lufs_momentary: f32,
    pub lufs_momentary_ch: [f32; MAX_CHANNELS],
    pub lufs_short: f32,
    pub lufs_short_ch: [f32; MAX_CHANNELS],
    pub smoothed_lufs_short: f32,
    pub smoothed_lufs_short_ch: [f32; MAX_CHANNELS],
}

impl Default for MeterSnapshot {
    fn default() -> Self {
        let floor = [LUFS_FLOOR; MAX_CHANNELS];
        Self {
            channels: 0,
            rms: LUFS_FLOOR,
            peak: LUFS_FLOOR,
            rms_ch: floor,
            peak_ch: floor,
            lufs_momentary: LUFS_FLOOR,
            lufs_momentary_ch: floor,
            lufs_short: LUFS_FLOOR,
            lufs_short_ch: floor,
            smoothed_lufs_short: LUFS_FLOOR,
            smoothed_lufs_short_ch: floor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_snapshot_is_floor() {
        let handle = MeterHandle::new(Arc::new(PublishedMetrics::new()));
        assert_eq!(handle.snapshot(), MeterSnapshot::default());
    }

    #[test]
    fn test_legacy_alias() {
        let metrics = Arc::new(PublishedMetrics::new());
        metrics.reset(1);
        metrics.store_momentary(-14.0, &[-14.0; MAX_CHANNELS], 1);
        let handle = MeterHandle::new(metrics);
        assert_eq!(handle.lufs(), handle.lufs_momentary());
        assert_eq!(handle.lufs(), -14.0);
    }

    #[test]
    fn test_clones_share_state() {
        let handle = MeterHandle::new(Arc::new(PublishedMetrics::new()));
        let other = handle.clone();
        handle.inner().reset(4);
        assert_eq!(other.channels(), 4);
    }
}
