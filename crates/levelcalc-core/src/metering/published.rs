//! Lock-free publication surface shared by the audio thread and readers.

use super::RawLevels;
use crate::{AtomicFloat, LUFS_FLOOR, MAX_CHANNELS};
use core::sync::atomic::{AtomicUsize, Ordering};

type ChannelFloats = [AtomicFloat; MAX_CHANNELS];

fn floor_channels() -> ChannelFloats {
    core::array::from_fn(|_| AtomicFloat::new(LUFS_FLOOR))
}

fn store_channels(dst: &ChannelFloats, src: &[f32; MAX_CHANNELS], channels: usize) {
    for (ch, (slot, &value)) in dst.iter().zip(src).enumerate() {
        slot.set(if ch < channels { value } else { LUFS_FLOOR });
    }
}

/// Every published meter value as an independent atomic.
///
/// There is no cross-field consistency: a reader may see a combined value
/// from one `process()` call and a per-channel value from the next.
#[derive(Debug)]
pub struct PublishedMetrics {
    channels: AtomicUsize,

    rms: AtomicFloat,
    peak: AtomicFloat,
    rms_ch: ChannelFloats,
    peak_ch: ChannelFloats,

    lufs_momentary: AtomicFloat,
    lufs_momentary_ch: ChannelFloats,

    lufs_short: AtomicFloat,
    lufs_short_ch: ChannelFloats,

    smoothed_lufs_short: AtomicFloat,
    smoothed_lufs_short_ch: ChannelFloats,
}

impl Default for PublishedMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl PublishedMetrics {
    pub fn new() -> Self {
        Self {
            channels: AtomicUsize::new(0),
            rms: AtomicFloat::new(LUFS_FLOOR),
            peak: AtomicFloat::new(LUFS_FLOOR),
            rms_ch: floor_channels(),
            peak_ch: floor_channels(),
            lufs_momentary: AtomicFloat::new(LUFS_FLOOR),
            lufs_momentary_ch: floor_channels(),
            lufs_short: AtomicFloat::new(LUFS_FLOOR),
            lufs_short_ch: floor_channels(),
            smoothed_lufs_short: AtomicFloat::new(LUFS_FLOOR),
            smoothed_lufs_short_ch: floor_channels(),
        }
    }

    #[inline]
    pub fn channels(&self) -> usize {
        self.channels.load(Ordering::Relaxed)
    }

    #[inline]
    fn channel_value(&self, values: &ChannelFloats, ch: usize) -> f32 {
        if ch < self.channels() {
            values.get(ch).map_or(LUFS_FLOOR, AtomicFloat::get)
        } else {
            LUFS_FLOOR
        }
    }

    #[inline]
    pub fn rms(&self) -> f32 {
        self.rms.get()
    }

    #[inline]
    pub fn peak(&self) -> f32 {
        self.peak.get()
    }

    #[inline]
    pub fn rms_ch(&self, ch: usize) -> f32 {
        self.channel_value(&self.rms_ch, ch)
    }

    #[inline]
    pub fn peak_ch(&self, ch: usize) -> f32 {
        self.channel_value(&self.peak_ch, ch)
    }

    #[inline]
    pub fn lufs_momentary(&self) -> f32 {
        self.lufs_momentary.get()
    }

    #[inline]
    pub fn lufs_momentary_ch(&self, ch: usize) -> f32 {
        self.channel_value(&self.lufs_momentary_ch, ch)
    }

    #[inline]
    pub fn lufs_short(&self) -> f32 {
        self.lufs_short.get()
    }

    #[inline]
    pub fn lufs_short_ch(&self, ch: usize) -> f32 {
        self.channel_value(&self.lufs_short_ch, ch)
    }

    #[inline]
    pub fn smoothed_lufs_short(&self) -> f32 {
        self.smoothed_lufs_short.get()
    }

    #[inline]
    pub fn smoothed_lufs_short_ch(&self, ch: usize) -> f32 {
        self.channel_value(&self.smoothed_lufs_short_ch, ch)
    }

    /// Everything back to the floor with a new channel count.
    pub(crate) fn reset(&self, channels: usize) {
        self.channels
            .store(channels.min(MAX_CHANNELS), Ordering::Relaxed);

        let floors = [LUFS_FLOOR; MAX_CHANNELS];
        for (combined, per_channel) in [
            (&self.rms, &self.rms_ch),
            (&self.peak, &self.peak_ch),
            (&self.lufs_momentary, &self.lufs_momentary_ch),
            (&self.lufs_short, &self.lufs_short_ch),
            (&self.smoothed_lufs_short, &self.smoothed_lufs_short_ch),
        ] {
            combined.set(LUFS_FLOOR);
            store_channels(per_channel, &floors, 0);
        }
    }

    /// Publish linear levels as dBFS.
    pub(crate) fn store_levels(&self, levels: &RawLevels, channels: usize) {
        self.rms.set(super::linear_to_dbfs(levels.rms));
        self.peak.set(super::linear_to_dbfs(levels.peak));
        store_channels(
            &self.rms_ch,
            &levels.rms_ch.map(super::linear_to_dbfs),
            channels,
        );
        store_channels(
            &self.peak_ch,
            &levels.peak_ch.map(super::linear_to_dbfs),
            channels,
        );
    }

    pub(crate) fn store_momentary(
        &self,
        combined: f32,
        per_channel: &[f32; MAX_CHANNELS],
        channels: usize,
    ) {
        self.lufs_momentary.set(combined);
        store_channels(&self.lufs_momentary_ch, per_channel, channels);
    }

    pub(crate) fn store_short(
        &self,
        combined: f32,
        per_channel: &[f32; MAX_CHANNELS],
        channels: usize,
    ) {
        self.lufs_short.set(combined);
        store_channels(&self.lufs_short_ch, per_channel, channels);
    }

    pub(crate) fn store_smoothed(
        &self,
        combined: f32,
        per_channel: &[f32; MAX_CHANNELS],
        channels: usize,
    ) {
        self.smoothed_lufs_short.set(combined);
        store_channels(&self.smoothed_lufs_short_ch, per_channel, channels);
    }
}
