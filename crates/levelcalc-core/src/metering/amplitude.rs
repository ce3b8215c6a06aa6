//! Unweighted RMS and peak levels, measured per buffer.

use crate::MAX_CHANNELS;

/// Linear RMS/peak of one buffer, combined and per channel.
///
/// Peaks are the maxima of this buffer only; holding is left to the display.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RawLevels {
    pub rms: f32,
    pub peak: f32,
    pub rms_ch: [f32; MAX_CHANNELS],
    pub peak_ch: [f32; MAX_CHANNELS],
}

impl RawLevels {
    /// Measure the first `frames` samples of each planar channel buffer.
    ///
    /// At most [`MAX_CHANNELS`] buffers are read; callers ensure every buffer
    /// holds at least `frames` samples.
    pub fn measure(buffers: &[&[f32]], frames: usize) -> Self {
        let channels = buffers.len().min(MAX_CHANNELS);
        let mut levels = Self::default();
        if channels == 0 || frames == 0 {
            return levels;
        }

        let mut sum_sq_all = 0.0f64;
        for (ch, buf) in buffers.iter().take(channels).enumerate() {
            let mut sum_sq = 0.0f64;
            let mut peak = 0.0f32;
            for &s in &buf[..frames] {
                let s = finite_or_silence(s);
                sum_sq += (s as f64) * (s as f64);
                peak = peak.max(s.abs());
            }

            levels.rms_ch[ch] = (sum_sq / frames as f64).sqrt() as f32;
            levels.peak_ch[ch] = peak;
            levels.peak = levels.peak.max(peak);
            sum_sq_all += sum_sq;
        }

        levels.rms = (sum_sq_all / (frames * channels) as f64).sqrt() as f32;
        levels
    }
}

/// NaN and infinite host samples are metered as silence.
#[inline]
pub(crate) fn finite_or_silence(sample: f32) -> f32 {
    if sample.is_finite() {
        sample
    } else {
        0.0
    }
}
