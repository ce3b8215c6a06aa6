//! Rolling momentary (400 ms) and short-term (3 s) energy windows.

use crate::MAX_CHANNELS;

/// Hops in the momentary window (4 × 100 ms).
pub const MOMENTARY_DEPTH: usize = 4;

/// Hops in the short-term window (30 × 100 ms).
pub const SHORT_TERM_DEPTH: usize = 30;

/// Fixed-depth FIFO of hop energies with an incrementally maintained sum.
///
/// Backed by an inline ring so pushes never allocate. The oldest value is
/// evicted (and subtracted) before the newest is appended (and added).
#[derive(Debug, Clone, Copy)]
pub struct RollingWindow<const N: usize> {
    values: [f64; N],
    head: usize,
    len: usize,
    sum: f64,
}

impl<const N: usize> RollingWindow<N> {
    pub const DEPTH: usize = N;

    pub fn new() -> Self {
        Self {
            values: [0.0; N],
            head: 0,
            len: 0,
            sum: 0.0,
        }
    }

    #[inline]
    pub fn push(&mut self, value: f64) {
        if N == 0 {
            return;
        }

        if self.len == N {
            // head points at the oldest entry once full
            self.sum -= self.values[self.head];
            self.values[self.head] = value;
            self.head = (self.head + 1) % N;
        } else {
            let tail = (self.head + self.len) % N;
            self.values[tail] = value;
            self.len += 1;
        }
        self.sum += value;
    }

    #[inline]
    pub fn sum(&self) -> f64 {
        self.sum
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == N
    }

    /// Mean over the full depth (not the current fill).
    #[inline]
    pub fn mean(&self) -> f64 {
        self.sum / N.max(1) as f64
    }

    /// Current contents, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len).map(move |i| self.values[(self.head + i) % N])
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl<const N: usize> Default for RollingWindow<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Energies read from a complete window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowEnergy {
    /// Sum of the per-channel mean energies (unweighted, not normalised).
    pub combined: f64,
    /// Mean energy per channel; slots past the channel count are zero.
    pub per_channel: [f64; MAX_CHANNELS],
}

impl WindowEnergy {
    fn from_windows<const N: usize>(windows: &[RollingWindow<N>]) -> Option<Self> {
        if windows.is_empty() || !windows.iter().all(RollingWindow::is_full) {
            return None;
        }

        let mut per_channel = [0.0; MAX_CHANNELS];
        let mut combined = 0.0;
        for (slot, window) in per_channel.iter_mut().zip(windows) {
            *slot = window.mean();
            combined += *slot;
        }

        Some(Self {
            combined,
            per_channel,
        })
    }
}

/// Momentary and short-term windows for every configured channel.
#[derive(Debug, Clone)]
pub struct WindowAggregator {
    momentary: [RollingWindow<MOMENTARY_DEPTH>; MAX_CHANNELS],
    short_term: [RollingWindow<SHORT_TERM_DEPTH>; MAX_CHANNELS],
    channels: usize,
}

impl WindowAggregator {
    pub fn new(channels: usize) -> Self {
        Self {
            momentary: [RollingWindow::new(); MAX_CHANNELS],
            short_term: [RollingWindow::new(); MAX_CHANNELS],
            channels: channels.min(MAX_CHANNELS),
        }
    }

    /// Feed one hop mean square into both of `channel`'s windows.
    #[inline]
    pub fn push(&mut self, channel: usize, mean_square: f64) {
        if channel >= self.channels {
            return;
        }
        self.momentary[channel].push(mean_square);
        self.short_term[channel].push(mean_square);
    }

    /// `None` until every channel's momentary window is full.
    pub fn momentary(&self) -> Option<WindowEnergy> {
        WindowEnergy::from_windows(&self.momentary[..self.channels])
    }

    /// `None` until every channel's short-term window is full.
    pub fn short_term(&self) -> Option<WindowEnergy> {
        WindowEnergy::from_windows(&self.short_term[..self.channels])
    }

    pub fn reset(&mut self, channels: usize) {
        *self = Self::new(channels);
    }
}

impl Default for WindowAggregator {
    fn default() -> Self {
        Self::new(0)
    }
}
