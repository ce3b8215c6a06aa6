//! K-weighting approximation: two 60 Hz one-pole high-passes and a +4 dB high shelf.
//!
//! Coefficients are derived from the sample rate at configuration time and
//! never touched on the per-sample path.

use crate::MAX_CHANNELS;
use core::f64::consts::{PI, SQRT_2};

/// Corner frequency of both high-pass stages.
const HIGHPASS_HZ: f64 = 60.0;

/// High shelf centre frequency and gain.
const SHELF_HZ: f64 = 1681.974450955533;
const SHELF_GAIN_DB: f64 = 4.0;

/// First-order high-pass: `y = b0·x + b1·x[n-1] - a1·y[n-1]`.
#[derive(Debug, Clone, Copy, Default)]
struct OnePoleHighpass {
    b0: f64,
    b1: f64,
    a1: f64,
    x1: f64,
    y1: f64,
}

impl OnePoleHighpass {
    fn new(sample_rate: f64) -> Self {
        let k = sample_rate / (PI * HIGHPASS_HZ);
        let b0 = k / (k + 1.0);
        Self {
            b0,
            b1: -b0,
            a1: (1.0 - k) / (1.0 + k),
            ..Default::default()
        }
    }

    #[inline]
    fn process(&mut self, x: f64) -> f64 {
        let y = self.b0 * x + self.b1 * self.x1 - self.a1 * self.y1;
        self.x1 = x;
        self.y1 = y;
        y
    }

    fn reset(&mut self) {
        self.x1 = 0.0;
        self.y1 = 0.0;
    }
}

/// RBJ high-shelf biquad, coefficients normalised by `a0`.
#[derive(Debug, Clone, Copy, Default)]
struct HighShelf {
    b0: f64,
    b1: f64,
    b2: f64,
    a1: f64,
    a2: f64,
    x1: f64,
    x2: f64,
    y1: f64,
    y2: f64,
}

impl HighShelf {
    fn new(sample_rate: f64) -> Self {
        let a = 10f64.powf(SHELF_GAIN_DB / 20.0).sqrt();
        let w0 = 2.0 * PI * SHELF_HZ / sample_rate;
        let cos_w0 = w0.cos();
        let alpha = w0.sin() * SQRT_2 / 2.0;
        let two_sqrt_a_alpha = 2.0 * a.sqrt() * alpha;

        let b0 = a * ((a + 1.0) + (a - 1.0) * cos_w0 + two_sqrt_a_alpha);
        let b1 = -2.0 * a * ((a - 1.0) + (a + 1.0) * cos_w0);
        let b2 = a * ((a + 1.0) + (a - 1.0) * cos_w0 - two_sqrt_a_alpha);
        let a0 = (a + 1.0) - (a - 1.0) * cos_w0 + two_sqrt_a_alpha;
        let a1 = 2.0 * ((a - 1.0) - (a + 1.0) * cos_w0);
        let a2 = (a + 1.0) - (a - 1.0) * cos_w0 - two_sqrt_a_alpha;

        Self {
            b0: b0 / a0,
            b1: b1 / a0,
            b2: b2 / a0,
            a1: a1 / a0,
            a2: a2 / a0,
            ..Default::default()
        }
    }

    #[inline]
    fn process(&mut self, x: f64) -> f64 {
        let y = self.b0 * x + self.b1 * self.x1 + self.b2 * self.x2
            - self.a1 * self.y1
            - self.a2 * self.y2;

        self.x2 = self.x1;
        self.x1 = x;
        self.y2 = self.y1;
        self.y1 = y;

        y
    }

    fn reset(&mut self) {
        self.x1 = 0.0;
        self.x2 = 0.0;
        self.y1 = 0.0;
        self.y2 = 0.0;
    }
}

/// Per-channel K-weighting chain.
#[derive(Debug, Clone, Copy, Default)]
pub struct KWeightingFilter {
    hp1: OnePoleHighpass,
    hp2: OnePoleHighpass,
    shelf: HighShelf,
}

impl KWeightingFilter {
    pub fn new(sample_rate: u32) -> Self {
        let sr = sample_rate as f64;
        Self {
            hp1: OnePoleHighpass::new(sr),
            hp2: OnePoleHighpass::new(sr),
            shelf: HighShelf::new(sr),
        }
    }

    #[inline]
    pub fn process(&mut self, sample: f32) -> f32 {
        let x = self.hp1.process(sample as f64);
        let x = self.hp2.process(x);
        self.shelf.process(x) as f32
    }

    pub fn reset(&mut self) {
        self.hp1.reset();
        self.hp2.reset();
        self.shelf.reset();
    }
}

/// Fixed-capacity bank of K-weighting filters, one per channel.
#[derive(Debug, Clone)]
pub struct FilterBank {
    filters: [KWeightingFilter; MAX_CHANNELS],
}

impl FilterBank {
    /// All-zero coefficients: outputs silence until configured.
    pub fn new() -> Self {
        Self {
            filters: [KWeightingFilter::default(); MAX_CHANNELS],
        }
    }

    /// Recompute coefficients for every channel slot and clear state.
    pub fn configure(&mut self, sample_rate: u32) {
        self.filters = [KWeightingFilter::new(sample_rate); MAX_CHANNELS];
    }

    /// Weight one sample of `channel`. Channels past capacity pass through.
    #[inline]
    pub fn process(&mut self, channel: usize, sample: f32) -> f32 {
        match self.filters.get_mut(channel) {
            Some(filter) => filter.process(sample),
            None => sample,
        }
    }

    pub fn reset(&mut self) {
        for filter in &mut self.filters {
            filter.reset();
        }
    }
}

impl Default for FilterBank {
    fn default() -> Self {
        Self::new()
    }
}
