//! Exponential smoothing for the short-term loudness display value.
//!
//! The short-term window needs three seconds before it reports anything but
//! the floor. Until then the smoother is fed the momentary value so the
//! display doesn't crawl up from -120.
//!
//! # Example
//!
//! ```
//! use levelcalc_core::LoudnessSmoother;
//!
//! let mut smoother = LoudnessSmoother::new(0.15);
//!
//! // Short-term not ready yet: seeded from momentary
//! assert_eq!(smoother.next(-120.0, -18.0), -18.0);
//!
//! // Afterwards, one step per process() call
//! let v = smoother.next(-20.0, -19.0);
//! assert!(v < -18.0 && v > -20.0);
//! ```

/// Short-term values below this are treated as "no data yet".
pub const SEED_THRESHOLD: f32 = -100.0;

/// One-pole exponential smoother, stepped once per processed buffer.
#[derive(Debug, Clone, Copy)]
pub struct LoudnessSmoother {
    alpha: f32,
    value: Option<f32>,
}

impl LoudnessSmoother {
    pub fn new(alpha: f32) -> Self {
        Self {
            alpha: alpha.clamp(0.0, 1.0),
            value: None,
        }
    }

    /// Advance by one step and return the new smoothed value.
    #[inline]
    pub fn next(&mut self, short_term: f32, momentary: f32) -> f32 {
        let raw = if short_term < SEED_THRESHOLD {
            momentary
        } else {
            short_term
        };

        let smoothed = match self.value {
            Some(prev) => self.alpha * raw + (1.0 - self.alpha) * prev,
            None => raw,
        };

        self.value = Some(smoothed);
        smoothed
    }

    /// `None` until the first step after construction or reset.
    #[inline]
    pub fn current(&self) -> Option<f32> {
        self.value
    }

    #[inline]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha.clamp(0.0, 1.0);
    }

    #[inline]
    pub fn reset(&mut self) {
        self.value = None;
    }
}

impl Default for LoudnessSmoother {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_SMOOTHING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_first_step_passes_through() {
        let mut smoother = LoudnessSmoother::new(0.15);
        assert!(smoother.current().is_none());
        assert_eq!(smoother.next(-23.0, -20.0), -23.0);
        assert_eq!(smoother.current(), Some(-23.0));
    }

    #[test]
    fn test_seeds_from_momentary_below_threshold() {
        let mut smoother = LoudnessSmoother::new(0.15);
        assert_eq!(smoother.next(-120.0, -14.0), -14.0);

        // Still seeding: prev -14, raw -16
        let v = smoother.next(-110.0, -16.0);
        assert_abs_diff_eq!(v, 0.15 * -16.0 + 0.85 * -14.0, epsilon = 1e-5);
    }

    #[test]
    fn test_exponential_step() {
        let mut smoother = LoudnessSmoother::new(0.15);
        smoother.next(-30.0, -30.0);
        let v = smoother.next(-20.0, -20.0);
        assert_abs_diff_eq!(v, -28.5, epsilon = 1e-5);
    }

    #[test]
    fn test_converges_to_steady_input() {
        let mut smoother = LoudnessSmoother::new(0.15);
        smoother.next(-60.0, -60.0);
        for _ in 0..200 {
            smoother.next(-18.0, -18.0);
        }
        assert_abs_diff_eq!(smoother.current().unwrap(), -18.0, epsilon = 1e-3);
    }

    #[test]
    fn test_reset_forgets_history() {
        let mut smoother = LoudnessSmoother::new(0.15);
        smoother.next(-30.0, -30.0);
        smoother.reset();
        assert_eq!(smoother.next(-10.0, -10.0), -10.0);
    }

    #[test]
    fn test_alpha_is_clamped() {
        let smoother = LoudnessSmoother::new(3.0);
        assert_eq!(smoother.alpha(), 1.0);
    }
}
