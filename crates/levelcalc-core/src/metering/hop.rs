//! 100 ms hop accumulation of K-weighted energy.

/// Hop length in seconds.
pub(crate) const HOP_SECONDS: f64 = 0.1;

/// Hops per momentary block.
pub(crate) const HOPS_PER_BLOCK: usize = 4;

/// Samples per hop at `sample_rate`, rounded.
#[inline]
pub(crate) fn hop_samples(sample_rate: u32) -> usize {
    (sample_rate as f64 * HOP_SECONDS).round() as usize
}

/// Running sum of squares for one channel's current hop.
#[derive(Debug, Clone, Copy, Default)]
pub struct HopAccumulator {
    sum_squares: f64,
    count: usize,
}

impl HopAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one weighted sample. Returns the hop's mean square once
    /// `hop_samples` samples have been collected, then starts a new hop.
    ///
    /// With `hop_samples == 0` nothing is ever returned.
    #[inline]
    pub fn push(&mut self, weighted: f32, hop_samples: usize) -> Option<f64> {
        if hop_samples == 0 {
            return None;
        }

        let w = weighted as f64;
        self.sum_squares += w * w;
        self.count += 1;

        if self.count >= hop_samples {
            let mean_square = self.sum_squares / hop_samples as f64;
            self.reset();
            Some(mean_square)
        } else {
            None
        }
    }

    #[cfg(test)]
    fn count(&self) -> usize {
        self.count
    }

    pub fn reset(&mut self) {
        self.sum_squares = 0.0;
        self.count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_hop_samples() {
        assert_eq!(hop_samples(48_000), 4800);
        assert_eq!(hop_samples(44_100), 4410);
        assert_eq!(hop_samples(22_050), 2205);
        assert_eq!(hop_samples(0), 0);
    }

    #[test]
    fn test_emits_mean_square_every_hop() {
        let mut acc = HopAccumulator::new();
        for _ in 0..9 {
            assert!(acc.push(0.5, 10).is_none());
        }
        let ms = acc.push(0.5, 10).expect("hop should complete");
        assert_relative_eq!(ms, 0.25);
        assert_eq!(acc.count(), 0);
    }

    #[test]
    fn test_unconfigured_never_emits() {
        let mut acc = HopAccumulator::new();
        for _ in 0..1000 {
            assert!(acc.push(1.0, 0).is_none());
        }
        assert_eq!(acc.count(), 0);
    }
}
