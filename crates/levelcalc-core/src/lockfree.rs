//! Lock-free primitives for real-time metering.

use atomic_float::AtomicF32;
use core::sync::atomic::Ordering;

/// Cache-line aligned atomic f32.
///
/// Loads and stores are relaxed: every meter value is an independent scalar
/// and readers tolerate values from different `process()` generations.
#[derive(Debug)]
#[repr(align(64))]
pub struct AtomicFloat {
    value: AtomicF32,
}

impl AtomicFloat {
    pub fn new(value: f32) -> Self {
        Self {
            value: AtomicF32::new(value),
        }
    }

    #[inline]
    pub fn get(&self) -> f32 {
        self.value.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn set(&self, value: f32) {
        self.value.store(value, Ordering::Relaxed);
    }
}

impl Clone for AtomicFloat {
    fn clone(&self) -> Self {
        Self::new(self.get())
    }
}

impl Default for AtomicFloat {
    fn default() -> Self {
        Self::new(crate::LUFS_FLOOR)
    }
}
