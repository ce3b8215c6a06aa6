//! Energy → loudness conversion.
//!
//! Per-channel energies are summed without BS.1770 channel weights and
//! without gating. That keeps the numbers comparable with the meters this
//! engine replaces; they are LUFS-like, not certified loudness.

use crate::LUFS_FLOOR;

/// Calibration offset from BS.1770.
const LUFS_OFFSET: f64 = -0.691;

/// Keeps `log10` away from zero.
const MIN_ENERGY: f64 = 1e-12;

/// `-0.691 + 10·log10(max(energy, 1e-12))`.
#[inline]
pub fn energy_to_lufs(energy: f64) -> f32 {
    (LUFS_OFFSET + 10.0 * energy.max(MIN_ENERGY).log10()) as f32
}

/// Linear amplitude to dBFS, clamped to [`LUFS_FLOOR`]. Exact silence maps to the floor.
#[inline]
pub fn linear_to_dbfs(linear: f32) -> f32 {
    if linear > 0.0 {
        (20.0 * linear.log10()).max(LUFS_FLOOR)
    } else {
        LUFS_FLOOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_unit_energy() {
        assert_abs_diff_eq!(energy_to_lufs(1.0), -0.691, epsilon = 1e-6);
    }

    #[test]
    fn test_zero_energy_hits_log_floor() {
        // 10·log10(1e-12) = -120, minus the offset
        assert_abs_diff_eq!(energy_to_lufs(0.0), -120.691, epsilon = 1e-4);
        assert_abs_diff_eq!(energy_to_lufs(-1.0), -120.691, epsilon = 1e-4);
    }

    #[test]
    fn test_ten_db_per_decade() {
        let a = energy_to_lufs(0.01);
        let b = energy_to_lufs(0.1);
        assert_abs_diff_eq!(b - a, 10.0, epsilon = 1e-4);
    }

    #[test]
    fn test_dbfs() {
        assert_abs_diff_eq!(linear_to_dbfs(1.0), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(linear_to_dbfs(0.5), -6.0206, epsilon = 1e-3);
        assert_eq!(linear_to_dbfs(0.0), LUFS_FLOOR);
        assert_eq!(linear_to_dbfs(1e-9), LUFS_FLOOR);
    }
}
