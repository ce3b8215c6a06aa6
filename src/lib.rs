//! # levelcalc - Real-time Loudness & Level Metering
//!
//! Metering engine for host audio plugins: K-weighted momentary (400 ms) and
//! short-term (3 s) loudness, raw RMS/peak, all published lock-free.
//!
//! ## Architecture
//!
//! levelcalc is an umbrella crate over:
//! - **levelcalc-core** - the engine ([`LevelCalc`]), reader handle, windows, filters
//!
//! and adds:
//! - [`MeterSession`] / [`MeterSessionBuilder`] - validated construction and explicit
//!   hand-off of the engine to the audio callback and the reader to the UI
//! - `ffi` (feature) - C ABI with an opaque engine pointer
//!
//! ## Quick Start
//!
//! ```
//! use levelcalc::prelude::*;
//!
//! let (mut calc, meters) = MeterSession::builder()
//!     .sample_rate(48_000)
//!     .channels(2)
//!     .build()?
//!     .split();
//!
//! // Audio thread
//! let left = vec![0.1f32; 480];
//! let right = vec![0.1f32; 480];
//! calc.process(&[&left, &right], 480, 2);
//!
//! // UI thread
//! let snapshot = meters.snapshot();
//! assert_eq!(snapshot.channels, 2);
//! # Ok::<(), levelcalc::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `ffi` - `extern "C"` API for embedding in a C/C++ host
//! - `serde` - serializable [`MeterSnapshot`]

/// Re-export of levelcalc-core for direct access
pub use levelcalc_core as core;

pub use levelcalc_core::{
    energy_to_lufs, linear_to_dbfs, AtomicFloat, FilterBank, KWeightingFilter, LevelCalc,
    LoudnessSmoother, MeterConfig, MeterHandle, MeterSnapshot, PublishedMetrics, RawLevels,
    LUFS_FLOOR, MAX_CHANNELS,
};

mod builder;
mod error;
mod session;

pub use builder::MeterSessionBuilder;
pub use error::{Error, Result};
pub use session::MeterSession;

#[cfg(feature = "ffi")]
pub mod ffi;

/// Convenience prelude for common imports
pub mod prelude {
    pub use crate::{MeterSession, MeterSessionBuilder};

    pub use crate::core::{
        LevelCalc, MeterConfig, MeterHandle, MeterSnapshot, LUFS_FLOOR, MAX_CHANNELS,
    };
}
