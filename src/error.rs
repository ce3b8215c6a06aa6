//! Centralized error type for the levelcalc umbrella crate.
//!
//! Wraps the core errors so `?` propagates naturally across crate boundaries.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] levelcalc_core::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
