//! Error type for invalid plate inputs.

use thiserror::Error;

/// Invalid physical or geometric input.
///
/// Raised before any matrix is produced; the pipeline has no
/// partial-failure mode and callers are expected to report and stop.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("frequency must be non-zero (the wavelength is sound_speed / frequency)")]
    ZeroFrequency,
    #[error("grid size must be at least 1, got {0}")]
    EmptyGrid(u32),
}
