//! Standing-wave pipeline: mode derivation, field evaluation, and
//! node/anti-node thresholding.

use std::f64::consts::PI;

use ndarray::Array2;

use crate::error::DomainError;
use crate::params::PlateParameters;

/// Pixel value for a node (near-zero displacement)
pub const NODE: u8 = 0;

/// Pixel value for an anti-node
pub const ANTI_NODE: u8 = 255;

/// Real-valued displacement samples over the plate
pub type WaveField = Array2<f64>;

/// Two-level node / anti-node image
pub type ChladniPattern = Array2<u8>;

/// Mode numbers of the two superposed standing-wave solutions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModePair {
    pub m: i32,
    pub n: i32,
}

/// Derive the theoretical mode pair excited at a given frequency.
///
/// The plate side length is sqrt(grid_size), so the grid resolution
/// doubles as the physical length. `n` is the wavelength
/// (sound_speed / frequency) divided by the angular wavenumber step
/// (2π / length), rounded half-away-from-zero (`f64::round`); `m` is
/// offset from it by `mode_difference`.
///
/// # Errors
/// `ZeroFrequency` if `frequency_hz` is zero (the wavelength divides by
/// it), `EmptyGrid` if `grid_size` is zero.
pub fn calculate_modes(
    frequency_hz: f64,
    sound_speed_m_s: f64,
    grid_size: u32,
    mode_difference: i32,
) -> Result<ModePair, DomainError> {
    if frequency_hz == 0.0 {
        return Err(DomainError::ZeroFrequency);
    }
    if grid_size == 0 {
        return Err(DomainError::EmptyGrid(grid_size));
    }

    let length = (grid_size as f64).sqrt();
    let wavelength = sound_speed_m_s / frequency_hz;
    let wavenumber_step = 2.0 * PI / length;

    let n = (wavelength / wavenumber_step).round() as i32;
    let m = n + mode_difference;

    Ok(ModePair { m, n })
}

/// `grid_size` evenly spaced samples spanning the closed interval
/// [0, grid_size]. The endpoint is pinned exactly; a single-sample grid
/// sits at 0.
fn sample_coordinates(grid_size: u32) -> Vec<f64> {
    let count = grid_size as usize;
    if count == 1 {
        return vec![0.0];
    }

    let step = grid_size as f64 / (count - 1) as f64;
    let mut coords: Vec<f64> = (0..count).map(|i| i as f64 * step).collect();
    coords[count - 1] = grid_size as f64;
    coords
}

/// Evaluate the interference equation over the full sample grid.
///
/// For superposed mode pairs (m, n) and (n, m) on a square plate of
/// side L = grid_size constrained at the center, the displacement at
/// (x, y) is
///
/// ```text
/// cos(n·x·π/L)·cos(m·y·π/L) − cos(m·x·π/L)·cos(n·y·π/L)
/// ```
///
/// Rows index y, columns index x. Pathological mode values propagate as
/// NaN/Inf rather than being guarded.
pub fn compute_wave_field(grid_size: u32, modes: ModePair) -> WaveField {
    let length = grid_size as f64;
    let coords = sample_coordinates(grid_size);
    let m = modes.m as f64;
    let n = modes.n as f64;

    let size = coords.len();
    Array2::from_shape_fn((size, size), |(row, col)| {
        let x = coords[col] * PI / length;
        let y = coords[row] * PI / length;
        (n * x).cos() * (m * y).cos() - (m * x).cos() * (n * y).cos()
    })
}

/// Map a displacement field to the two-level node / anti-node image.
///
/// Strict comparison: samples with |v| below the threshold are nodes.
/// Everything else is an anti-node, including values exactly equal to
/// the threshold and NaN (which never compares less).
pub fn threshold(field: &WaveField, threshold: f64) -> ChladniPattern {
    field.mapv(|v| if v.abs() < threshold { NODE } else { ANTI_NODE })
}

/// Run the full pipeline for one parameter set.
///
/// # Errors
/// Propagates `DomainError` from the mode calculation; no partial
/// output is produced on failure.
pub fn generate(params: &PlateParameters) -> Result<ChladniPattern, DomainError> {
    let modes = calculate_modes(
        params.frequency_hz,
        params.sound_speed_m_s,
        params.grid_size,
        params.mode_difference,
    )?;
    log::debug!("derived modes m={} n={}", modes.m, modes.n);

    let field = compute_wave_field(params.grid_size, modes);
    Ok(threshold(&field, params.threshold))
}
