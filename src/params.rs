//! Plate excitation parameters with physical units and documented semantics.

/// Input configuration for one pattern generation.
///
/// Built once per invocation (from CLI arguments or `Default`) and never
/// mutated afterwards.
#[derive(Debug, Clone)]
pub struct PlateParameters {
    /// Grid resolution (samples per side)
    ///
    /// Also stands in for the plate side length: the mode calculation
    /// uses sqrt(grid_size) as the physical length, so resolution and
    /// plate size are deliberately coupled.
    pub grid_size: u32,

    /// Drive frequency (Hz)
    pub frequency_hz: f64,

    /// Speed of sound in the plate material (m/s)
    pub sound_speed_m_s: f64,

    /// Offset between the two superposed mode numbers (m = n + this)
    pub mode_difference: i32,

    /// Absolute displacement below which a sample counts as a node
    pub threshold: f64,
}

impl Default for PlateParameters {
    fn default() -> Self {
        Self {
            grid_size: 500,
            frequency_hz: 5201.0,
            sound_speed_m_s: 5210.0, // speed of sound in iron
            mode_difference: 2,
            threshold: 0.1,
        }
    }
}

impl PlateParameters {
    /// Title string for the display collaborator
    pub fn caption(&self) -> String {
        format!("Chladni cymatic pattern for: {} Hz", self.frequency_hz)
    }
}
