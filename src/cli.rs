//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::params::PlateParameters;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "chladni")]
#[command(about = "Chladni plate standing-wave pattern generator", long_about = None)]
pub struct Args {
    /// Grid resolution (samples per side, doubles as the plate length proxy)
    #[arg(long, value_name = "SAMPLES", default_value = "500")]
    pub grid_size: u32,

    /// Drive frequency (Hz)
    #[arg(long, value_name = "HZ", default_value = "5201")]
    pub frequency: f64,

    /// Speed of sound in the plate material (m/s, default is iron)
    #[arg(long, value_name = "M_PER_S", default_value = "5210")]
    pub sound_speed: f64,

    /// Offset between the two superposed mode numbers
    #[arg(long, value_name = "COUNT", default_value = "2", allow_negative_numbers = true)]
    pub mode_difference: i32,

    /// Absolute displacement below which a sample counts as a node
    #[arg(long, value_name = "CUTOFF", default_value = "0.1")]
    pub threshold: f64,

    /// Output image path
    #[arg(long, value_name = "PATH", default_value = "chladni.png")]
    pub output: PathBuf,
}

impl Args {
    /// Build the plate parameters from the parsed arguments
    pub fn plate_parameters(&self) -> PlateParameters {
        PlateParameters {
            grid_size: self.grid_size,
            frequency_hz: self.frequency,
            sound_speed_m_s: self.sound_speed,
            mode_difference: self.mode_difference,
            threshold: self.threshold,
        }
    }
}
