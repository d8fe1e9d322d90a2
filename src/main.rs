//! Chladni - standing-wave plate pattern generator
//!
//! Derives plate mode numbers from a drive frequency, evaluates the
//! standing-wave interference field over a square grid, and writes the
//! thresholded node/anti-node image as a grayscale PNG.

use clap::Parser;

use chladni::cli::Args;
use chladni::{plate, render};

fn main() {
    env_logger::init();

    let args = Args::parse();
    let params = args.plate_parameters();

    log::info!(
        "Generating {}x{} pattern at {} Hz (sound speed {} m/s)",
        params.grid_size,
        params.grid_size,
        params.frequency_hz,
        params.sound_speed_m_s
    );

    let pattern = match plate::generate(&params) {
        Ok(pattern) => pattern,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = render::save_grayscale(&pattern, &args.output) {
        eprintln!("Failed to write {}: {e}", args.output.display());
        std::process::exit(1);
    }

    println!("{}", params.caption());
    println!("Wrote {}", args.output.display());
}
