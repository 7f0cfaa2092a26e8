//! Print the waypoints and a few frames of a sequence file
//!
//! ```text
//! cargo run --example trace_sequence -- ../../sequences/short-form-1.yml
//! ```

use footwork::Choreography;
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let path = env::args()
        .nth(1)
        .ok_or("usage: trace_sequence <sequence.yml>")?;
    let choreography = Choreography::load(&path)?;
    let pipeline = choreography.pipeline()?;

    let waypoints = pipeline.waypoints(&choreography.steps);
    println!("{} waypoints ({} skipped steps)", waypoints.len(), waypoints.skipped.len());
    for i in 0..waypoints.len() {
        println!(
            "  [{i:>3}] L {:<12} R {:<12} CoG {:<12} facing {:>6.1}",
            waypoints.left[i].to_string(),
            waypoints.right[i].to_string(),
            waypoints.center[i].to_string(),
            waypoints.facing[i]
        );
    }

    let playback = pipeline.run(&choreography.steps);
    println!(
        "{} frames at {} fps ({:.2}s)",
        playback.frame_count(),
        playback.fps(),
        playback.duration().as_secs_f64()
    );

    Ok(())
}
