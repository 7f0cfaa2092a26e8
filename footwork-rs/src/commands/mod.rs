//! Command implementations

pub mod inspect;
pub mod render;

use anyhow::{Context, Result};
use std::path::Path;

use footwork::{Choreography, Pipeline, PlaybackConfig};

use crate::cli::PlaybackArgs;

/// Load a sequence file, naming it in any error
pub fn load_choreography(path: &Path) -> Result<Choreography> {
    Choreography::load(path)
        .with_context(|| format!("Failed to load sequence file: {}", path.display()))
}

/// Defaults, then the file's `playback` section, then command-line overrides
pub fn resolve_config(choreography: &Choreography, overrides: &PlaybackArgs) -> PlaybackConfig {
    overrides.apply(choreography.playback_or_default())
}

/// Build a pipeline for a loaded sequence, seeded with its starting stance
pub fn build_pipeline(choreography: &Choreography, overrides: &PlaybackArgs) -> Result<Pipeline> {
    let config = resolve_config(choreography, overrides);
    log::debug!("Using playback configuration {config:?}");
    let pipeline = Pipeline::new(config).context("Invalid playback configuration")?;
    Ok(pipeline.with_sequencer(choreography.sequencer()))
}
