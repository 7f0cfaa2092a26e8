//! Step records in, playable frames out

use crate::config::PlaybackConfig;
use crate::error::Result;
use crate::interpolation::Frames;
use crate::playback::Playback;
use crate::render::FrameRenderer;
use crate::sequencer::{Sequencer, Waypoints};
use crate::step::StepRecord;

/// Sequencer, interpolator and playback assembler wired together
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pipeline {
    config: PlaybackConfig,
    sequencer: Sequencer,
}

impl Pipeline {
    /// Create a pipeline, rejecting a zero frame rate or density
    pub fn new(config: PlaybackConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            sequencer: Sequencer::new(),
        })
    }

    /// Replace the sequencer, e.g. to start from another stance
    pub fn with_sequencer(mut self, sequencer: Sequencer) -> Self {
        self.sequencer = sequencer;
        self
    }

    /// Active configuration
    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    /// Active sequencer
    pub fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    /// Waypoints for `steps`, before interpolation
    pub fn waypoints(&self, steps: &[StepRecord]) -> Waypoints {
        self.sequencer.sequence(steps)
    }

    /// Sequence, interpolate and append the hold
    pub fn run(&self, steps: &[StepRecord]) -> Playback {
        let waypoints = self.waypoints(steps);
        let frames = Frames::interpolate(&waypoints, self.config.frames_per_segment);
        let playback =
            Playback::assemble_aligned(frames, self.config.pause_frames(), self.config.fps);

        log::info!(
            "Synthesized {} frames from {} steps ({} skipped) at {} fps",
            playback.frame_count(),
            steps.len(),
            waypoints.skipped.len(),
            self.config.fps
        );

        playback
    }

    /// Run and feed the result to `renderer`
    pub fn render<R: FrameRenderer>(&self, steps: &[StepRecord], renderer: R) -> Result<Playback> {
        let playback = self.run(steps);
        playback.render(renderer)?;
        Ok(playback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FootworkError;
    use crate::render::FrameCollector;
    use glam::DVec2;

    #[test]
    fn test_invalid_config_rejected() {
        let err = Pipeline::new(PlaybackConfig::default().with_fps(0)).unwrap_err();
        assert!(matches!(err, FootworkError::InvalidConfig(_)));
    }

    #[test]
    fn test_frame_count() {
        let pipeline = Pipeline::new(
            PlaybackConfig::default()
                .with_frames_per_segment(4)
                .with_pause_frames(2),
        )
        .unwrap();
        let steps = [StepRecord::right(1200, 90.0), StepRecord::left(1200, 90.0)];
        let playback = pipeline.run(&steps);
        assert_eq!(playback.frame_count(), 2 * 4 + 2);
    }

    #[test]
    fn test_empty_input() {
        let pipeline = Pipeline::new(PlaybackConfig::default()).unwrap();
        let playback = pipeline.run(&[]);
        assert!(playback.is_empty());
    }

    #[test]
    fn test_render_final_frame() {
        let pipeline = Pipeline::new(PlaybackConfig::default().with_frames_per_segment(5)).unwrap();
        let mut collector = FrameCollector::new();
        let playback = pipeline
            .render(&[StepRecord::right(1200, 0.0)], &mut collector)
            .unwrap();

        assert_eq!(collector.frames().len(), playback.frame_count());
        let last = collector.frames().last().unwrap();
        assert_eq!(last.right, DVec2::new(-0.5, 1.0));
        assert_eq!(last.center, DVec2::new(-0.5, 0.5));
        assert_eq!(last.facing_degrees, 0.0);
    }
}
