//! Playback assembly
//!
//! Appends a still hold to the end of the interpolated tracks and exposes the
//! result frame by frame.

use crate::error::{FootworkError, Result};
use crate::interpolation::Frames;
use crate::render::{FrameRenderer, PlaybackInfo};
use glam::DVec2;
use std::time::Duration;

/// Append `pause_frames` copies of the last element of `track`
///
/// Empty tracks stay empty.
pub fn hold_last<T: Clone>(track: &mut Vec<T>, pause_frames: usize) {
    if let Some(last) = track.last().cloned() {
        track.extend(std::iter::repeat_n(last, pause_frames));
    }
}

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameState {
    /// Frame index, starting at zero
    pub index: usize,
    /// Left foot position
    pub left: DVec2,
    /// Right foot position
    pub right: DVec2,
    /// Centre-of-gravity position
    pub center: DVec2,
    /// Facing angle in degrees, counter-clockwise from +x
    pub facing_degrees: f64,
}

impl FrameState {
    /// Unit vector pointing in the facing direction
    pub fn heading(&self) -> DVec2 {
        let radians = self.facing_degrees.to_radians();
        DVec2::new(radians.cos(), radians.sin())
    }

    /// Tip of a unit-length facing indicator drawn from the centre of gravity
    pub fn arrow_tip(&self) -> DVec2 {
        self.center + self.heading()
    }
}

/// Final frame sequence handed to rendering
#[derive(Debug, Clone, PartialEq)]
pub struct Playback {
    frames: Frames,
    fps: u32,
    hold_frames: usize,
}

impl Playback {
    /// Append a hold of `pause_frames` frames to every track
    ///
    /// Fails when the tracks of `frames` differ in length. Frames built by
    /// [`Frames::interpolate`] from sequenced waypoints are always aligned.
    pub fn assemble(frames: Frames, pause_frames: usize, fps: u32) -> Result<Self> {
        if !frames.is_aligned() {
            return Err(FootworkError::MisalignedTracks {
                left: frames.left.len(),
                right: frames.right.len(),
                center: frames.center.len(),
                facing: frames.facing.len(),
            });
        }
        Ok(Self::assemble_aligned(frames, pause_frames, fps))
    }

    /// [`Playback::assemble`] for tracks already known to be aligned
    pub(crate) fn assemble_aligned(mut frames: Frames, pause_frames: usize, fps: u32) -> Self {
        let hold_frames = if frames.is_empty() { 0 } else { pause_frames };
        hold_last(&mut frames.left, pause_frames);
        hold_last(&mut frames.right, pause_frames);
        hold_last(&mut frames.center, pause_frames);
        hold_last(&mut frames.facing, pause_frames);

        Self {
            frames,
            fps,
            hold_frames,
        }
    }

    /// Frames per second
    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Total number of frames, including the hold
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Number of frames in the trailing hold
    pub fn hold_frames(&self) -> usize {
        self.hold_frames
    }

    /// True when there is nothing to play
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Playing time at the configured frame rate
    pub fn duration(&self) -> Duration {
        if self.fps == 0 {
            return Duration::ZERO;
        }
        Duration::from_secs_f64(self.frame_count() as f64 / f64::from(self.fps))
    }

    /// Underlying per-track frame data
    pub fn tracks(&self) -> &Frames {
        &self.frames
    }

    /// Frame rate and length, as passed to [`FrameRenderer::begin`]
    pub fn info(&self) -> PlaybackInfo {
        PlaybackInfo {
            fps: self.fps,
            frame_count: self.frame_count(),
        }
    }

    /// State of a single frame
    pub fn frame(&self, index: usize) -> Option<FrameState> {
        Some(FrameState {
            index,
            left: *self.frames.left.get(index)?,
            right: *self.frames.right.get(index)?,
            center: *self.frames.center.get(index)?,
            facing_degrees: *self.frames.facing.get(index)?,
        })
    }

    /// Iterate over all frames in order
    pub fn iter(&self) -> impl Iterator<Item = FrameState> + '_ {
        (0..self.frame_count()).filter_map(|index| self.frame(index))
    }

    /// Feed every frame to `renderer`
    pub fn render<R: FrameRenderer>(&self, mut renderer: R) -> Result<()> {
        renderer.begin(&self.info())?;
        for frame in self.iter() {
            renderer.draw(&frame)?;
        }
        renderer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::FrameCollector;

    fn frames(values: &[f64]) -> Frames {
        Frames {
            left: values.iter().map(|&v| DVec2::new(v, 0.0)).collect(),
            right: values.iter().map(|&v| DVec2::new(v, 1.0)).collect(),
            center: values.iter().map(|&v| DVec2::new(v, 0.5)).collect(),
            facing: values.to_vec(),
        }
    }

    #[test]
    fn test_hold_last() {
        let mut track = vec![1, 2, 3];
        hold_last(&mut track, 2);
        assert_eq!(track, vec![1, 2, 3, 3, 3]);

        let mut empty: Vec<i32> = Vec::new();
        hold_last(&mut empty, 5);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_assemble_appends_hold() {
        let playback = Playback::assemble(frames(&[0.0, 1.0]), 3, 50).unwrap();
        assert_eq!(playback.frame_count(), 5);
        assert_eq!(playback.hold_frames(), 3);
        for index in 1..5 {
            assert_eq!(playback.frame(index).unwrap().facing_degrees, 1.0);
            assert_eq!(playback.frame(index).unwrap().left, DVec2::new(1.0, 0.0));
        }
        assert_eq!(playback.frame(5), None);
    }

    #[test]
    fn test_assemble_empty() {
        let playback = Playback::assemble(Frames::default(), 50, 50).unwrap();
        assert!(playback.is_empty());
        assert_eq!(playback.hold_frames(), 0);
        assert_eq!(playback.frame(0), None);
        assert_eq!(playback.duration(), Duration::ZERO);
    }

    #[test]
    fn test_duration() {
        let playback = Playback::assemble(frames(&[0.0; 25]), 25, 50).unwrap();
        assert_eq!(playback.duration(), Duration::from_secs(1));
    }

    #[test]
    fn test_heading_and_arrow() {
        let frame = FrameState {
            index: 0,
            left: DVec2::new(-0.5, 0.0),
            right: DVec2::new(0.5, 0.0),
            center: DVec2::ZERO,
            facing_degrees: 90.0,
        };
        let tip = frame.arrow_tip();
        assert!(tip.x.abs() < 1e-12);
        assert!((tip.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_render_visits_every_frame() {
        let playback = Playback::assemble(frames(&[0.0, 1.0, 2.0]), 1, 10).unwrap();
        let mut collector = FrameCollector::new();
        playback.render(&mut collector).unwrap();

        assert!(collector.is_finished());
        assert_eq!(
            collector.info(),
            Some(PlaybackInfo {
                fps: 10,
                frame_count: 4
            })
        );
        let indices: Vec<usize> = collector.frames().iter().map(|f| f.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_assemble_rejects_misaligned_tracks() {
        let mut short_facing = frames(&[0.0, 1.0, 2.0]);
        short_facing.facing.pop();
        let err = Playback::assemble(short_facing, 2, 50).unwrap_err();
        assert!(matches!(
            err,
            FootworkError::MisalignedTracks {
                left: 3,
                right: 3,
                center: 3,
                facing: 2
            }
        ));

        let mut long_left = frames(&[0.0]);
        long_left.left.push(DVec2::ONE);
        assert!(Playback::assemble(long_left, 0, 50).is_err());
    }
}
