//! Playback configuration

use crate::error::{FootworkError, Result};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default frame rate
pub const DEFAULT_FPS: u32 = 50;

/// Default number of interpolated frames per step
pub const DEFAULT_FRAMES_PER_SEGMENT: usize = 30;

/// Frame rate and interpolation density
///
/// A `pause_frames` of `None` holds the last frame for one second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct PlaybackConfig {
    /// Frames per second
    pub fps: u32,
    /// Interpolated frames per pair of consecutive waypoints
    pub frames_per_segment: usize,
    /// Length of the trailing hold in frames
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub pause_frames: Option<usize>,
}

impl PlaybackConfig {
    /// Set the frame rate
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    /// Set the interpolation density
    pub fn with_frames_per_segment(mut self, frames_per_segment: usize) -> Self {
        self.frames_per_segment = frames_per_segment;
        self
    }

    /// Set an explicit hold length
    pub fn with_pause_frames(mut self, pause_frames: usize) -> Self {
        self.pause_frames = Some(pause_frames);
        self
    }

    /// Hold length in frames, one second's worth unless set explicitly
    pub fn pause_frames(&self) -> usize {
        self.pause_frames.unwrap_or(self.fps as usize)
    }

    /// Check that frame rate and density are positive
    pub fn validate(&self) -> Result<()> {
        if self.fps == 0 {
            return Err(FootworkError::InvalidConfig(
                "fps must be a positive integer".to_string(),
            ));
        }
        if self.frames_per_segment == 0 {
            return Err(FootworkError::InvalidConfig(
                "frames_per_segment must be a positive integer".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            frames_per_segment: DEFAULT_FRAMES_PER_SEGMENT,
            pause_frames: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PlaybackConfig::default();
        assert_eq!(config.fps, 50);
        assert_eq!(config.frames_per_segment, 30);
        assert_eq!(config.pause_frames(), 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_pause_follows_fps_until_set() {
        let config = PlaybackConfig::default().with_fps(24);
        assert_eq!(config.pause_frames(), 24);
        assert_eq!(config.with_pause_frames(0).pause_frames(), 0);
    }

    #[test]
    fn test_validate_rejects_zero() {
        assert!(matches!(
            PlaybackConfig::default().with_fps(0).validate(),
            Err(FootworkError::InvalidConfig(_))
        ));
        assert!(matches!(
            PlaybackConfig::default()
                .with_frames_per_segment(0)
                .validate(),
            Err(FootworkError::InvalidConfig(_))
        ));
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: PlaybackConfig = serde_yaml_ng::from_str("fps: 25").unwrap();
        assert_eq!(config.fps, 25);
        assert_eq!(config.frames_per_segment, DEFAULT_FRAMES_PER_SEGMENT);
        assert_eq!(config.pause_frames, None);
    }
}
