//! Hand-off point between synthesized frames and whatever draws them

use crate::error::Result;
use crate::playback::FrameState;

/// Frame rate and length of the animation being rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackInfo {
    /// Frames per second
    pub fps: u32,
    /// Total number of frames, including the trailing hold
    pub frame_count: usize,
}

/// Receives frames one at a time, in order
///
/// `begin` is called once before the first frame and `finish` once after the
/// last, even when there are no frames at all.
pub trait FrameRenderer {
    /// Prepare for `info.frame_count` frames
    fn begin(&mut self, info: &PlaybackInfo) -> Result<()> {
        let _ = info;
        Ok(())
    }

    /// Draw a single frame
    fn draw(&mut self, frame: &FrameState) -> Result<()>;

    /// Flush whatever the renderer buffered
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<R: FrameRenderer + ?Sized> FrameRenderer for &mut R {
    fn begin(&mut self, info: &PlaybackInfo) -> Result<()> {
        (**self).begin(info)
    }

    fn draw(&mut self, frame: &FrameState) -> Result<()> {
        (**self).draw(frame)
    }

    fn finish(&mut self) -> Result<()> {
        (**self).finish()
    }
}

/// Renderer that keeps every frame in memory
#[derive(Debug, Clone, Default)]
pub struct FrameCollector {
    info: Option<PlaybackInfo>,
    frames: Vec<FrameState>,
    finished: bool,
}

impl FrameCollector {
    /// Create an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Playback info passed to `begin`, if rendering has started
    pub fn info(&self) -> Option<PlaybackInfo> {
        self.info
    }

    /// Frames drawn so far
    pub fn frames(&self) -> &[FrameState] {
        &self.frames
    }

    /// Whether `finish` has been called
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Take the collected frames
    pub fn into_frames(self) -> Vec<FrameState> {
        self.frames
    }
}

impl FrameRenderer for FrameCollector {
    fn begin(&mut self, info: &PlaybackInfo) -> Result<()> {
        self.info = Some(*info);
        self.frames.reserve(info.frame_count);
        Ok(())
    }

    fn draw(&mut self, frame: &FrameState) -> Result<()> {
        self.frames.push(*frame);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.finished = true;
        Ok(())
    }
}
