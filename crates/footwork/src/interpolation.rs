//! Segment interpolation
//!
//! Every pair of consecutive waypoints is resampled into a fixed number of
//! evenly spaced frames over the closed interval `[0, 1]`, so both the start
//! and the end waypoint of a segment appear as frames. Angles are treated as
//! plain numbers: going from 350 to 10 degrees sweeps back through 180.

use crate::sequencer::Waypoints;
use glam::DVec2;

/// Trait for types that can be linearly interpolated
pub trait Lerp: Clone {
    /// Blend `(1 - t) * self + t * other`
    fn lerp(&self, other: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(&self, other: &Self, t: f64) -> Self {
        (1.0 - t) * self + t * other
    }
}

impl Lerp for DVec2 {
    fn lerp(&self, other: &Self, t: f64) -> Self {
        Self::new(self.x.lerp(&other.x, t), self.y.lerp(&other.y, t))
    }
}

/// `samples` evenly spaced parameters from 0 to 1 inclusive
///
/// A single sample is `0.0`; zero samples yield nothing.
///
/// ```
/// use footwork::interpolation::linspace;
///
/// let t: Vec<f64> = linspace(5).collect();
/// assert_eq!(t, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn linspace(samples: usize) -> impl Iterator<Item = f64> {
    let last = samples.saturating_sub(1);
    (0..samples).map(move |i| {
        if last == 0 {
            0.0
        } else {
            i as f64 / last as f64
        }
    })
}

/// Interpolate a waypoint track into `frames_per_segment` frames per segment
///
/// The result has `(waypoints.len() - 1) * frames_per_segment` entries and is
/// empty when there are fewer than two waypoints.
pub fn interpolate_track<T: Lerp>(waypoints: &[T], frames_per_segment: usize) -> Vec<T> {
    if waypoints.len() < 2 {
        return Vec::new();
    }

    let mut frames = Vec::with_capacity((waypoints.len() - 1) * frames_per_segment);
    for segment in waypoints.windows(2) {
        let (start, end) = (&segment[0], &segment[1]);
        frames.extend(linspace(frames_per_segment).map(|t| start.lerp(end, t)));
    }
    frames
}

/// Frame-aligned dense tracks produced from [`Waypoints`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frames {
    /// Left foot position per frame
    pub left: Vec<DVec2>,
    /// Right foot position per frame
    pub right: Vec<DVec2>,
    /// Centre-of-gravity position per frame
    pub center: Vec<DVec2>,
    /// Facing angle per frame, in degrees
    pub facing: Vec<f64>,
}

impl Frames {
    /// Interpolate all four waypoint tracks with the same density
    pub fn interpolate(waypoints: &Waypoints, frames_per_segment: usize) -> Self {
        let frames = Self {
            left: interpolate_track(&waypoints.left, frames_per_segment),
            right: interpolate_track(&waypoints.right, frames_per_segment),
            center: interpolate_track(&waypoints.center, frames_per_segment),
            facing: interpolate_track(&waypoints.facing, frames_per_segment),
        };
        log::debug!(
            "Interpolated {} waypoints into {} frames ({} per segment)",
            waypoints.len(),
            frames.len(),
            frames_per_segment
        );
        frames
    }

    /// Number of frames
    pub fn len(&self) -> usize {
        self.center.len()
    }

    /// True when all four tracks have the same length
    pub fn is_aligned(&self) -> bool {
        let len = self.len();
        self.left.len() == len && self.right.len() == len && self.facing.len() == len
    }

    /// True when no frames were produced
    pub fn is_empty(&self) -> bool {
        self.center.is_empty()
    }
}
