//! Waypoint sequencing
//!
//! Folds decoded steps into aligned waypoint tracks. Each step appends exactly
//! one entry to every track: the pivot foot is carried forward unchanged, the
//! mover is placed relative to the pivot's current position, and the centre
//! of gravity is recomputed as the midpoint of the two feet.

use crate::stance::Stance;
use crate::step::StepRecord;
use glam::DVec2;

/// Facing angle before the first step, in degrees (straight up)
pub const DEFAULT_FACING_DEGREES: f64 = 90.0;

/// Aligned per-step tracks for both feet, the centre of gravity and facing
#[derive(Debug, Clone, PartialEq)]
pub struct Waypoints {
    /// Left foot waypoints
    pub left: Vec<DVec2>,
    /// Right foot waypoints
    pub right: Vec<DVec2>,
    /// Centre-of-gravity waypoints
    pub center: Vec<DVec2>,
    /// Facing angle per waypoint, in degrees
    pub facing: Vec<f64>,
    /// Input indices of steps dropped for an unrecognized direction code
    pub skipped: Vec<usize>,
}

impl Waypoints {
    fn seeded(stance: Stance, facing: f64, capacity: usize) -> Self {
        let mut waypoints = Self {
            left: Vec::with_capacity(capacity),
            right: Vec::with_capacity(capacity),
            center: Vec::with_capacity(capacity),
            facing: Vec::with_capacity(capacity),
            skipped: Vec::new(),
        };
        waypoints.push(&stance, facing);
        waypoints
    }

    fn push(&mut self, stance: &Stance, facing: f64) {
        self.left.push(stance.left);
        self.right.push(stance.right);
        self.center.push(stance.center_of_gravity());
        self.facing.push(facing);
    }

    /// Number of waypoints per track, including the initial rest position
    pub fn len(&self) -> usize {
        self.center.len()
    }

    /// Always false: every track holds at least the initial rest position
    pub fn is_empty(&self) -> bool {
        self.center.is_empty()
    }

    /// True when there is nothing to interpolate between
    pub fn is_degenerate(&self) -> bool {
        self.len() < 2
    }

    /// Stance at a waypoint index
    pub fn stance(&self, index: usize) -> Option<Stance> {
        Some(Stance::new(*self.left.get(index)?, *self.right.get(index)?))
    }
}

/// Builds [`Waypoints`] from step records
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sequencer {
    stance: Stance,
    facing: f64,
}

impl Sequencer {
    /// Sequencer seeded with the attention stance, facing up
    pub fn new() -> Self {
        Self {
            stance: Stance::ATTENTION,
            facing: DEFAULT_FACING_DEGREES,
        }
    }

    /// Use a different starting stance
    pub fn with_stance(mut self, stance: Stance) -> Self {
        self.stance = stance;
        self
    }

    /// Use a different starting facing angle
    pub fn with_facing(mut self, facing: f64) -> Self {
        self.facing = facing;
        self
    }

    /// Starting stance
    pub fn stance(&self) -> Stance {
        self.stance
    }

    /// Starting facing angle in degrees
    pub fn facing(&self) -> f64 {
        self.facing
    }

    /// Sequence the steps front to back
    ///
    /// Steps with an unrecognized direction code add nothing to any track.
    ///
    /// ```
    /// use footwork::{DVec2, Sequencer, StepRecord};
    ///
    /// let waypoints = Sequencer::new().sequence(&[StepRecord::right(1200, 0.0)]);
    /// assert_eq!(waypoints.right[1], DVec2::new(-0.5, 1.0));
    /// assert_eq!(waypoints.left[1], DVec2::new(-0.5, 0.0));
    /// assert_eq!(waypoints.center[1], DVec2::new(-0.5, 0.5));
    /// ```
    pub fn sequence(&self, steps: &[StepRecord]) -> Waypoints {
        let mut stance = self.stance;
        let mut waypoints = Waypoints::seeded(stance, self.facing, steps.len() + 1);

        for (index, step) in steps.iter().enumerate() {
            log::debug!("Processing step {index}: {step:?}");

            let Some(decoded) = step.decode() else {
                log::warn!(
                    "Skipping step {index}: unknown direction code {}",
                    step.movement_code
                );
                waypoints.skipped.push(index);
                continue;
            };

            stance.apply(&decoded);
            waypoints.push(&stance, decoded.facing_angle);

            log::debug!(
                "Moved {} foot: left {}, right {}, cog {}, facing {}",
                decoded.mover,
                stance.left,
                stance.right,
                stance.center_of_gravity(),
                decoded.facing_angle
            );
        }

        log::trace!("Final left foot waypoints: {:?}", waypoints.left);
        log::trace!("Final right foot waypoints: {:?}", waypoints.right);
        log::trace!("Final cog waypoints: {:?}", waypoints.center);
        log::trace!("Final facing angles: {:?}", waypoints.facing);

        waypoints
    }
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequence_is_seed_only() {
        let waypoints = Sequencer::new().sequence(&[]);
        assert_eq!(waypoints.len(), 1);
        assert!(waypoints.is_degenerate());
        assert_eq!(waypoints.left, vec![DVec2::new(-0.5, 0.0)]);
        assert_eq!(waypoints.right, vec![DVec2::new(0.5, 0.0)]);
        assert_eq!(waypoints.center, vec![DVec2::ZERO]);
        assert_eq!(waypoints.facing, vec![DEFAULT_FACING_DEGREES]);
    }

    #[test]
    fn test_right_step_forward() {
        let waypoints = Sequencer::new().sequence(&[StepRecord::right(1200, 0.0)]);
        assert_eq!(waypoints.len(), 2);
        assert_eq!(waypoints.left[1], DVec2::new(-0.5, 0.0));
        assert_eq!(waypoints.right[1], DVec2::new(-0.5, 1.0));
        assert_eq!(waypoints.center[1], DVec2::new(-0.5, 0.5));
        assert_eq!(waypoints.facing, vec![DEFAULT_FACING_DEGREES, 0.0]);
    }

    #[test]
    fn test_mover_is_placed_from_pivot_not_own_position() {
        // Right moves forward from the left foot, then left moves forward
        // from where the right foot now stands.
        let waypoints = Sequencer::new().sequence(&[
            StepRecord::right(1200, 90.0),
            StepRecord::left(1200, 90.0),
        ]);
        assert_eq!(waypoints.right[2], DVec2::new(-0.5, 1.0));
        assert_eq!(waypoints.left[2], DVec2::new(-0.5, 2.0));
        assert_eq!(waypoints.center[2], DVec2::new(-0.5, 1.5));
    }

    #[test]
    fn test_same_foot_twice() {
        let waypoints = Sequencer::new().sequence(&[
            StepRecord::left(300, 90.0),
            StepRecord::left(1200, 90.0),
        ]);
        // Both steps anchor on the untouched right foot
        assert_eq!(waypoints.left[1], DVec2::new(1.5, 0.0));
        assert_eq!(waypoints.left[2], DVec2::new(0.5, 1.0));
        assert_eq!(waypoints.right, vec![DVec2::new(0.5, 0.0); 3]);
    }

    #[test]
    fn test_unknown_code_is_skipped() {
        let waypoints = Sequencer::new().sequence(&[
            StepRecord::right(1200, 0.0),
            StepRecord::left(1234, 45.0),
            StepRecord::left(600, 270.0),
        ]);
        assert_eq!(waypoints.len(), 3);
        assert_eq!(waypoints.facing, vec![DEFAULT_FACING_DEGREES, 0.0, 270.0]);
        assert_eq!(waypoints.skipped, vec![1]);
    }

    #[test]
    fn test_custom_seed() {
        let horse = Stance::HORSE;
        let waypoints = Sequencer::new()
            .with_stance(horse)
            .with_facing(0.0)
            .sequence(&[StepRecord::left(900, 0.0)]);
        assert_eq!(waypoints.stance(0), Some(horse));
        assert_eq!(waypoints.left[1], DVec2::new(-0.25, 0.0));
        assert_eq!(waypoints.facing[0], 0.0);
    }
}
