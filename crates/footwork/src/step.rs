//! Step records and the per-step decoder

use crate::direction::DirectionCode;
use crate::error::{FootworkError, Result};
use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;

/// Which foot a step refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Foot {
    /// Left foot
    Left,
    /// Right foot
    Right,
}

impl Foot {
    /// The other foot
    pub fn other(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl fmt::Display for Foot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "L"),
            Self::Right => write!(f, "R"),
        }
    }
}

/// Movement value as written in a sequence file
///
/// Only an integer naming one of the eight clock positions is a direction.
/// Every other number is still a valid value: the step loads and is dropped
/// during sequencing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MovementCode {
    /// Integer clock value, recognized or not
    Clock(i64),
    /// Number written with a fraction or exponent, or too large for `i64`
    Real(f64),
}

impl MovementCode {
    /// Direction named by this value, if any
    pub fn direction(self) -> Option<DirectionCode> {
        match self {
            Self::Clock(clock) => u16::try_from(clock).ok().and_then(DirectionCode::from_clock),
            Self::Real(_) => None,
        }
    }
}

impl fmt::Display for MovementCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clock(clock) => write!(f, "{clock}"),
            Self::Real(value) => write!(f, "{value:?}"),
        }
    }
}

impl From<i64> for MovementCode {
    fn from(clock: i64) -> Self {
        Self::Clock(clock)
    }
}

impl From<i32> for MovementCode {
    fn from(clock: i32) -> Self {
        Self::Clock(i64::from(clock))
    }
}

impl From<u16> for MovementCode {
    fn from(clock: u16) -> Self {
        Self::Clock(i64::from(clock))
    }
}

impl From<DirectionCode> for MovementCode {
    fn from(direction: DirectionCode) -> Self {
        Self::from(direction.clock())
    }
}

#[cfg(feature = "serde")]
impl Serialize for MovementCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match *self {
            Self::Clock(clock) => serializer.serialize_i64(clock),
            Self::Real(value) => serializer.serialize_f64(value),
        }
    }
}

#[cfg(feature = "serde")]
struct MovementCodeVisitor;

#[cfg(feature = "serde")]
impl de::Visitor<'_> for MovementCodeVisitor {
    type Value = MovementCode;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a clock-face direction code such as 1200 or 130")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> std::result::Result<Self::Value, E> {
        Ok(MovementCode::Clock(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> std::result::Result<Self::Value, E> {
        Ok(i64::try_from(value).map_or(MovementCode::Real(value as f64), MovementCode::Clock))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> std::result::Result<Self::Value, E> {
        Ok(MovementCode::Real(value))
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for MovementCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(MovementCodeVisitor)
    }
}

/// One symbolic step: which foot moves, where to, and where the body faces
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepRecord {
    /// The foot that moves
    pub active_point: Foot,
    /// Movement value, possibly unrecognized
    pub movement_code: MovementCode,
    /// Facing angle in degrees
    pub facing_angle: f64,
}

/// A step resolved against the direction table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecodedStep {
    /// Foot that is placed somewhere new
    pub mover: Foot,
    /// Foot that stays put and anchors the movement
    pub pivot: Foot,
    /// Offset from the pivot to the mover's new position
    pub movement: DVec2,
    /// Facing angle in degrees
    pub facing_angle: f64,
}

impl StepRecord {
    /// Create a step record
    pub fn new(active_point: Foot, movement_code: impl Into<MovementCode>, facing_angle: f64) -> Self {
        Self {
            active_point,
            movement_code: movement_code.into(),
            facing_angle,
        }
    }

    /// Step with the left foot
    pub fn left(movement_code: impl Into<MovementCode>, facing_angle: f64) -> Self {
        Self::new(Foot::Left, movement_code, facing_angle)
    }

    /// Step with the right foot
    pub fn right(movement_code: impl Into<MovementCode>, facing_angle: f64) -> Self {
        Self::new(Foot::Right, movement_code, facing_angle)
    }

    /// Direction of this step, if the code is one of the eight known ones
    pub fn direction(&self) -> Option<DirectionCode> {
        self.movement_code.direction()
    }

    /// Resolve mover, pivot and movement vector
    ///
    /// Returns `None` when the movement code is unrecognized; such steps are
    /// dropped from the sequence rather than treated as errors.
    ///
    /// ```
    /// use footwork::{Foot, StepRecord};
    ///
    /// let step = StepRecord::right(1200, 0.0).decode().unwrap();
    /// assert_eq!(step.mover, Foot::Right);
    /// assert_eq!(step.pivot, Foot::Left);
    /// assert_eq!(step.movement, footwork::DVec2::new(0.0, 1.0));
    ///
    /// assert!(StepRecord::left(1500, 0.0).decode().is_none());
    /// ```
    pub fn decode(&self) -> Option<DecodedStep> {
        let direction = self.direction()?;
        Some(DecodedStep {
            mover: self.active_point,
            pivot: self.active_point.other(),
            movement: direction.movement(),
            facing_angle: self.facing_angle,
        })
    }
}

/// Step record as it appears in a sequence file: `{R: 1200, F: 90}`
///
/// Exactly one of `L` and `R` must be present, plus the facing angle `F`.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct RawStep {
    /// Direction code for a left-foot step
    #[cfg_attr(
        feature = "serde",
        serde(rename = "L", default, skip_serializing_if = "Option::is_none")
    )]
    pub left: Option<MovementCode>,
    /// Direction code for a right-foot step
    #[cfg_attr(
        feature = "serde",
        serde(rename = "R", default, skip_serializing_if = "Option::is_none")
    )]
    pub right: Option<MovementCode>,
    /// Facing angle in degrees
    #[cfg_attr(
        feature = "serde",
        serde(rename = "F", default, skip_serializing_if = "Option::is_none")
    )]
    pub facing: Option<f64>,
}

impl RawStep {
    /// Validate into a [`StepRecord`]
    ///
    /// `index` is the record's position in its sequence and is only used for
    /// error reporting.
    pub fn into_record(self, index: usize) -> Result<StepRecord> {
        let (active_point, movement_code) = match (self.left, self.right) {
            (Some(code), None) => (Foot::Left, code),
            (None, Some(code)) => (Foot::Right, code),
            (Some(_), Some(_)) => {
                return Err(FootworkError::invalid_step(
                    index,
                    "both 'L' and 'R' are present, expected exactly one active foot",
                ));
            }
            (None, None) => {
                return Err(FootworkError::invalid_step(
                    index,
                    "missing active foot, expected 'L' or 'R'",
                ));
            }
        };

        let facing_angle = self
            .facing
            .ok_or_else(|| FootworkError::invalid_step(index, "missing facing angle 'F'"))?;
        if !facing_angle.is_finite() {
            return Err(FootworkError::invalid_step(
                index,
                format!("facing angle {facing_angle} is not a finite number"),
            ));
        }

        Ok(StepRecord::new(active_point, movement_code, facing_angle))
    }
}

impl From<StepRecord> for RawStep {
    fn from(step: StepRecord) -> Self {
        let (left, right) = match step.active_point {
            Foot::Left => (Some(step.movement_code), None),
            Foot::Right => (None, Some(step.movement_code)),
        };
        Self {
            left,
            right,
            facing: Some(step.facing_angle),
        }
    }
}

/// Validate a list of raw steps, stopping at the first invalid record
pub fn parse_steps(raw: Vec<RawStep>) -> Result<Vec<StepRecord>> {
    raw.into_iter()
        .enumerate()
        .map(|(index, step)| step.into_record(index))
        .collect()
}
