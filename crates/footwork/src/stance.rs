//! Foot placements and the named stance library
//!
//! Stances are given for the right side; every `right_*` stance has a
//! `left_*` twin obtained by mirroring across the 12:00/6:00 axis.

use crate::error::{FootworkError, Result};
use crate::step::{DecodedStep, Foot};
use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Current position of both feet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stance {
    /// Left foot position
    pub left: DVec2,
    /// Right foot position
    pub right: DVec2,
}

impl Stance {
    /// Feet side by side, one unit apart, centred on the origin
    pub const ATTENTION: Self = Self::new(DVec2::new(-0.5, 0.0), DVec2::new(0.5, 0.0));

    /// Wide, square stance
    pub const HORSE: Self = Self::new(DVec2::new(-0.75, 0.0), DVec2::new(0.75, 0.0));

    /// Right foot forward, left foot one unit back
    pub const RIGHT_NEUTRAL: Self = Self::new(DVec2::new(-0.5, -1.0), DVec2::new(0.5, 0.0));

    /// Right foot drawn in on its toes ahead of the left
    pub const RIGHT_CAT: Self = Self::new(DVec2::new(-0.5, 0.0), DVec2::new(0.0, 0.5));

    /// Same placement as the neutral bow, weight forward
    pub const RIGHT_FORWARD: Self = Self::new(DVec2::new(-0.5, -1.0), DVec2::new(0.5, 0.0));

    /// Create a stance from explicit foot positions
    pub const fn new(left: DVec2, right: DVec2) -> Self {
        Self { left, right }
    }

    /// Look up a stance by name, e.g. `"horse"` or `"left_cat"`
    pub fn named(name: &str) -> Option<Self> {
        name.parse::<NamedStance>().ok().map(NamedStance::stance)
    }

    /// Position of the given foot
    pub fn foot(&self, foot: Foot) -> DVec2 {
        match foot {
            Foot::Left => self.left,
            Foot::Right => self.right,
        }
    }

    fn foot_mut(&mut self, foot: Foot) -> &mut DVec2 {
        match foot {
            Foot::Left => &mut self.left,
            Foot::Right => &mut self.right,
        }
    }

    /// Midpoint between the feet
    pub fn center_of_gravity(&self) -> DVec2 {
        (self.left + self.right) / 2.0
    }

    /// Mirror image across the vertical axis
    ///
    /// The feet swap roles: the new left foot sits where the right foot was,
    /// reflected, and vice versa.
    ///
    /// ```
    /// use footwork::{DVec2, Stance};
    ///
    /// let left_cat = Stance::RIGHT_CAT.mirrored();
    /// assert_eq!(left_cat.left, DVec2::new(0.0, 0.5));
    /// assert_eq!(left_cat.right, DVec2::new(0.5, 0.0));
    /// ```
    pub fn mirrored(&self) -> Self {
        Self::new(
            DVec2::new(-self.right.x, self.right.y),
            DVec2::new(-self.left.x, self.left.y),
        )
    }

    /// Apply one step: the pivot stays, the mover lands at pivot + movement
    ///
    /// The mover's previous position plays no part in where it lands.
    pub fn apply(&mut self, step: &DecodedStep) {
        let pivot = self.foot(step.pivot);
        *self.foot_mut(step.mover) = pivot + step.movement;
    }
}

impl Default for Stance {
    fn default() -> Self {
        Self::ATTENTION
    }
}

/// Starting stances that can be named in a sequence file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NamedStance {
    /// Feet together
    #[default]
    Attention,
    /// Wide square stance
    Horse,
    /// Right neutral bow
    RightNeutral,
    /// Left neutral bow
    LeftNeutral,
    /// Right cat stance
    RightCat,
    /// Left cat stance
    LeftCat,
    /// Right forward bow
    RightForward,
    /// Left forward bow
    LeftForward,
}

impl NamedStance {
    /// Every named stance
    pub const ALL: [Self; 8] = [
        Self::Attention,
        Self::Horse,
        Self::RightNeutral,
        Self::LeftNeutral,
        Self::RightCat,
        Self::LeftCat,
        Self::RightForward,
        Self::LeftForward,
    ];

    /// Name as written in sequence files
    pub fn name(self) -> &'static str {
        match self {
            Self::Attention => "attention",
            Self::Horse => "horse",
            Self::RightNeutral => "right_neutral",
            Self::LeftNeutral => "left_neutral",
            Self::RightCat => "right_cat",
            Self::LeftCat => "left_cat",
            Self::RightForward => "right_forward",
            Self::LeftForward => "left_forward",
        }
    }

    /// Foot placement of this stance
    pub fn stance(self) -> Stance {
        match self {
            Self::Attention => Stance::ATTENTION,
            Self::Horse => Stance::HORSE,
            Self::RightNeutral => Stance::RIGHT_NEUTRAL,
            Self::LeftNeutral => Stance::RIGHT_NEUTRAL.mirrored(),
            Self::RightCat => Stance::RIGHT_CAT,
            Self::LeftCat => Stance::RIGHT_CAT.mirrored(),
            Self::RightForward => Stance::RIGHT_FORWARD,
            Self::LeftForward => Stance::RIGHT_FORWARD.mirrored(),
        }
    }
}

impl From<NamedStance> for Stance {
    fn from(named: NamedStance) -> Self {
        named.stance()
    }
}

impl FromStr for NamedStance {
    type Err = FootworkError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|named| named.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| FootworkError::InvalidConfig(format!("unknown stance '{s}'")))
    }
}

impl fmt::Display for NamedStance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
