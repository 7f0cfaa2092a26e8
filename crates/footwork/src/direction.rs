//! Clock-face direction codes
//!
//! Step sequences describe movement as a position on a 12-hour clock face
//! written as `hour * 100 + minutes` (`1200`, `130`, `300`, ...). Only the
//! eight half-quarter positions are meaningful; anything else is reported as
//! unrecognized so the sequencer can drop the step.

use glam::DVec2;
use std::fmt;

/// One of the eight clock-face movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectionCode {
    /// 12:00, straight up
    Twelve,
    /// 1:30, up and to the right
    HalfPastOne,
    /// 3:00, right
    Three,
    /// 4:30, down and to the right
    HalfPastFour,
    /// 6:00, straight down
    Six,
    /// 7:30, down and to the left
    HalfPastSeven,
    /// 9:00, left
    Nine,
    /// 10:30, up and to the left
    HalfPastTen,
}

impl DirectionCode {
    /// All codes, clockwise from 12:00
    pub const ALL: [Self; 8] = [
        Self::Twelve,
        Self::HalfPastOne,
        Self::Three,
        Self::HalfPastFour,
        Self::Six,
        Self::HalfPastSeven,
        Self::Nine,
        Self::HalfPastTen,
    ];

    /// Look up a code by its clock value
    ///
    /// Returns `None` for any value outside the eight known codes.
    ///
    /// ```
    /// use footwork::DirectionCode;
    ///
    /// assert_eq!(DirectionCode::from_clock(430), Some(DirectionCode::HalfPastFour));
    /// assert_eq!(DirectionCode::from_clock(200), None);
    /// ```
    pub fn from_clock(clock: u16) -> Option<Self> {
        match clock {
            1200 => Some(Self::Twelve),
            130 => Some(Self::HalfPastOne),
            300 => Some(Self::Three),
            430 => Some(Self::HalfPastFour),
            600 => Some(Self::Six),
            730 => Some(Self::HalfPastSeven),
            900 => Some(Self::Nine),
            1030 => Some(Self::HalfPastTen),
            _ => None,
        }
    }

    /// Clock value as written in sequence files
    pub fn clock(self) -> u16 {
        match self {
            Self::Twelve => 1200,
            Self::HalfPastOne => 130,
            Self::Three => 300,
            Self::HalfPastFour => 430,
            Self::Six => 600,
            Self::HalfPastSeven => 730,
            Self::Nine => 900,
            Self::HalfPastTen => 1030,
        }
    }

    /// Movement vector for one step in this direction
    ///
    /// Diagonals are not normalized; each component is -1, 0 or 1.
    pub fn movement(self) -> DVec2 {
        match self {
            Self::Twelve => DVec2::new(0.0, 1.0),
            Self::HalfPastOne => DVec2::new(1.0, 1.0),
            Self::Three => DVec2::new(1.0, 0.0),
            Self::HalfPastFour => DVec2::new(1.0, -1.0),
            Self::Six => DVec2::new(0.0, -1.0),
            Self::HalfPastSeven => DVec2::new(-1.0, -1.0),
            Self::Nine => DVec2::new(-1.0, 0.0),
            Self::HalfPastTen => DVec2::new(-1.0, 1.0),
        }
    }

    /// Compass bearing in degrees, clockwise from 12:00
    ///
    /// Each hour is 30 degrees and each minute half a degree, so 3:00 is 90
    /// and 1:30 is 45.
    pub fn compass_degrees(self) -> f64 {
        let clock = self.clock();
        let hour = f64::from(clock / 100);
        let minute = f64::from(clock % 100);
        (hour * 30.0 + minute / 2.0) % 360.0
    }
}

impl fmt::Display for DirectionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let clock = self.clock();
        write!(f, "{}:{:02}", clock / 100, clock % 100)
    }
}
