//! Bounded rectangular space the ships fly in.
//!
//! The arena does not confine anything. Ships may leave it; boundaries only matter for sensing.

use std::{convert::Infallible, fmt, slice::Iter, str::FromStr};

use thiserror::Error;

use super::Position;

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct ArenaConfig {
    pub width: f64,
    pub height: f64,
}

impl ArenaConfig {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Position {
        Position::new(self.width / 2.0, self.height / 2.0)
    }

    /// Signed distance from `position` to the given edge. Negative once the edge is crossed.
    pub fn distance_to_boundary(&self, position: Position, boundary: Boundary) -> f64 {
        match boundary {
            Boundary::Left => position.x(),
            Boundary::Right => self.width - position.x(),
            Boundary::Top => position.y(),
            Boundary::Bottom => self.height - position.y(),
        }
    }

    /// First boundary in priority order (left, right, top, bottom) that `position` lies beyond.
    pub fn crossed_boundary(&self, position: Position) -> Option<Boundary> {
        if position.x() < 0.0 {
            Some(Boundary::Left)
        } else if position.x() > self.width {
            Some(Boundary::Right)
        } else if position.y() < 0.0 {
            Some(Boundary::Top)
        } else if position.y() > self.height {
            Some(Boundary::Bottom)
        } else {
            None
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Boundary {
    Left,
    Right,
    Top,
    Bottom,
}

impl Boundary {
    pub fn iter() -> Iter<'static, Boundary> {
        static BOUNDARIES: [Boundary; 4] = [
            Boundary::Left,
            Boundary::Right,
            Boundary::Top,
            Boundary::Bottom,
        ];
        BOUNDARIES.iter()
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Boundary::Left => "left",
            Boundary::Right => "right",
            Boundary::Top => "top",
            Boundary::Bottom => "bottom",
        };
        f.write_str(name)
    }
}

impl TryFrom<usize> for Boundary {
    type Error = ArenaError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Boundary::Left),
            1 => Ok(Boundary::Right),
            2 => Ok(Boundary::Top),
            3 => Ok(Boundary::Bottom),
            _ => Err(ArenaError::InvalidBoundary(value.to_string())),
        }
    }
}

impl FromStr for Boundary {
    type Err = ArenaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Boundary::iter()
            .find(|b| b.to_string().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| ArenaError::InvalidBoundary(s.to_string()))
    }
}

impl TryFrom<&str> for Boundary {
    type Error = ArenaError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ArenaError {
    #[error("invalid boundary {0}")]
    InvalidBoundary(String),
}

impl From<Infallible> for ArenaError {
    fn from(value: Infallible) -> Self {
        match value {}
    }
}
