//! Disk head state.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sweep direction of the head.
///
/// `Up` moves toward higher cylinder numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Up,
    Down,
}

impl Direction {
    /// The opposite direction.
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    #[inline]
    pub fn is_ascending(self) -> bool {
        self == Direction::Up
    }

    /// Direction of travel from `from` to `to`. Stationary counts as `Up`.
    pub fn of_travel(from: i64, to: i64) -> Self {
        if to < from {
            Direction::Down
        } else {
            Direction::Up
        }
    }

    /// Whether `position` lies ahead of (or at) `head` in this direction.
    #[inline]
    pub fn is_ahead(self, head: i64, position: i64) -> bool {
        match self {
            Direction::Up => position >= head,
            Direction::Down => position <= head,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// Error returned when a direction string is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown direction '{0}', expected 'up' or 'down'")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "asc" | "ascending" => Ok(Direction::Up),
            "down" | "desc" | "descending" => Ok(Direction::Down),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

/// Position, sweep direction and clock of the head.
///
/// Mutated once per step, only by the engine running the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeadState {
    pub position: i64,
    pub direction: Direction,
    pub time: f64,
}

impl HeadState {
    /// Head parked at `position` at t=0.
    pub fn new(position: i64, direction: Direction) -> Self {
        Self {
            position,
            direction,
            time: 0.0,
        }
    }

    /// Flips the sweep direction.
    pub fn reverse(&mut self) {
        self.direction = self.direction.reversed();
    }
}
