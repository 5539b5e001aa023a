//! Dispatch context for target selection.

use crate::models::Direction;

/// Head and geometry state passed to the selection rules.
///
/// A snapshot: rules read it, engines rebuild it before every decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DispatchContext {
    /// Current head cylinder.
    pub head: i64,
    /// Current sweep direction.
    pub direction: Direction,
    /// Lowest addressable cylinder.
    pub min_cylinder: i64,
    /// Highest addressable cylinder.
    pub max_cylinder: i64,
}

impl DispatchContext {
    /// Creates a context with the head at `head` moving in `direction`.
    ///
    /// Bounds start unset (`i64::MIN..=i64::MAX`); boundary-aware rules
    /// need [`with_bounds`](Self::with_bounds).
    pub fn at(head: i64, direction: Direction) -> Self {
        Self {
            head,
            direction,
            min_cylinder: i64::MIN,
            max_cylinder: i64::MAX,
        }
    }

    /// Sets the cylinder bounds.
    pub fn with_bounds(mut self, min_cylinder: i64, max_cylinder: i64) -> Self {
        self.min_cylinder = min_cylinder;
        self.max_cylinder = max_cylinder;
        self
    }

    /// Boundary cylinder in the current direction.
    #[inline]
    pub fn far_edge(&self) -> i64 {
        match self.direction {
            Direction::Up => self.max_cylinder,
            Direction::Down => self.min_cylinder,
        }
    }

    /// Boundary cylinder behind the head.
    #[inline]
    pub fn near_edge(&self) -> i64 {
        match self.direction {
            Direction::Up => self.min_cylinder,
            Direction::Down => self.max_cylinder,
        }
    }
}
