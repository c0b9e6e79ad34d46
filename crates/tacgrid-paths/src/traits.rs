use tacgrid_core::Coord;

use crate::distance::{manhattan, octile};
use crate::ORTHOGONAL_COST;

/// Estimate of the remaining cost from `from` to `to`.
///
/// Any monotonic estimate works. An admissible one (never above the true
/// cost) guarantees the lowest-cost route; a larger one trades optimality for
/// fewer expansions.
pub trait Heuristic {
    fn estimate(&self, from: Coord, to: Coord) -> i32;
}

/// 10/14 octile distance. Admissible and consistent with the step costs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Octile;

impl Heuristic for Octile {
    #[inline]
    fn estimate(&self, from: Coord, to: Coord) -> i32 {
        octile(from, to)
    }
}

/// Manhattan distance times 10. Overestimates diagonal moves.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct WeightedManhattan;

impl Heuristic for WeightedManhattan {
    #[inline]
    fn estimate(&self, from: Coord, to: Coord) -> i32 {
        manhattan(from, to) * ORTHOGONAL_COST
    }
}

impl<F: Fn(Coord, Coord) -> i32> Heuristic for F {
    #[inline]
    fn estimate(&self, from: Coord, to: Coord) -> i32 {
        self(from, to)
    }
}
