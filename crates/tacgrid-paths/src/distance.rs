use tacgrid_core::Coord;

use crate::{DIAGONAL_COST, ORTHOGONAL_COST};

/// Manhattan (L1) distance between two coordinates.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

/// Chebyshev (L∞) distance between two coordinates.
#[inline]
pub fn chebyshev(a: Coord, b: Coord) -> i32 {
    (a.row - b.row).abs().max((a.col - b.col).abs())
}

/// Octile distance scaled to the 10/14 step costs: the exact cost of the
/// cheapest 8-way route on an open lattice.
#[inline]
pub fn octile(a: Coord, b: Coord) -> i32 {
    let dr = (a.row - b.row).abs();
    let dc = (a.col - b.col).abs();
    let diag = dr.min(dc);
    let straight = dr.max(dc) - diag;
    diag * DIAGONAL_COST + straight * ORTHOGONAL_COST
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        let a = Coord::new(2, 2);
        let b = Coord::new(5, 3);
        assert_eq!(manhattan(a, b), 4);
        assert_eq!(chebyshev(a, b), 3);
        assert_eq!(octile(a, b), 14 + 20);
        assert_eq!(octile(a, a), 0);
        assert_eq!(octile(Coord::new(2, 2), Coord::new(2, 4)), 20);
    }
}
