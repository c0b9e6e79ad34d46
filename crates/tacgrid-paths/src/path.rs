use glam::Vec3;
use tacgrid_core::{Coord, TileGrid};

/// The result of one path query.
///
/// Steps are in travel order: the source is excluded, the destination is the
/// last step. An empty path means no route was found.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    steps: Vec<Coord>,
    cost: i32,
}

impl Path {
    pub(crate) fn new(steps: Vec<Coord>, cost: i32) -> Self {
        Self { steps, cost }
    }

    #[inline]
    pub fn steps(&self) -> &[Coord] {
        &self.steps
    }

    /// Sum of the step costs (10 orthogonal, 14 diagonal).
    #[inline]
    pub fn cost(&self) -> i32 {
        self.cost
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    #[inline]
    pub fn destination(&self) -> Option<Coord> {
        self.steps.last().copied()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Coord> {
        self.steps.iter()
    }

    /// World-space centres of the steps, in travel order.
    pub fn world_waypoints(&self, grid: &TileGrid) -> Vec<Vec3> {
        self.steps
            .iter()
            .filter_map(|&pos| grid.id_at(pos).and_then(|id| grid.world_position(id)))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Coord;
    type IntoIter = std::slice::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn path_round_trip() {
        let path = Path::new(vec![Coord::new(2, 3), Coord::new(2, 4)], 20);
        let json = serde_json::to_string(&path).unwrap();
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(back, path);
    }
}
