//! Per-tick waypoint following.

use glam::Vec3;
use tacgrid_core::TileGrid;
use tacgrid_paths::Path;

use crate::mover::Mover;

/// Planar distance under which a waypoint counts as reached.
pub const DEFAULT_ARRIVAL_THRESHOLD: f32 = 10.0;

/// Outcome of one [`MovementDriver::advance`] call.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Advance {
    /// Nothing to follow.
    Idle,
    /// Still short of the current waypoint; carries the planar offset to it.
    /// The motion system decides magnitude and normalizes the direction.
    Move(Vec3),
    /// The current waypoint was reached and retired; carries the next one.
    Reached(Vec3),
    /// The last waypoint was reached. The path is now empty.
    Arrived,
}

/// Walks an entity along a list of world-space waypoints.
///
/// Waypoints are kept as a stack whose end is the next target, so retiring
/// one is a `pop`.
#[derive(Clone, Debug)]
pub struct MovementDriver {
    waypoints: Vec<Vec3>,
    arrival_threshold: f32,
}

impl Default for MovementDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl MovementDriver {
    pub fn new() -> Self {
        Self {
            waypoints: Vec::new(),
            arrival_threshold: DEFAULT_ARRIVAL_THRESHOLD,
        }
    }

    /// Builder-style arrival threshold.
    pub fn with_arrival_threshold(mut self, threshold: f32) -> Self {
        self.arrival_threshold = threshold.max(0.0);
        self
    }

    #[inline]
    pub fn arrival_threshold(&self) -> f32 {
        self.arrival_threshold
    }

    /// Replace the route with `waypoints`, given in travel order.
    pub fn follow(&mut self, waypoints: impl IntoIterator<Item = Vec3>) {
        self.waypoints.clear();
        self.waypoints.extend(waypoints);
        self.waypoints.reverse();
    }

    /// Replace the route with the world positions of `path`'s steps.
    pub fn follow_path(&mut self, path: &Path, grid: &TileGrid) {
        self.follow(path.world_waypoints(grid));
    }

    /// Drop the remaining route.
    pub fn stop(&mut self) {
        self.waypoints.clear();
    }

    /// Whether any waypoint is left.
    #[inline]
    pub fn is_moving(&self) -> bool {
        !self.waypoints.is_empty()
    }

    /// The waypoint currently being approached.
    #[inline]
    pub fn current(&self) -> Option<Vec3> {
        self.waypoints.last().copied()
    }

    /// Remaining waypoints, last-to-visit first.
    #[inline]
    pub fn remaining(&self) -> &[Vec3] {
        &self.waypoints
    }

    /// Step once from the entity's current `position`.
    pub fn advance(&mut self, position: Vec3) -> Advance {
        let Some(target) = self.current() else {
            return Advance::Idle;
        };

        let offset = (target - position).truncate();
        if offset.length() > self.arrival_threshold {
            return Advance::Move(offset.extend(0.0));
        }

        self.waypoints.pop();
        match self.current() {
            Some(next) => {
                log::trace!("waypoint {target} reached, next {next}");
                Advance::Reached(next)
            }
            None => {
                log::trace!("final waypoint {target} reached");
                Advance::Arrived
            }
        }
    }

    /// [`advance`](Self::advance) using `mover`'s position, feeding any
    /// movement back into it.
    pub fn drive<M: Mover + ?Sized>(&mut self, mover: &mut M) -> Advance {
        let step = self.advance(mover.position());
        if let Advance::Move(offset) = step {
            mover.add_movement_input(offset);
        }
        step
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mover::KinematicBody;
    use tacgrid_core::{Coord, GridConfig};
    use tacgrid_paths::PathFinder;

    fn three_waypoints() -> MovementDriver {
        let mut d = MovementDriver::new();
        d.follow([
            Vec3::new(100.0, 0.0, 0.0),
            Vec3::new(200.0, 0.0, 0.0),
            Vec3::new(200.0, 100.0, 0.0),
        ]);
        d
    }

    #[test]
    fn far_from_waypoint_moves_without_popping() {
        let mut d = three_waypoints();
        let step = d.advance(Vec3::ZERO);
        assert_eq!(step, Advance::Move(Vec3::new(100.0, 0.0, 0.0)));
        assert_eq!(d.remaining().len(), 3);
        assert_eq!(d.current(), Some(Vec3::new(100.0, 0.0, 0.0)));
    }

    #[test]
    fn waypoints_pop_in_order_until_arrival() {
        let mut d = three_waypoints();
        assert_eq!(
            d.advance(Vec3::new(95.0, 3.0, 0.0)),
            Advance::Reached(Vec3::new(200.0, 0.0, 0.0))
        );
        assert_eq!(d.remaining().len(), 2);
        assert_eq!(
            d.advance(Vec3::new(200.0, 0.0, 0.0)),
            Advance::Reached(Vec3::new(200.0, 100.0, 0.0))
        );
        assert!(d.is_moving());
        assert_eq!(d.advance(Vec3::new(201.0, 99.0, 0.0)), Advance::Arrived);
        assert!(!d.is_moving());
        assert!(d.remaining().is_empty());
        assert_eq!(d.advance(Vec3::ZERO), Advance::Idle);
    }

    #[test]
    fn vertical_offset_is_ignored() {
        let mut d = MovementDriver::new();
        d.follow([Vec3::new(50.0, 50.0, 0.0)]);
        assert_eq!(d.advance(Vec3::new(48.0, 52.0, 400.0)), Advance::Arrived);

        d.follow([Vec3::new(50.0, 50.0, 0.0)]);
        assert_eq!(
            d.advance(Vec3::new(0.0, 50.0, 90.0)),
            Advance::Move(Vec3::new(50.0, 0.0, 0.0))
        );
    }

    #[test]
    fn custom_threshold() {
        let mut d = MovementDriver::new().with_arrival_threshold(1.0);
        d.follow([Vec3::new(5.0, 0.0, 0.0)]);
        assert!(matches!(d.advance(Vec3::ZERO), Advance::Move(_)));
        assert_eq!(d.advance(Vec3::new(4.5, 0.0, 0.0)), Advance::Arrived);
    }

    #[test]
    fn drive_feeds_the_mover() {
        let mut d = three_waypoints();
        let mut body = KinematicBody::new(Vec3::ZERO, 60.0);
        assert!(matches!(d.drive(&mut body), Advance::Move(_)));
        body.integrate(1.0);
        assert_eq!(body.position, Vec3::new(60.0, 0.0, 0.0));

        let mut ticks = 0;
        while d.drive(&mut body) != Advance::Arrived {
            body.integrate(1.0);
            ticks += 1;
            assert!(ticks < 100, "never arrived");
        }
        assert!((body.position - Vec3::new(200.0, 100.0, 0.0)).truncate().length() <= 10.0);
    }

    #[test]
    fn follows_a_found_path() {
        let mut grid = TileGrid::new(&GridConfig::new(5, 5).with_tile_size(100.0)).unwrap();
        let src = grid.id_at(Coord::new(2, 2)).unwrap();
        let dst = grid.id_at(Coord::new(2, 4)).unwrap();
        grid.highlight_reachable(src, 3, 3);
        let path = PathFinder::new().find_path(&mut grid, src, dst);

        let mut d = MovementDriver::new();
        d.follow_path(&path, &grid);
        assert_eq!(d.current(), Some(Vec3::new(300.0, 200.0, 0.0)));
        assert_eq!(d.remaining()[0], Vec3::new(400.0, 200.0, 0.0));

        d.stop();
        assert_eq!(d.advance(Vec3::ZERO), Advance::Idle);
    }
}
