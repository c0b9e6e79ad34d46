//! Select → highlight → command → move, for a single unit.
//!
//! The host feeds picks (`Option<TileId>`, usually from
//! [`TileGrid::tile_at_world`]) and ticks; the session keeps the grid
//! highlight, the path query and the movement driver consistent with the
//! unit's [`UnitMode`].

use tacgrid_core::{Reach, TileGrid, TileId};
use tacgrid_paths::{Heuristic, Octile, Path, PathFinder};

use crate::driver::{Advance, MovementDriver};
use crate::mover::Mover;

/// What the unit is currently doing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitMode {
    /// Not selected; picks select it.
    #[default]
    Idle,
    /// Selected on `origin`; its reachable band is highlighted.
    Selected { origin: TileId },
    /// Following a path toward `destination`.
    Moving { destination: TileId },
}

/// Result of [`UnitSession::command`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// A route was found and movement started.
    Move(Path),
    /// The target was invalid or unreachable; the unit was deselected.
    Deselected,
    /// The unit was not waiting for a destination.
    Ignored,
}

pub struct UnitSession<H = Octile> {
    reach: Reach,
    mode: UnitMode,
    finder: PathFinder<H>,
    driver: MovementDriver,
}

impl UnitSession {
    pub fn new(reach: Reach) -> Self {
        Self::with_parts(reach, PathFinder::new(), MovementDriver::new())
    }
}

impl<H: Heuristic> UnitSession<H> {
    pub fn with_parts(reach: Reach, finder: PathFinder<H>, driver: MovementDriver) -> Self {
        Self {
            reach,
            mode: UnitMode::Idle,
            finder,
            driver,
        }
    }

    #[inline]
    pub fn mode(&self) -> UnitMode {
        self.mode
    }

    #[inline]
    pub fn reach(&self) -> Reach {
        self.reach
    }

    #[inline]
    pub fn driver(&self) -> &MovementDriver {
        &self.driver
    }

    /// Select the unit standing on `picked` and highlight where it may go.
    /// Returns `false` when nothing was picked or the unit is moving.
    pub fn select(&mut self, grid: &mut TileGrid, picked: Option<TileId>) -> bool {
        if matches!(self.mode, UnitMode::Moving { .. }) {
            return false;
        }
        let Some(origin) = picked.filter(|&id| grid.contains(id)) else {
            return false;
        };
        let n = grid.highlight_band(origin, self.reach);
        log::debug!("unit selected on {origin}, {n} tiles reachable");
        self.mode = UnitMode::Selected { origin };
        true
    }

    /// Send the selected unit to `target`.
    pub fn command(&mut self, grid: &mut TileGrid, target: Option<TileId>) -> Command {
        let UnitMode::Selected { origin } = self.mode else {
            return Command::Ignored;
        };
        let Some(target) = target.filter(|&id| grid.is_highlighted(id)) else {
            self.deselect(grid);
            return Command::Deselected;
        };

        let path = self.finder.find_path(grid, origin, target);
        if path.is_empty() {
            self.deselect(grid);
            return Command::Deselected;
        }

        self.driver.follow_path(&path, grid);
        self.mode = UnitMode::Moving {
            destination: target,
        };
        Command::Move(path)
    }

    /// Drop the selection and its highlight. A moving unit stops where it is.
    pub fn deselect(&mut self, grid: &mut TileGrid) {
        grid.clear_highlighted();
        self.driver.stop();
        if self.mode != UnitMode::Idle {
            log::debug!("unit deselected");
        }
        self.mode = UnitMode::Idle;
    }

    /// Advance a moving unit by one tick.
    pub fn tick<M: Mover + ?Sized>(&mut self, grid: &mut TileGrid, mover: &mut M) -> Advance {
        let UnitMode::Moving { destination } = self.mode else {
            return Advance::Idle;
        };
        let step = self.driver.drive(mover);
        if matches!(step, Advance::Arrived | Advance::Idle) {
            log::debug!("unit arrived at {destination}");
            grid.clear_highlighted();
            self.mode = UnitMode::Idle;
        }
        step
    }
}
