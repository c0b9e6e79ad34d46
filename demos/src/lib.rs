//! Shared scenario runner for the tacgrid demos.

use std::io::{self, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tacgrid_core::{Coord, GridConfig, Reach, TileGrid};
use tacgrid_move::{Advance, Command, KinematicBody, UnitSession};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("cannot read scenario: {0}")]
    Io(#[from] io::Error),
    #[error("malformed scenario: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Grid(#[from] tacgrid_core::Error),
    #[error("unit position {0} is off the grid")]
    OffGrid(Coord),
    #[error("unit still moving after {0} ticks")]
    Stalled(u32),
}

/// One unit, one order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub grid: GridConfig,
    pub unit: Coord,
    pub target: Coord,
    pub reach: Reach,
    /// Unit speed in world units per second.
    pub speed: f32,
    /// Seconds per tick.
    pub dt: f32,
    pub max_ticks: u32,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            grid: GridConfig::new(8, 12).with_obstacles([
                Coord::new(3, 5),
                Coord::new(4, 5),
                Coord::new(5, 5),
                Coord::new(4, 7),
            ]),
            unit: Coord::new(4, 3),
            target: Coord::new(4, 8),
            reach: Reach::default(),
            speed: 400.0,
            dt: 0.1,
            max_ticks: 1_000,
        }
    }
}

impl Scenario {
    /// Read a JSON scenario; missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DemoError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// How the order ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Arrived { ticks: u32, cost: i32 },
    Unreachable,
}

/// Draw the board: `@` unit, `*` path, `o` reachable, `#` blocked.
pub fn render(grid: &TileGrid, unit: Option<Coord>) -> String {
    let mut s = String::with_capacity(grid.len() + grid.rows());
    for row in 0..grid.rows() as i32 {
        for col in 0..grid.columns() as i32 {
            let pos = Coord::new(row, col);
            let ch = match grid.tile_at(pos) {
                _ if Some(pos) == unit => '@',
                Some(t) if !t.traversable => '#',
                Some(t) if t.on_path => '*',
                Some(t) if t.is_highlighted() => 'o',
                _ => '.',
            };
            s.push(ch);
        }
        s.push('\n');
    }
    s
}

/// Play `scenario`, writing a board snapshot at every waypoint.
pub fn run<W: Write>(scenario: &Scenario, out: &mut W) -> Result<Outcome, DemoError> {
    let mut grid = TileGrid::new(&scenario.grid)?;
    let start = grid
        .id_at(scenario.unit)
        .and_then(|id| grid.world_position(id))
        .ok_or(DemoError::OffGrid(scenario.unit))?;
    let mut body = KinematicBody::new(start, scenario.speed);
    let mut session = UnitSession::new(scenario.reach);

    let picked = grid.tile_at_world(body.position);
    session.select(&mut grid, picked);
    writeln!(out, "selected {}:\n{}", scenario.unit, render(&grid, Some(scenario.unit)))?;

    let target = grid.id_at(scenario.target);
    let path = match session.command(&mut grid, target) {
        Command::Move(path) => path,
        _ => {
            writeln!(out, "{} is out of reach", scenario.target)?;
            return Ok(Outcome::Unreachable);
        }
    };
    writeln!(
        out,
        "moving to {} in {} steps (cost {}):\n{}",
        scenario.target,
        path.len(),
        path.cost(),
        render(&grid, Some(scenario.unit))
    )?;

    for tick in 1..=scenario.max_ticks {
        match session.tick(&mut grid, &mut body) {
            Advance::Arrived => {
                writeln!(out, "arrived after {tick} ticks")?;
                return Ok(Outcome::Arrived {
                    ticks: tick,
                    cost: path.cost(),
                });
            }
            Advance::Reached(_) => {
                let here = grid
                    .tile_at_world(body.position)
                    .and_then(|id| grid.tile(id))
                    .map(|t| t.pos());
                writeln!(out, "tick {tick}:\n{}", render(&grid, here))?;
            }
            Advance::Move(_) | Advance::Idle => {}
        }
        body.integrate(scenario.dt);
    }
    Err(DemoError::Stalled(scenario.max_ticks))
}
