//! **tacgrid-core**: tiles, lattice and reachability for tactical grid movement.
//!
//! This crate owns the tile graph shared by the rest of the *tacgrid*
//! workspace: lattice geometry, the [`Tile`] node with its search fields, the
//! [`TileGrid`] arena with fixed 8-way adjacency, and the band-shaped
//! reachability highlight that marks selectable destinations for a unit.

pub mod config;
pub mod error;
pub mod geom;
pub mod grid;
pub mod highlight;
pub mod tile;

pub use config::{GridConfig, TilePrototype};
pub use error::Error;
pub use geom::{Coord, Range};
pub use grid::TileGrid;
pub use highlight::Reach;
pub use tile::{Tile, TileId, UNSET_COST};
