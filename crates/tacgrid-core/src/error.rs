use thiserror::Error;

use crate::geom::Coord;

/// Errors raised while building a [`TileGrid`](crate::TileGrid).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("tile size must be finite and positive, got {0}")]
    InvalidTileSize(f32),
    #[error("obstacle at {pos} lies outside the {rows}x{columns} lattice")]
    ObstacleOutOfBounds { pos: Coord, rows: u32, columns: u32 },
}
