//! Grid construction inputs.

use glam::Vec3;

use crate::geom::Coord;

/// Descriptor instantiated once per lattice cell.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TilePrototype {
    /// Initial traversability of every tile.
    pub traversable: bool,
}

impl Default for TilePrototype {
    fn default() -> Self {
        Self { traversable: true }
    }
}

/// Everything needed to lay out a [`TileGrid`](crate::TileGrid).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    pub rows: u32,
    pub columns: u32,
    /// World-space edge length of one cell.
    pub tile_size: f32,
    /// World position of the centre of tile (0, 0).
    pub origin: Vec3,
    pub prototype: TilePrototype,
    /// Cells occupied by obstacles; built non-traversable.
    pub obstacles: Vec<Coord>,
}

impl GridConfig {
    /// An open `rows` x `columns` lattice with the default tile size.
    pub fn new(rows: u32, columns: u32) -> Self {
        Self {
            rows,
            columns,
            ..Self::default()
        }
    }

    /// Builder-style obstacle list.
    pub fn with_obstacles(mut self, obstacles: impl IntoIterator<Item = Coord>) -> Self {
        self.obstacles.extend(obstacles);
        self
    }

    /// Builder-style tile size.
    pub fn with_tile_size(mut self, tile_size: f32) -> Self {
        self.tile_size = tile_size;
        self
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            columns: 10,
            tile_size: 100.0,
            origin: Vec3::ZERO,
            prototype: TilePrototype::default(),
            obstacles: Vec::new(),
        }
    }
}
