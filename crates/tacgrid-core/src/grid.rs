//! The [`TileGrid`] arena, owner of every [`Tile`] of the lattice.
//!
//! Other components refer to tiles only through [`TileId`] handles, so there
//! is exactly one copy of each tile's highlight and search state.

use glam::Vec3;

use crate::config::GridConfig;
use crate::error::Error;
use crate::geom::{Coord, Range};
use crate::tile::{Tile, TileId};

/// A rectangular lattice of tiles with fixed 8-way adjacency.
#[derive(Clone, Debug)]
pub struct TileGrid {
    rows: usize,
    columns: usize,
    tile_size: f32,
    origin: Vec3,
    tiles: Vec<Tile>,
    // Tiles marked by the last highlight pass, in marking order.
    pub(crate) marked: Vec<TileId>,
}

impl TileGrid {
    /// Build the lattice described by `config`.
    pub fn new(config: &GridConfig) -> Result<Self, Error> {
        if !config.tile_size.is_finite() || config.tile_size <= 0.0 {
            return Err(Error::InvalidTileSize(config.tile_size));
        }

        let rows = config.rows as usize;
        let columns = config.columns as usize;
        let mut grid = Self {
            rows,
            columns,
            tile_size: config.tile_size,
            origin: config.origin,
            tiles: Vec::with_capacity(rows * columns),
            marked: Vec::new(),
        };

        for pos in grid.bounds() {
            grid.tiles.push(Tile::new(pos, config.prototype.traversable));
        }

        for &pos in &config.obstacles {
            let Some(id) = grid.id_at(pos) else {
                return Err(Error::ObstacleOutOfBounds {
                    pos,
                    rows: config.rows,
                    columns: config.columns,
                });
            };
            grid.tiles[id.0].traversable = false;
        }

        grid.link_neighbors();
        log::debug!(
            "built {}x{} grid ({} obstacles)",
            rows,
            columns,
            config.obstacles.len()
        );
        Ok(grid)
    }

    fn link_neighbors(&mut self) {
        for i in 0..self.tiles.len() {
            let pos = self.tiles[i].pos();
            let immediate: Vec<TileId> =
                pos.orthogonal().into_iter().filter_map(|n| self.id_at(n)).collect();
            let diagonal: Vec<TileId> =
                pos.diagonal().into_iter().filter_map(|n| self.id_at(n)).collect();
            let tile = &mut self.tiles[i];
            tile.immediate = immediate;
            tile.diagonal = diagonal;
        }
    }

    // -----------------------------------------------------------------------
    // Dimensions
    // -----------------------------------------------------------------------

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// World-space size of one cell.
    #[inline]
    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// World position of the centre of tile (0, 0).
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// The lattice as a range of coordinates.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.rows as i32, self.columns as i32)
    }

    /// Number of tiles.
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the grid has no tiles at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    // -----------------------------------------------------------------------
    // Tile access
    // -----------------------------------------------------------------------

    /// The tile at `pos`, if inside the lattice.
    #[inline]
    pub fn id_at(&self, pos: Coord) -> Option<TileId> {
        if !self.bounds().contains(pos) {
            return None;
        }
        Some(TileId(pos.row as usize * self.columns + pos.col as usize))
    }

    /// Whether `id` refers to a tile of this grid.
    #[inline]
    pub fn contains(&self, id: TileId) -> bool {
        id.0 < self.tiles.len()
    }

    #[inline]
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.0)
    }

    #[inline]
    pub fn tile_mut(&mut self, id: TileId) -> Option<&mut Tile> {
        self.tiles.get_mut(id.0)
    }

    /// The tile at `pos`, if inside the lattice.
    #[inline]
    pub fn tile_at(&self, pos: Coord) -> Option<&Tile> {
        self.id_at(pos).and_then(|id| self.tile(id))
    }

    /// All tiles in row-major order.
    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// All tiles in row-major order, mutably.
    #[inline]
    pub fn tiles_mut(&mut self) -> &mut [Tile] {
        &mut self.tiles
    }

    /// Mark the tile at `pos` as blocked or free. Returns `false` when `pos`
    /// is outside the lattice.
    pub fn set_traversable(&mut self, pos: Coord, traversable: bool) -> bool {
        match self.id_at(pos) {
            Some(id) => {
                self.tiles[id.0].traversable = traversable;
                true
            }
            None => false,
        }
    }

    // -----------------------------------------------------------------------
    // Index conversion
    // -----------------------------------------------------------------------

    /// Map a row-major flat index to the matching column-major index.
    #[inline]
    pub fn row_to_column(&self, index: usize) -> usize {
        if self.tiles.is_empty() {
            return index;
        }
        let (row, col) = (index / self.columns, index % self.columns);
        col * self.rows + row
    }

    /// Map a column-major flat index back to the row-major index.
    #[inline]
    pub fn column_to_row(&self, index: usize) -> usize {
        if self.tiles.is_empty() {
            return index;
        }
        let (col, row) = (index / self.rows, index % self.rows);
        row * self.columns + col
    }

    // -----------------------------------------------------------------------
    // World space
    // -----------------------------------------------------------------------

    /// World-space centre of a tile. Columns run along +X, rows along +Y and
    /// Z is the vertical axis.
    pub fn world_position(&self, id: TileId) -> Option<Vec3> {
        let pos = self.tile(id)?.pos();
        Some(self.origin + Vec3::new(pos.col as f32, pos.row as f32, 0.0) * self.tile_size)
    }

    /// The tile whose cell contains the planar projection of `world`.
    pub fn tile_at_world(&self, world: Vec3) -> Option<TileId> {
        let rel = (world - self.origin) / self.tile_size;
        let (row, col) = (rel.y.round(), rel.x.round());
        if !row.is_finite() || !col.is_finite() {
            return None;
        }
        self.id_at(Coord::new(row as i32, col as i32))
    }
}
