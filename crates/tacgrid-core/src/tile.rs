//! The [`Tile`] node and its [`TileId`] handle.

use std::fmt;

use crate::geom::Coord;

/// Sentinel for a path cost that has not been assigned in the current search.
pub const UNSET_COST: i32 = i32::MAX;

/// Stable handle of a tile: its flat row-major index inside the owning
/// [`TileGrid`](crate::TileGrid).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileId(pub usize);

impl TileId {
    /// The flat index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single cell of the grid graph.
///
/// Neighbour lists hold ids into the same grid and are fixed once the grid
/// is built. The cost fields and `parent` belong to the most recent search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    pos: Coord,
    pub traversable: bool,
    pub(crate) highlighted: bool,
    pub on_path: bool,
    pub g_cost: i32,
    pub h_cost: i32,
    pub f_cost: i32,
    pub parent: Option<TileId>,
    pub(crate) immediate: Vec<TileId>,
    pub(crate) diagonal: Vec<TileId>,
}

impl Tile {
    pub(crate) fn new(pos: Coord, traversable: bool) -> Self {
        Self {
            pos,
            traversable,
            highlighted: false,
            on_path: false,
            g_cost: UNSET_COST,
            h_cost: 0,
            f_cost: UNSET_COST,
            parent: None,
            immediate: Vec::with_capacity(4),
            diagonal: Vec::with_capacity(4),
        }
    }

    /// Lattice position.
    #[inline]
    pub fn pos(&self) -> Coord {
        self.pos
    }

    /// Whether the tile belongs to the current reachable set.
    #[inline]
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    /// Orthogonally adjacent tiles (up to 4).
    #[inline]
    pub fn immediate_neighbors(&self) -> &[TileId] {
        &self.immediate
    }

    /// Diagonally adjacent tiles (up to 4).
    #[inline]
    pub fn diagonal_neighbors(&self) -> &[TileId] {
        &self.diagonal
    }

    /// Forget everything the previous search wrote into this tile.
    #[inline]
    pub fn reset_search(&mut self) {
        self.g_cost = UNSET_COST;
        self.h_cost = 0;
        self.f_cost = UNSET_COST;
        self.parent = None;
    }

    /// Store a new heuristic and refresh `f_cost`.
    #[inline]
    pub fn set_h_cost(&mut self, h: i32) {
        self.h_cost = h;
        self.f_cost = self.g_cost.saturating_add(h);
    }
}
