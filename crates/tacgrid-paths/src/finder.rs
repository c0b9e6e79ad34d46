use std::collections::BinaryHeap;

use tacgrid_core::{Coord, TileGrid, TileId};

use crate::traits::{Heuristic, Octile};

// ---------------------------------------------------------------------------
// Open-set entry
// ---------------------------------------------------------------------------

/// Snapshot of a tile's ranking at the time it was pushed on the open heap.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub(crate) struct NodeRef {
    pub(crate) id: TileId,
    pub(crate) f: i32,
    pub(crate) h: i32,
    pub(crate) pos: Coord,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops lowest f, then lowest h,
        // then the lowest row and column.
        other
            .f
            .cmp(&self.f)
            .then(other.h.cmp(&self.h))
            .then(other.pos.cmp(&self.pos))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// PathFinder
// ---------------------------------------------------------------------------

/// Best-first (A*) search over the highlighted, traversable tiles of a
/// [`TileGrid`].
///
/// The finder owns the open/closed scratch sets and reuses them between
/// queries; they are cleared at the start of every search and never carry
/// information from one query to the next.
pub struct PathFinder<H = Octile> {
    pub(crate) heuristic: H,
    pub(crate) max_expansions: Option<usize>,
    pub(crate) open: BinaryHeap<NodeRef>,
    pub(crate) in_open: Vec<bool>,
    pub(crate) closed: Vec<bool>,
    pub(crate) visited: Vec<bool>,
    pub(crate) nbuf: Vec<TileId>,
    pub(crate) expanded: usize,
}

impl Default for PathFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl PathFinder {
    /// A finder using the octile heuristic.
    pub fn new() -> Self {
        Self::with_heuristic(Octile)
    }
}

impl<H: Heuristic> PathFinder<H> {
    /// A finder using a custom heuristic.
    pub fn with_heuristic(heuristic: H) -> Self {
        Self {
            heuristic,
            max_expansions: None,
            open: BinaryHeap::new(),
            in_open: Vec::new(),
            closed: Vec::new(),
            visited: Vec::new(),
            nbuf: Vec::with_capacity(4),
            expanded: 0,
        }
    }

    /// Give up (returning an empty path) after closing `limit` tiles.
    pub fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }

    /// Number of tiles closed by the last query.
    #[inline]
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Reset the per-query state: scratch sets sized for `grid`, and the
    /// search fields and path marks of every tile.
    pub(crate) fn reset(&mut self, grid: &mut TileGrid) {
        let len = grid.len();
        self.open.clear();
        for set in [&mut self.in_open, &mut self.closed, &mut self.visited] {
            set.clear();
            set.resize(len, false);
        }
        self.expanded = 0;

        for tile in grid.tiles_mut() {
            tile.reset_search();
            tile.on_path = false;
        }
    }
}
