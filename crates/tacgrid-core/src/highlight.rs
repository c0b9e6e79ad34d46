//! Range-limited reachability highlighting.
//!
//! The reachable region is a cross-shaped *band* around the source rather
//! than a flood fill:
//!
//! - the **row band** spans `depth` rows either side of the source and
//!   `row_range` columns either side of it;
//! - the **column band** spans `depth` columns either side of the source and
//!   `column_range` rows either side of it.
//!
//! Both bands are clipped to the lattice. Traversability is ignored here; the
//! path finder filters blocked tiles later.

use crate::geom::{Coord, Range};
use crate::grid::TileGrid;
use crate::tile::TileId;

/// How far a unit may move along each axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reach {
    /// Steps along a row (left/right).
    pub row_range: u32,
    /// Steps along a column (up/down).
    pub column_range: u32,
    /// Half-width of each band in the perpendicular axis.
    pub depth: u32,
}

impl Reach {
    /// Same range along both axes.
    pub const fn uniform(range: u32, depth: u32) -> Self {
        Self {
            row_range: range,
            column_range: range,
            depth,
        }
    }

    /// Whether `pos` falls inside the band centred on `source`.
    pub fn covers(&self, source: Coord, pos: Coord) -> bool {
        if self.row_range == 0 && self.column_range == 0 {
            return false;
        }
        let d = pos - source;
        let (dr, dc) = (d.row.unsigned_abs(), d.col.unsigned_abs());
        (dr <= self.depth && dc <= self.row_range) || (dc <= self.depth && dr <= self.column_range)
    }
}

impl Default for Reach {
    fn default() -> Self {
        Self {
            row_range: 5,
            column_range: 3,
            depth: 2,
        }
    }
}

impl TileGrid {
    /// Highlight every tile within `movement_range` steps of `source` along
    /// the band pattern, `depth` layers wide. Returns the number of tiles
    /// highlighted.
    pub fn highlight_reachable(
        &mut self,
        source: TileId,
        movement_range: u32,
        depth: u32,
    ) -> usize {
        self.highlight_band(source, Reach::uniform(movement_range, depth))
    }

    /// Replace the current highlight with the band described by `reach`.
    /// Returns the number of tiles highlighted.
    pub fn highlight_band(&mut self, source: TileId, reach: Reach) -> usize {
        self.clear_highlighted();

        let Some(origin) = self.tile(source).map(|t| t.pos()) else {
            log::warn!("highlight requested for unknown tile {source}");
            return 0;
        };
        if reach.row_range == 0 && reach.column_range == 0 {
            return 0;
        }

        let extent = self.rows().max(self.columns());
        let depth = clamp_span(reach.depth, extent);
        let bounds = self.bounds();

        // Row band: walk row-major indices directly.
        let row_range = clamp_span(reach.row_range, extent);
        let rows = bounds.intersect(Range::around(origin, depth, row_range));
        for pos in rows {
            if let Some(id) = self.id_at(pos) {
                self.mark(id);
            }
        }

        // Column band: walk column-major indices and map them back.
        let column_range = clamp_span(reach.column_range, extent);
        let cols = bounds.intersect(Range::around(origin, column_range, depth));
        for col in cols.min.col..cols.max.col {
            let base = col as usize * self.rows();
            for row in cols.min.row..cols.max.row {
                let id = TileId(self.column_to_row(base + row as usize));
                self.mark(id);
            }
        }

        log::debug!(
            "highlighted {} tiles around {} ({:?})",
            self.marked.len(),
            origin,
            reach
        );
        self.marked.len()
    }

    fn mark(&mut self, id: TileId) {
        if let Some(tile) = self.tile_mut(id) {
            if !tile.highlighted {
                tile.highlighted = true;
                self.marked.push(id);
            }
        }
    }

    /// Reset every tile the last highlight marked. Calling it with nothing
    /// highlighted does nothing.
    pub fn clear_highlighted(&mut self) {
        let marked = std::mem::take(&mut self.marked);
        for id in marked {
            if let Some(tile) = self.tile_mut(id) {
                tile.highlighted = false;
                tile.on_path = false;
            }
        }
    }

    /// Tiles marked by the last highlight, in marking order.
    #[inline]
    pub fn highlighted(&self) -> &[TileId] {
        &self.marked
    }

    /// Whether `id` is part of the current highlight.
    #[inline]
    pub fn is_highlighted(&self, id: TileId) -> bool {
        self.tile(id).is_some_and(|t| t.is_highlighted())
    }
}

// Spans beyond the lattice extent clip to the same region.
fn clamp_span(v: u32, extent: usize) -> i32 {
    (v as usize).min(extent) as i32
}
