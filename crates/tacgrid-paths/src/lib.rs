//! Lowest-cost routing over the highlighted tiles of a tactical grid.
//!
//! [`PathFinder::find_path`] runs a best-first (A\*) search from a unit's
//! tile to a destination, moving only through tiles that are both
//! traversable and part of the current reachability highlight. Orthogonal
//! steps cost [`ORTHOGONAL_COST`], diagonal steps [`DIAGONAL_COST`].
//!
//! The finder writes `g`/`h`/`f` costs and parent links into the tiles of the
//! [`TileGrid`](tacgrid_core::TileGrid) and resets them at the start of every
//! query, so one finder can be reused for any number of searches.

mod astar;
mod distance;
mod finder;
mod path;
mod traits;

pub use distance::{chebyshev, manhattan, octile};
pub use finder::PathFinder;
pub use path::Path;
pub use traits::{Heuristic, Octile, WeightedManhattan};

/// Cost of one orthogonal step.
pub const ORTHOGONAL_COST: i32 = 10;

/// Cost of one diagonal step (√2 scaled by 10, rounded).
pub const DIAGONAL_COST: i32 = 14;
