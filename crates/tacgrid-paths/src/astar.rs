use tacgrid_core::{Coord, TileGrid, TileId};

use crate::finder::{NodeRef, PathFinder};
use crate::path::Path;
use crate::traits::Heuristic;
use crate::{DIAGONAL_COST, ORTHOGONAL_COST};

#[derive(Copy, Clone)]
enum Adjacency {
    Immediate,
    Diagonal,
}

impl<H: Heuristic> PathFinder<H> {
    /// Find the lowest-cost route from `source` to `destination` through
    /// highlighted, traversable tiles.
    ///
    /// Returns an empty path when the destination is unknown, blocked, not
    /// highlighted, equal to the source, or not connected to it. On success
    /// the source and every step are flagged `on_path`.
    pub fn find_path(&mut self, grid: &mut TileGrid, source: TileId, destination: TileId) -> Path {
        self.reset(grid);

        let (Some(src), Some(dst)) = (grid.tile(source), grid.tile(destination)) else {
            log::warn!("path requested between unknown tiles {source} -> {destination}");
            return Path::default();
        };
        let (src_pos, dst_pos) = (src.pos(), dst.pos());
        if source == destination {
            return Path::default();
        }
        if !dst.traversable || !dst.is_highlighted() {
            log::debug!("destination {dst_pos} is blocked or outside the highlight");
            return Path::default();
        }

        let h = self.heuristic.estimate(src_pos, dst_pos);
        if let Some(tile) = grid.tile_mut(source) {
            tile.g_cost = 0;
            tile.set_h_cost(h);
        }
        self.push(source, h, h, src_pos);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = self.open.pop() else {
                break 'search false;
            };
            let ci = current.id;

            // Skip entries superseded by a cheaper re-push.
            if self.closed[ci.0] || !self.in_open[ci.0] {
                continue;
            }
            let Some(tile) = grid.tile(ci) else {
                continue;
            };
            if tile.f_cost != current.f {
                continue;
            }
            self.in_open[ci.0] = false;

            if ci == destination {
                break 'search true;
            }

            self.closed[ci.0] = true;
            self.expanded += 1;
            if self.max_expansions.is_some_and(|limit| self.expanded >= limit) {
                log::debug!("search from {src_pos} gave up after {} expansions", self.expanded);
                break 'search false;
            }

            let current_g = tile.g_cost;
            for adjacency in [Adjacency::Immediate, Adjacency::Diagonal] {
                nbuf.clear();
                if let Some(tile) = grid.tile(ci) {
                    nbuf.extend_from_slice(match adjacency {
                        Adjacency::Immediate => tile.immediate_neighbors(),
                        Adjacency::Diagonal => tile.diagonal_neighbors(),
                    });
                }
                let step = match adjacency {
                    Adjacency::Immediate => ORTHOGONAL_COST,
                    Adjacency::Diagonal => DIAGONAL_COST,
                };
                for &ni in nbuf.iter() {
                    self.relax(grid, ci, current_g + step, ni, dst_pos);
                }
            }
        };

        self.nbuf = nbuf;

        if !found {
            log::debug!(
                "no path {src_pos} -> {dst_pos} ({} tiles expanded)",
                self.expanded
            );
            return Path::default();
        }

        let path = self.reconstruct(grid, source, destination);
        log::debug!(
            "path {src_pos} -> {dst_pos}: {} steps, cost {}, {} tiles expanded",
            path.len(),
            path.cost(),
            self.expanded
        );
        path
    }

    fn relax(
        &mut self,
        grid: &mut TileGrid,
        from: TileId,
        tentative: i32,
        to: TileId,
        goal: Coord,
    ) {
        if self.closed[to.0] {
            return;
        }
        let Some(tile) = grid.tile_mut(to) else {
            return;
        };
        if !tile.traversable || !tile.is_highlighted() {
            return;
        }

        let improved = tentative < tile.g_cost;
        if improved {
            tile.g_cost = tentative;
            tile.parent = Some(from);
        }
        let h = self.heuristic.estimate(tile.pos(), goal);
        tile.set_h_cost(h);

        if improved {
            let (f, pos) = (tile.f_cost, tile.pos());
            self.push(to, f, h, pos);
        }
    }

    fn push(&mut self, id: TileId, f: i32, h: i32, pos: Coord) {
        self.in_open[id.0] = true;
        self.open.push(NodeRef { id, f, h, pos });
    }

    /// Walk the parent links back from `destination`, flag the route and
    /// return it in travel order.
    fn reconstruct(&mut self, grid: &mut TileGrid, source: TileId, destination: TileId) -> Path {
        let mut ids = Vec::new();
        let mut cur = destination;
        while cur != source {
            if self.visited[cur.0] {
                log::warn!("parent cycle at {cur} while rebuilding path");
                break;
            }
            self.visited[cur.0] = true;
            ids.push(cur);
            match grid.tile(cur).and_then(|t| t.parent) {
                Some(parent) => cur = parent,
                None => break,
            }
        }
        ids.reverse();

        let cost = grid.tile(destination).map_or(0, |t| t.g_cost);
        let mut steps = Vec::with_capacity(ids.len());
        for id in std::iter::once(source).chain(ids.iter().copied()) {
            if let Some(tile) = grid.tile_mut(id) {
                tile.on_path = true;
                if id != source {
                    steps.push(tile.pos());
                }
            }
        }
        Path::new(steps, cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::WeightedManhattan;
    use tacgrid_core::{GridConfig, UNSET_COST};

    fn open_grid(rows: u32, columns: u32, obstacles: &[(i32, i32)]) -> TileGrid {
        let cfg = GridConfig::new(rows, columns)
            .with_obstacles(obstacles.iter().map(|&(r, c)| Coord::new(r, c)));
        TileGrid::new(&cfg).unwrap()
    }

    fn id(grid: &TileGrid, row: i32, col: i32) -> TileId {
        grid.id_at(Coord::new(row, col)).unwrap()
    }

    fn step_cost(a: Coord, b: Coord) -> i32 {
        if a.is_diagonal_to(b) { DIAGONAL_COST } else { ORTHOGONAL_COST }
    }

    /// Consecutive steps are adjacent and the reported cost matches them.
    fn assert_well_formed(path: &Path, source: Coord, destination: Coord) {
        assert!(!path.is_empty());
        assert_eq!(path.destination(), Some(destination));
        let mut prev = source;
        let mut total = 0;
        for &step in path {
            assert!(prev.is_adjacent(step), "{prev} -> {step} is not a single move");
            total += step_cost(prev, step);
            prev = step;
        }
        assert_eq!(total, path.cost());
    }

    #[test]
    fn straight_line_in_open_grid() {
        let mut grid = open_grid(5, 5, &[]);
        let (src, dst) = (id(&grid, 2, 2), id(&grid, 2, 4));
        grid.highlight_reachable(src, 3, 3);

        let path = PathFinder::new().find_path(&mut grid, src, dst);
        assert_eq!(path.steps(), &[Coord::new(2, 3), Coord::new(2, 4)]);
        assert_eq!(path.cost(), 20);
    }

    #[test]
    fn routes_diagonally_around_a_blocked_tile() {
        let mut grid = open_grid(5, 5, &[(2, 3)]);
        let (src, dst) = (id(&grid, 2, 2), id(&grid, 2, 4));
        grid.highlight_reachable(src, 3, 3);

        let path = PathFinder::new().find_path(&mut grid, src, dst);
        // Both moves are diagonal; the lower row wins the tie with (3, 3).
        assert_eq!(path.steps(), &[Coord::new(1, 3), Coord::new(2, 4)]);
        assert_eq!(path.cost(), 2 * DIAGONAL_COST);
        assert_well_formed(&path, Coord::new(2, 2), Coord::new(2, 4));
    }

    #[test]
    fn marks_route_tiles() {
        let mut grid = open_grid(5, 5, &[]);
        let (src, dst) = (id(&grid, 0, 0), id(&grid, 3, 3));
        grid.highlight_reachable(src, 4, 4);

        let path = PathFinder::new().find_path(&mut grid, src, dst);
        assert_eq!(path.len(), 3);
        assert!(grid.tile(src).unwrap().on_path);
        let marked: Vec<_> = grid
            .tiles()
            .iter()
            .filter(|t| t.on_path)
            .map(|t| t.pos())
            .collect();
        assert_eq!(marked.len(), 4);
        for step in &path {
            assert!(marked.contains(step));
        }
    }

    #[test]
    fn detours_through_a_wall_gap() {
        // Column 3 is a wall except at row 5.
        let wall: Vec<_> = (0..5).map(|r| (r, 3)).collect();
        let mut grid = open_grid(6, 7, &wall);
        let (src, dst) = (id(&grid, 0, 0), id(&grid, 0, 6));
        grid.highlight_reachable(src, 10, 10);

        let path = PathFinder::new().find_path(&mut grid, src, dst);
        assert_well_formed(&path, Coord::new(0, 0), Coord::new(0, 6));
        assert!(path.steps().contains(&Coord::new(5, 3)));
        // 3 diagonal + 2 straight down to the gap, then the mirror image back up.
        assert_eq!(path.cost(), 2 * (3 * DIAGONAL_COST + 2 * ORTHOGONAL_COST));
    }

    #[test]
    fn blocked_destination_gives_empty_path() {
        let mut grid = open_grid(5, 5, &[(2, 4)]);
        let (src, dst) = (id(&grid, 2, 2), id(&grid, 2, 4));
        grid.highlight_reachable(src, 3, 3);
        assert!(PathFinder::new().find_path(&mut grid, src, dst).is_empty());
    }

    #[test]
    fn unhighlighted_destination_gives_empty_path() {
        let mut grid = open_grid(9, 9, &[]);
        let (src, dst) = (id(&grid, 4, 4), id(&grid, 0, 0));
        grid.highlight_reachable(src, 2, 1);
        assert!(!grid.is_highlighted(dst));
        assert!(PathFinder::new().find_path(&mut grid, src, dst).is_empty());
    }

    #[test]
    fn disconnected_destination_gives_empty_path() {
        // Ring of obstacles around (0, 4).
        let mut grid = open_grid(5, 6, &[(0, 3), (1, 3), (1, 4), (1, 5), (0, 5)]);
        let (src, dst) = (id(&grid, 3, 1), id(&grid, 0, 4));
        grid.highlight_reachable(src, 6, 6);
        let mut finder = PathFinder::new();
        assert!(finder.find_path(&mut grid, src, dst).is_empty());
        assert!(finder.expanded() > 0);
        assert!(grid.tiles().iter().all(|t| !t.on_path));
    }

    #[test]
    fn highlight_limits_the_route() {
        // Direct route is blocked; the detour leaves the highlighted band.
        let mut grid = open_grid(7, 7, &[(3, 4), (2, 4), (4, 4)]);
        let (src, dst) = (id(&grid, 3, 3), id(&grid, 3, 5));
        grid.highlight_reachable(src, 2, 0);
        assert!(PathFinder::new().find_path(&mut grid, src, dst).is_empty());

        grid.highlight_reachable(src, 2, 2);
        let path = PathFinder::new().find_path(&mut grid, src, dst);
        assert_well_formed(&path, Coord::new(3, 3), Coord::new(3, 5));
    }

    #[test]
    fn failed_search_does_not_poison_the_next_one() {
        let mut grid = open_grid(5, 5, &[(2, 3)]);
        let src = id(&grid, 2, 2);
        let mut finder = PathFinder::new();
        grid.highlight_reachable(src, 3, 3);

        let (blocked, corner) = (id(&grid, 2, 3), id(&grid, 4, 4));
        assert!(finder.find_path(&mut grid, src, blocked).is_empty());
        let path = finder.find_path(&mut grid, src, corner);
        assert_eq!(path.steps(), &[Coord::new(3, 3), Coord::new(4, 4)]);
        assert_eq!(path.cost(), 28);

        // Tiles off the new route carry no stale parents from the failed query.
        for t in grid.tiles() {
            if t.g_cost == UNSET_COST {
                assert!(t.parent.is_none());
            }
        }
    }

    #[test]
    fn repeated_queries_are_identical() {
        let mut grid = open_grid(8, 8, &[(3, 3), (3, 4), (4, 3)]);
        let (src, dst) = (id(&grid, 1, 1), id(&grid, 6, 6));
        grid.highlight_reachable(src, 8, 8);
        let mut finder = PathFinder::new();
        let a = finder.find_path(&mut grid, src, dst);
        let b = finder.find_path(&mut grid, src, dst);
        assert_well_formed(&a, Coord::new(1, 1), Coord::new(6, 6));
        assert_eq!(a, b);
    }

    #[test]
    fn source_equals_destination() {
        let mut grid = open_grid(3, 3, &[]);
        let src = id(&grid, 1, 1);
        grid.highlight_reachable(src, 1, 1);
        assert!(PathFinder::new().find_path(&mut grid, src, src).is_empty());
    }

    #[test]
    fn unknown_tiles_are_ignored() {
        let mut grid = open_grid(3, 3, &[]);
        let src = id(&grid, 1, 1);
        grid.highlight_reachable(src, 1, 1);
        let mut finder = PathFinder::new();
        assert!(finder.find_path(&mut grid, src, TileId(42)).is_empty());
        assert!(finder.find_path(&mut grid, TileId(42), src).is_empty());

        let mut empty = open_grid(0, 0, &[]);
        assert!(finder.find_path(&mut empty, TileId(0), TileId(1)).is_empty());
    }

    #[test]
    fn expansion_cap_aborts_long_searches() {
        let mut grid = open_grid(20, 20, &[]);
        let (src, dst) = (id(&grid, 0, 0), id(&grid, 19, 19));
        grid.highlight_reachable(src, 20, 20);
        let mut capped = PathFinder::new().with_max_expansions(3);
        assert!(capped.find_path(&mut grid, src, dst).is_empty());
        assert_eq!(capped.expanded(), 3);

        let path = PathFinder::new().find_path(&mut grid, src, dst);
        assert_eq!(path.len(), 19);
        assert_eq!(path.cost(), 19 * DIAGONAL_COST);
    }

    #[test]
    fn inadmissible_heuristic_still_finds_a_route() {
        let mut grid = open_grid(6, 6, &[(2, 2), (2, 3), (3, 2)]);
        let (src, dst) = (id(&grid, 0, 0), id(&grid, 5, 5));
        grid.highlight_reachable(src, 6, 6);
        let path = PathFinder::with_heuristic(WeightedManhattan).find_path(&mut grid, src, dst);
        assert_well_formed(&path, Coord::new(0, 0), Coord::new(5, 5));
    }

    #[test]
    fn closure_heuristic() {
        let mut grid = open_grid(4, 4, &[]);
        let (src, dst) = (id(&grid, 0, 0), id(&grid, 0, 3));
        grid.highlight_reachable(src, 3, 0);
        let mut finder = PathFinder::with_heuristic(|_: Coord, _: Coord| 0);
        let path = finder.find_path(&mut grid, src, dst);
        assert_eq!(path.cost(), 30);
    }
}
