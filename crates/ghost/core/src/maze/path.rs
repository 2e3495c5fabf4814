use super::{Heading, MazeOracle, TilePos};

/// Shortest-path search over a maze view.
pub trait PathOracle: Send + Sync {
    /// Ordered tiles from `from` to `to`, both inclusive.
    ///
    /// Returns an empty path when `to` is unreachable and `[from]` when the
    /// two coincide. Edges are whatever `maze.allows_step` permits, so a
    /// [`NoReversal`](super::NoReversal) view constrains the first step.
    fn find_path(&self, maze: &dyn MazeOracle, from: TilePos, to: TilePos) -> Vec<TilePos>;
}

/// Four-neighbour A* with a Manhattan heuristic.
///
/// Ties between open nodes are broken by `(f, h, y, x, insertion order)`, so
/// the same query over the same board always yields the same path.
#[derive(Clone, Copy, Debug, Default)]
pub struct AStarPathfinder;

impl AStarPathfinder {
    pub fn new() -> Self {
        Self
    }
}

impl PathOracle for AStarPathfinder {
    fn find_path(&self, maze: &dyn MazeOracle, from: TilePos, to: TilePos) -> Vec<TilePos> {
        let dimensions = maze.dimensions();
        if !dimensions.contains(from) || !dimensions.contains(to) {
            return Vec::new();
        }
        if from == to {
            return vec![from];
        }
        if !maze.is_passable(to) {
            return Vec::new();
        }

        let width = dimensions.width as usize;
        let index_of = |pos: TilePos| pos.y as usize * width + pos.x as usize;
        let node_count = width * dimensions.height as usize;

        let mut closed = vec![false; node_count];
        let mut best_g = vec![u32::MAX; node_count];
        let mut parent = vec![None::<usize>; node_count];
        let mut open = Vec::new();
        let mut next_insertion = 0u64;

        let start_h = from.manhattan(to);
        open.push(OpenNode {
            coord: from,
            h_cost: start_h,
            f_cost: start_h,
            insertion_order: next_insertion,
        });
        next_insertion += 1;
        best_g[index_of(from)] = 0;

        while !open.is_empty() {
            let best_index = pick_best_open_node_index(&open);
            let current = open.swap_remove(best_index);
            let current_index = index_of(current.coord);
            if closed[current_index] {
                continue;
            }
            closed[current_index] = true;

            if current.coord == to {
                return reconstruct_path(&parent, width, index_of(from), current_index);
            }

            let current_g = best_g[current_index];
            for heading in Heading::ALL {
                if !maze.allows_step(current.coord, heading) {
                    continue;
                }
                let Some(neighbor) = current.coord.step(heading) else {
                    continue;
                };
                let neighbor_index = index_of(neighbor);
                if closed[neighbor_index] {
                    continue;
                }

                let tentative_g = current_g.saturating_add(1);
                if tentative_g >= best_g[neighbor_index] {
                    continue;
                }

                best_g[neighbor_index] = tentative_g;
                parent[neighbor_index] = Some(current_index);
                let h_cost = neighbor.manhattan(to);
                open.push(OpenNode {
                    coord: neighbor,
                    h_cost,
                    f_cost: tentative_g.saturating_add(h_cost),
                    insertion_order: next_insertion,
                });
                next_insertion += 1;
            }
        }

        Vec::new()
    }
}

#[derive(Debug, Clone, Copy)]
struct OpenNode {
    coord: TilePos,
    h_cost: u32,
    f_cost: u32,
    insertion_order: u64,
}

fn pick_best_open_node_index(open: &[OpenNode]) -> usize {
    let mut best_index = 0usize;
    for index in 1..open.len() {
        if open_node_order_key(open[index]) < open_node_order_key(open[best_index]) {
            best_index = index;
        }
    }
    best_index
}

fn open_node_order_key(node: OpenNode) -> (u32, u32, u32, u32, u64) {
    (
        node.f_cost,
        node.h_cost,
        node.coord.y,
        node.coord.x,
        node.insertion_order,
    )
}

fn reconstruct_path(
    parent: &[Option<usize>],
    width: usize,
    start_index: usize,
    goal_index: usize,
) -> Vec<TilePos> {
    let mut cursor = goal_index;
    let mut indices = vec![cursor];

    while cursor != start_index {
        let Some(next) = parent.get(cursor).copied().flatten() else {
            return Vec::new();
        };
        cursor = next;
        indices.push(cursor);
    }
    indices.reverse();
    indices
        .into_iter()
        .map(|index| TilePos::new((index % width) as u32, (index / width) as u32))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::{NoReversal, TileGrid, TileKind};

    #[test]
    fn path_never_steps_onto_walls() {
        let mut grid = TileGrid::open(7, 5);
        for y in 0..4 {
            grid.set(TilePos::new(3, y), TileKind::Wall);
        }
        let path = AStarPathfinder.find_path(&grid, TilePos::new(1, 2), TilePos::new(5, 2));

        assert_eq!(path.first(), Some(&TilePos::new(1, 2)));
        assert_eq!(path.last(), Some(&TilePos::new(5, 2)));
        for tile in &path {
            assert!(grid.is_passable(*tile), "path stepped onto {tile}");
        }
        for pair in path.windows(2) {
            assert_eq!(pair[0].manhattan(pair[1]), 1);
        }
    }

    #[test]
    fn tie_break_is_deterministic_on_symmetric_map() {
        let grid = TileGrid::open(5, 5).with_tile(TilePos::new(2, 2), TileKind::Wall);
        let first = AStarPathfinder.find_path(&grid, TilePos::new(0, 2), TilePos::new(4, 2));
        let second = AStarPathfinder.find_path(&grid, TilePos::new(0, 2), TilePos::new(4, 2));
        assert_eq!(first, second);
        assert_eq!(first.len(), 7);
    }

    #[test]
    fn same_tile_and_unreachable_queries() {
        let grid = TileGrid::from_rows(&["#####", "#.#.#", "#####"]).expect("grid");
        let here = TilePos::new(1, 1);
        assert_eq!(AStarPathfinder.find_path(&grid, here, here), vec![here]);
        assert!(AStarPathfinder.find_path(&grid, here, TilePos::new(3, 1)).is_empty());
        assert!(AStarPathfinder.find_path(&grid, here, TilePos::new(0, 0)).is_empty());
    }

    #[test]
    fn doors_block_the_search() {
        let grid = TileGrid::from_rows(&["#####", "#.-.#", "#####"]).expect("grid");
        assert!(
            AStarPathfinder
                .find_path(&grid, TilePos::new(1, 1), TilePos::new(3, 1))
                .is_empty()
        );
    }

    #[test]
    fn no_reversal_view_forces_the_long_way_round() {
        // A ring: the direct route back west is forbidden, so the path loops.
        let grid = TileGrid::from_rows(&["#####", "#...#", "#.#.#", "#...#", "#####"])
            .expect("grid");
        let at = TilePos::new(2, 1);
        let view = NoReversal::new(&grid, Heading::Right, at);
        let path = AStarPathfinder.find_path(&view, at, TilePos::new(1, 1));

        assert_eq!(path.get(1), Some(&TilePos::new(3, 1)));
        assert_eq!(path.len(), 8);
    }
}
