use super::{Heading, MazeDimensions, MazeOracle, TileKind, TilePos};

/// Board view that forbids turning back from one tile.
///
/// Wraps another oracle and removes the single edge leaving `at` in the
/// reverse of the agent's current heading. Nothing is copied; every other
/// query is forwarded unchanged.
#[derive(Clone, Copy)]
pub struct NoReversal<'a> {
    inner: &'a dyn MazeOracle,
    forbidden: Heading,
    at: TilePos,
}

impl<'a> NoReversal<'a> {
    /// View for an agent at `at` currently travelling along `heading`.
    pub fn new(inner: &'a dyn MazeOracle, heading: Heading, at: TilePos) -> Self {
        Self {
            inner,
            forbidden: heading.reverse(),
            at,
        }
    }

    pub fn forbidden(&self) -> Heading {
        self.forbidden
    }
}

impl MazeOracle for NoReversal<'_> {
    fn dimensions(&self) -> MazeDimensions {
        self.inner.dimensions()
    }

    fn tile(&self, pos: TilePos) -> Option<TileKind> {
        self.inner.tile(pos)
    }

    fn is_passable(&self, pos: TilePos) -> bool {
        self.inner.is_passable(pos)
    }

    fn allows_step(&self, from: TilePos, heading: Heading) -> bool {
        if from == self.at && heading == self.forbidden {
            return false;
        }
        self.inner.allows_step(from, heading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::TileGrid;

    #[test]
    fn removes_only_the_reverse_edge_at_the_anchor() {
        let grid = TileGrid::open(5, 5);
        let at = TilePos::new(2, 2);
        let view = NoReversal::new(&grid, Heading::Right, at);

        assert_eq!(view.forbidden(), Heading::Left);
        assert!(!view.allows_step(at, Heading::Left));
        assert!(view.allows_step(at, Heading::Right));
        assert!(view.allows_step(at, Heading::Up));
        // Other tiles keep every edge.
        assert!(view.allows_step(TilePos::new(3, 2), Heading::Left));
    }
}
