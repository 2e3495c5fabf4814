mod common;

use common::{CLASSIC_ROWS, classic_grid};
use ghost_core::{Heading, MazeLayout, MazeOracle, TileKind};

const BUNDLED_MAZE: &str = include_str!("../../content/data/classic.ron");

/// Quoted row strings of the bundled RON maze, in file order.
fn bundled_rows() -> Vec<&'static str> {
    BUNDLED_MAZE
        .lines()
        .map(str::trim)
        .filter_map(|line| line.strip_prefix('"'))
        .filter_map(|line| line.split('"').next())
        .collect()
}

#[test]
fn fixture_rows_match_the_bundled_maze_file() {
    assert_eq!(bundled_rows(), CLASSIC_ROWS.to_vec());
}

#[test]
fn fixture_grid_fits_the_classic_layout() {
    let grid = classic_grid();
    let layout = MazeLayout::CLASSIC;
    assert_eq!(grid.tile(layout.exit), Some(TileKind::Open));
    let door = layout.exit.step(Heading::Down).expect("door below the exit");
    assert_eq!(grid.tile(door), Some(TileKind::Door));
    for corner in layout.corners {
        assert!(grid.is_passable(corner), "{corner}");
    }
}
