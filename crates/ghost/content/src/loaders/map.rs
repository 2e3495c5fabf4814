//! Maze data loader.
//!
//! Mazes are stored as RON files holding one string per row, using the glyphs
//! understood by [`TileGrid::from_rows`]. Fixed coordinates (pen, tunnel,
//! corners) are not part of the file; [`MazeLoader::check_layout`] verifies a
//! loaded grid against the [`MazeLayout`] it will be driven with.

use std::path::Path;

use anyhow::{Context, bail, ensure};
use ghost_core::{MazeLayout, MazeOracle, TileGrid, TileKind, TilePos};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

const CLASSIC_RON: &str = include_str!("../../data/classic.ron");

/// Maze data structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MazeDataRon {
    rows: Vec<String>,
}

/// Loader for maze grids from RON files.
pub struct MazeLoader;

impl MazeLoader {
    /// Load a maze grid from a RON file.
    pub fn load(path: &Path) -> LoadResult<TileGrid> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("in maze file {}", path.display()))
    }

    /// Parse a maze grid from RON text.
    pub fn parse(content: &str) -> LoadResult<TileGrid> {
        let data: MazeDataRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse maze RON: {}", e))?;
        let grid = TileGrid::from_rows(data.rows.as_slice())?;
        Ok(grid)
    }

    /// The bundled classic maze, matching [`MazeLayout::CLASSIC`].
    pub fn classic() -> LoadResult<TileGrid> {
        Self::parse(CLASSIC_RON).context("in bundled classic maze")
    }

    /// Checks that `grid` can host `layout`: equal size, a door right below
    /// the pen exit, and open spawn, exit and corner tiles.
    pub fn check_layout(grid: &TileGrid, layout: &MazeLayout) -> LoadResult<()> {
        let dimensions = grid.dimensions();
        ensure!(
            dimensions.width == layout.width && dimensions.height == layout.height,
            "maze is {}x{}, layout expects {}x{}",
            dimensions.width,
            dimensions.height,
            layout.width,
            layout.height
        );

        let door = TilePos::new(layout.exit.x, layout.exit.y + 1);
        if grid.tile(door) != Some(TileKind::Door) {
            bail!("expected the pen door at {door}, found {:?}", grid.tile(door));
        }

        let named = layout
            .spawns
            .iter()
            .map(|tile| ("spawn", *tile))
            .chain(layout.corners.iter().map(|tile| ("corner", *tile)))
            .chain([("exit", layout.exit)]);
        for (what, tile) in named {
            ensure!(
                grid.is_passable(tile),
                "{what} tile {tile} is not open ({:?})",
                grid.tile(tile)
            );
        }

        let tunnel = layout.tunnel;
        for col in [tunnel.west_col, tunnel.east_col] {
            let tile = TilePos::new(col, tunnel.row);
            ensure!(grid.is_passable(tile), "tunnel end {tile} is not open");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn bundled_classic_matches_the_fixed_layout() {
        let grid = MazeLoader::classic().expect("classic maze parses");
        MazeLoader::check_layout(&grid, &MazeLayout::CLASSIC).expect("layout fits");
        assert_eq!(grid.tile(TilePos::new(10, 11)), Some(TileKind::Door));
        assert_eq!(grid.tile(TilePos::new(0, 0)), Some(TileKind::Wall));
    }

    #[test]
    fn loads_maze_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("tiny.ron");
        fs::write(&path, r####"(rows: ["###", "#.#", "#-#", "###"])"####).expect("write");

        let grid = MazeLoader::load(&path).expect("load");
        assert_eq!(grid.dimensions().width, 3);
        assert_eq!(grid.dimensions().height, 4);
        assert!(grid.is_passable(TilePos::new(1, 1)));
        assert_eq!(grid.tile(TilePos::new(1, 2)), Some(TileKind::Door));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = MazeLoader::parse(r####"(rows: ["###", "#.", "###"])"####).unwrap_err();
        assert!(err.to_string().contains("row 1"), "{err}");
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("absent.ron");
        let err = MazeLoader::load(&path).unwrap_err();
        assert!(err.to_string().contains("absent.ron"), "{err}");
    }

    #[test]
    fn layout_check_catches_a_walled_corner() {
        let mut grid = MazeLoader::classic().expect("classic maze parses");
        grid.set(TilePos::new(1, 25), TileKind::Wall);
        let err = MazeLoader::check_layout(&grid, &MazeLayout::CLASSIC).unwrap_err();
        assert!(err.to_string().contains("(1, 25)"), "{err}");
    }

    #[test]
    fn layout_check_rejects_other_sizes() {
        let grid = TileGrid::open(10, 10);
        assert!(MazeLoader::check_layout(&grid, &MazeLayout::CLASSIC).is_err());
    }
}
