use super::{MazeDimensions, MazeOracle, TileKind, TilePos};
use crate::error::{EngineError, ErrorSeverity};

/// Errors raised while building a [`TileGrid`] from textual rows.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("maze has no rows")]
    Empty,

    #[error("row {row} has {found} tiles, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown tile glyph {glyph:?} at {pos}")]
    UnknownGlyph { glyph: char, pos: TilePos },
}

impl EngineError for GridError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            GridError::Empty => "GRID_EMPTY",
            GridError::Ragged { .. } => "GRID_RAGGED",
            GridError::UnknownGlyph { .. } => "GRID_UNKNOWN_GLYPH",
        }
    }
}

/// Row-major board backed by a flat tile vector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileGrid {
    dimensions: MazeDimensions,
    tiles: Vec<TileKind>,
}

impl TileGrid {
    pub const WALL_GLYPH: char = '#';
    pub const DOOR_GLYPH: char = '-';

    /// Board of the given size with no walls at all.
    pub fn open(width: u32, height: u32) -> Self {
        Self {
            dimensions: MazeDimensions::new(width, height),
            tiles: vec![TileKind::Open; (width * height) as usize],
        }
    }

    /// Parses ASCII rows: `#` wall, `-` door, `.` or space open.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        let first = rows.first().ok_or(GridError::Empty)?;
        let expected = first.as_ref().chars().count();
        if expected == 0 {
            return Err(GridError::Empty);
        }

        let mut tiles = Vec::with_capacity(expected * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let found = row.chars().count();
            if found != expected {
                return Err(GridError::Ragged {
                    row: y,
                    expected,
                    found,
                });
            }
            for (x, glyph) in row.chars().enumerate() {
                let kind = match glyph {
                    Self::WALL_GLYPH => TileKind::Wall,
                    Self::DOOR_GLYPH => TileKind::Door,
                    '.' | ' ' => TileKind::Open,
                    other => {
                        return Err(GridError::UnknownGlyph {
                            glyph: other,
                            pos: TilePos::new(x as u32, y as u32),
                        });
                    }
                };
                tiles.push(kind);
            }
        }

        Ok(Self {
            dimensions: MazeDimensions::new(expected as u32, rows.len() as u32),
            tiles,
        })
    }

    /// Overwrites a single tile. Positions outside the board are ignored.
    pub fn set(&mut self, pos: TilePos, kind: TileKind) {
        if let Some(index) = self.index_of(pos) {
            self.tiles[index] = kind;
        }
    }

    pub fn with_tile(mut self, pos: TilePos, kind: TileKind) -> Self {
        self.set(pos, kind);
        self
    }

    fn index_of(&self, pos: TilePos) -> Option<usize> {
        if !self.dimensions.contains(pos) {
            return None;
        }
        Some(pos.y as usize * self.dimensions.width as usize + pos.x as usize)
    }
}

impl MazeOracle for TileGrid {
    fn dimensions(&self) -> MazeDimensions {
        self.dimensions
    }

    fn tile(&self, pos: TilePos) -> Option<TileKind> {
        self.index_of(pos).map(|index| self.tiles[index])
    }
}
