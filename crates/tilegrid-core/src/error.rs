//! Error type for tile-grid operations.

use std::fmt;

/// Errors returned by [`TileGrid`](crate::TileGrid) operations and atlas
/// loaders.
///
/// Every variant is a programmer or content error (bad resource path, bad
/// coordinates, corrupt map data) reported synchronously to the caller;
/// none are retried or recovered internally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileGridError {
    /// The atlas resource could not be loaded or decoded.
    AtlasLoad(String),
    /// The atlas yielded no inspectable tile bitmap at construction.
    AtlasEmpty,
    /// The operation requires a sized grid (`set_size` has not succeeded).
    NotSized,
    /// `set_size` was called with dimensions outside `1..=2048`.
    InvalidSize { width: i32, height: i32 },
    /// A cell coordinate is outside the current grid.
    OutOfBounds { col: i32, row: i32 },
    /// A tile reference outside the storable range was written.
    InvalidTileRef(i32),
    /// A stored cell resolved to an atlas index past the atlas's tile
    /// count, detected at draw time.
    InvalidTileIndex { index: usize, count: usize },
}

impl fmt::Display for TileGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TileGridError::AtlasLoad(msg) => write!(f, "error loading tile atlas: {msg}"),
            TileGridError::AtlasEmpty => write!(f, "tile atlas contains no tiles"),
            TileGridError::NotSized => write!(f, "grid size not set"),
            TileGridError::InvalidSize { width, height } => {
                write!(f, "invalid grid size {width}x{height}")
            }
            TileGridError::OutOfBounds { col, row } => {
                write!(f, "cell ({col}, {row}) is out of bounds")
            }
            TileGridError::InvalidTileRef(v) => write!(f, "invalid tile reference {v}"),
            TileGridError::InvalidTileIndex { index, count } => {
                write!(f, "tile index {index} out of range for atlas of {count} tiles")
            }
        }
    }
}

impl std::error::Error for TileGridError {}
