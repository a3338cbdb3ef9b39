//! Tile atlas support.
//!
//! The [`TileAtlas`] trait is the seam between the grid and whatever
//! produced its tiles: an ordered collection of same-sized bitmaps,
//! addressable by a zero-based index.

use crate::Bitmap;

/// An ordered collection of uniform-sized tile bitmaps.
///
/// Indices are zero-based and dense: every index in `0..len()` yields a
/// bitmap, and every bitmap has the pixel dimensions reported by
/// [`tile_size`](TileAtlas::tile_size).
///
/// Note that [`TileGrid`](crate::TileGrid) cell values use a *one-based*
/// encoding on top of this (0 = empty cell, `v` = atlas tile `v - 1`).
pub trait TileAtlas {
    /// Number of tiles in the atlas.
    fn len(&self) -> usize;

    /// Borrow the tile bitmap at `index`, or `None` past the end.
    fn bitmap(&self, index: usize) -> Option<&Bitmap>;

    /// Pixel size of one tile as `(width, height)`.
    fn tile_size(&self) -> (u32, u32);

    /// Whether the atlas holds no tiles.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
