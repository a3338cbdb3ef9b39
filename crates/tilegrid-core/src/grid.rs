//! The [`TileGrid`] type — a scrollable grid of tile references.
//!
//! A `TileGrid` owns a [`TileAtlas`] and a rectangular, row-major buffer of
//! cell values. Cell values are one-based tile references: 0 means "empty,
//! draw nothing" and a nonzero value `v` names atlas tile `v - 1`. Public
//! cell coordinates are one-based as well, matching the reference
//! convention throughout.
//!
//! The grid starts *unsized* (no cell buffer). A successful
//! [`set_size`](TileGrid::set_size) allocates a zero-filled buffer; a
//! failing one leaves the grid unsized again, whatever its previous state.

use log::{debug, warn};

use crate::atlas::TileAtlas;
use crate::error::TileGridError;
use crate::surface::DrawTarget;

/// Maximum grid dimension, in tiles, per axis.
pub const MAX_GRID_DIM: i32 = 2048;

/// A 2D grid of tile references rendered from a [`TileAtlas`].
#[derive(Debug)]
pub struct TileGrid<A: TileAtlas> {
    atlas: A,

    width: i32,
    height: i32,

    tile_width: i32,
    tile_height: i32,

    cells: Option<Vec<u16>>,
}

impl<A: TileAtlas> TileGrid<A> {
    /// Create an unsized grid that takes ownership of `atlas`.
    ///
    /// The per-tile pixel size is fixed here by inspecting the atlas's
    /// first bitmap and never changes afterwards. Fails with
    /// [`TileGridError::AtlasEmpty`] when the atlas yields no inspectable
    /// bitmap or a zero tile dimension.
    pub fn new(atlas: A) -> Result<Self, TileGridError> {
        let Some(first) = atlas.bitmap(0) else {
            warn!("tile atlas has no tiles to inspect");
            return Err(TileGridError::AtlasEmpty);
        };
        let tile_width = first.width() as i32;
        let tile_height = first.height() as i32;
        if tile_width == 0 || tile_height == 0 {
            warn!("tile atlas has degenerate tile size {tile_width}x{tile_height}");
            return Err(TileGridError::AtlasEmpty);
        }
        debug!(
            "tile grid created: {} tiles of {}x{} pixels",
            atlas.len(),
            tile_width,
            tile_height
        );
        Ok(Self {
            atlas,
            width: 0,
            height: 0,
            tile_width,
            tile_height,
            cells: None,
        })
    }

    /// Borrow the owned atlas.
    #[inline]
    pub fn atlas(&self) -> &A {
        &self.atlas
    }

    /// Grid dimensions in tiles as `(width, height)`. `(0, 0)` when
    /// unsized.
    #[inline]
    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Per-tile pixel dimensions as `(width, height)`.
    #[inline]
    pub fn tile_size(&self) -> (i32, i32) {
        (self.tile_width, self.tile_height)
    }

    /// Total pixel dimensions of the grid: tile size times grid size.
    /// `(0, 0)` when unsized.
    #[inline]
    pub fn pixel_size(&self) -> (i32, i32) {
        (self.width * self.tile_width, self.height * self.tile_height)
    }

    /// Set the grid dimensions, in tiles, and allocate a zero-filled cell
    /// buffer.
    ///
    /// This is a destructive resize: any previous buffer is discarded
    /// first, so prior cell contents are lost even when the new size
    /// equals the old one. Dimensions outside `1..=2048` fail with
    /// [`TileGridError::InvalidSize`] and leave the grid *unsized* — not
    /// at its previous size.
    pub fn set_size(&mut self, width: i32, height: i32) -> Result<(), TileGridError> {
        // Discard before validating: a failed resize reverts to the
        // unsized construction state.
        self.cells = None;
        self.width = 0;
        self.height = 0;

        if !(1..=MAX_GRID_DIM).contains(&width) || !(1..=MAX_GRID_DIM).contains(&height) {
            warn!("invalid grid size {width}x{height}");
            return Err(TileGridError::InvalidSize { width, height });
        }

        self.width = width;
        self.height = height;
        self.cells = Some(vec![0; (width as usize) * (height as usize)]);
        Ok(())
    }

    /// Write the tile reference at one-based cell `(col, row)`.
    ///
    /// `tile_ref` uses the one-based encoding: 0 empties the cell, `v`
    /// names atlas tile `v - 1`. The value is stored verbatim and is *not*
    /// checked against the atlas here — an out-of-range reference only
    /// surfaces, as [`TileGridError::InvalidTileIndex`], on the next
    /// [`draw`](TileGrid::draw) that touches the cell.
    pub fn set_tile(&mut self, col: i32, row: i32, tile_ref: i32) -> Result<(), TileGridError> {
        let index = self.cell_index(col, row, "set_tile")?;
        if tile_ref < 0 || tile_ref > u16::MAX as i32 {
            warn!("invalid tile reference {tile_ref} for set_tile");
            return Err(TileGridError::InvalidTileRef(tile_ref));
        }
        // cell_index already proved the buffer exists.
        if let Some(cells) = self.cells.as_mut() {
            cells[index] = tile_ref as u16;
        }
        Ok(())
    }

    /// Read the raw tile reference stored at one-based cell `(col, row)`.
    pub fn tile(&self, col: i32, row: i32) -> Result<u16, TileGridError> {
        let index = self.cell_index(col, row, "tile")?;
        Ok(self.cells.as_ref().map(|cells| cells[index]).unwrap_or(0))
    }

    /// Bounds-checked linear index for a one-based cell coordinate.
    fn cell_index(&self, col: i32, row: i32, op: &str) -> Result<usize, TileGridError> {
        if self.cells.is_none() {
            warn!("grid size not set before {op}()");
            return Err(TileGridError::NotSized);
        }
        if col < 1 || col > self.width || row < 1 || row > self.height {
            warn!("out of bounds cell ({col}, {row}) for {op}");
            return Err(TileGridError::OutOfBounds { col, row });
        }
        Ok(((row - 1) as usize) * (self.width as usize) + (col - 1) as usize)
    }

    /// Draw the visible window of the grid onto `target`.
    ///
    /// `(scroll_x, scroll_y)` is the draw origin: the viewport-space pixel
    /// position where cell (1, 1)'s top-left corner would land if
    /// unclipped. Either coordinate may be negative (grid scrolled past
    /// the viewport origin) or arbitrarily large; cells outside the
    /// viewport or the grid are skipped without error, and a grid entirely
    /// off-screen draws nothing and succeeds.
    ///
    /// Cells holding 0 are skipped. A cell whose reference resolves past
    /// the end of the atlas aborts the call with
    /// [`TileGridError::InvalidTileIndex`]; tiles already visited stay
    /// blitted (the valid prefix of the frame is kept rather than rolled
    /// back). Traversal is row-major, left to right, top to bottom.
    ///
    /// The target's dimensions are queried fresh on every call, so a
    /// surface resized between frames is picked up automatically.
    pub fn draw<T: DrawTarget>(
        &self,
        target: &mut T,
        scroll_x: i32,
        scroll_y: i32,
    ) -> Result<(), TileGridError> {
        let Some(cells) = self.cells.as_deref() else {
            warn!("grid size not set before draw()");
            return Err(TileGridError::NotSized);
        };

        let tw = self.tile_width;
        let th = self.tile_height;

        // First possibly-visible column and the screen x it lands at. When
        // the origin column is fully off the left edge, fold the scroll
        // into [-tw, 0) and re-derive which column starts there.
        let mut draw_x = scroll_x;
        let mut tile_x = 0;
        if scroll_x < -tw {
            draw_x = -((-scroll_x) % tw);
            tile_x = (draw_x - scroll_x) / tw;
        }
        if tile_x >= self.width {
            return Ok(());
        }

        let mut draw_y = scroll_y;
        let mut tile_y = 0;
        if scroll_y < -th {
            draw_y = -((-scroll_y) % th);
            tile_y = (draw_y - scroll_y) / th;
        }
        if tile_y >= self.height {
            return Ok(());
        }

        let view_width = target.width();
        let view_height = target.height();

        let width = self.width;
        let tile_count = self.atlas.len();

        // Walk the cell buffer with a running linear index; the stride
        // correction after each row lands back on column `tile_x`.
        let mut index = ((tile_y * width) + tile_x) as usize;

        let mut cur_tile_y = tile_y;
        let mut cur_draw_y = draw_y;
        while cur_draw_y < view_height && cur_tile_y < self.height {
            let mut next_row_offset = width;

            let mut cur_tile_x = tile_x;
            let mut cur_draw_x = draw_x;
            while cur_draw_x < view_width && cur_tile_x < width {
                let stored = cells[index];
                if stored != 0 {
                    let tile_index = (stored - 1) as usize;
                    if tile_index >= tile_count {
                        warn!("invalid tile index {tile_index} at cell index {index}");
                        return Err(TileGridError::InvalidTileIndex {
                            index: tile_index,
                            count: tile_count,
                        });
                    }
                    if let Some(bitmap) = self.atlas.bitmap(tile_index) {
                        target.blit(bitmap, cur_draw_x, cur_draw_y);
                    }
                }

                next_row_offset -= 1;
                index += 1;

                cur_draw_x += tw;
                cur_tile_x += 1;
            }

            index += next_row_offset as usize;

            cur_tile_y += 1;
            cur_draw_y += th;
        }

        Ok(())
    }
}
