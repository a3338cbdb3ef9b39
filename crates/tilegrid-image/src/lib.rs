//! **tilegrid-image** — PNG tile-sheet atlas loading.
//!
//! [`ImageAtlas`] decodes a tile sheet with the [`image`] crate and slices
//! it row-major into uniform [`Bitmap`] tiles, implementing the
//! [`TileAtlas`] trait consumed by `tilegrid-core`.
//!
//! Sheets loaded from disk follow the image-table naming convention: a
//! file named `<stem>-table-<w>-<h>.png` holds tiles of `w` x `h` pixels.

use std::path::Path;

use image::RgbaImage;
use log::{debug, warn};

use tilegrid_core::{Bitmap, TileAtlas, TileGridError};

/// A [`TileAtlas`] backed by a decoded PNG tile sheet.
#[derive(Debug)]
pub struct ImageAtlas {
    tiles: Vec<Bitmap>,
    tile_width: u32,
    tile_height: u32,
}

impl ImageAtlas {
    /// Load a tile sheet from a `<stem>-table-<w>-<h>.png` file.
    ///
    /// The per-tile pixel size is parsed from the file stem; a missing or
    /// malformed suffix, an unreadable file, or a decode failure all
    /// return [`TileGridError::AtlasLoad`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, TileGridError> {
        let path = path.as_ref();

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| TileGridError::AtlasLoad(format!("bad path {}", path.display())))?;
        let (tile_width, tile_height) = parse_table_stem(stem).ok_or_else(|| {
            warn!("'{stem}' does not follow the <stem>-table-<w>-<h> convention");
            TileGridError::AtlasLoad(format!("no -table-<w>-<h> suffix in '{stem}'"))
        })?;

        let img = image::open(path)
            .map_err(|e| {
                warn!("error loading tile sheet '{}': {e}", path.display());
                TileGridError::AtlasLoad(format!("{}: {e}", path.display()))
            })?
            .to_rgba8();

        Self::from_image(&img, tile_width, tile_height)
    }

    /// Slice an already decoded RGBA sheet into row-major uniform tiles.
    ///
    /// Trailing pixels that do not fill a whole tile column or row are
    /// ignored. Fails with [`TileGridError::AtlasLoad`] when the tile size
    /// is zero or no whole tile fits in the sheet.
    pub fn from_image(
        img: &RgbaImage,
        tile_width: u32,
        tile_height: u32,
    ) -> Result<Self, TileGridError> {
        if tile_width == 0 || tile_height == 0 {
            return Err(TileGridError::AtlasLoad(format!(
                "invalid tile size {tile_width}x{tile_height}"
            )));
        }
        let cols = img.width() / tile_width;
        let rows = img.height() / tile_height;
        if cols == 0 || rows == 0 {
            return Err(TileGridError::AtlasLoad(format!(
                "sheet {}x{} is smaller than one {tile_width}x{tile_height} tile",
                img.width(),
                img.height()
            )));
        }

        let mut tiles = Vec::with_capacity((cols * rows) as usize);
        for ty in 0..rows {
            for tx in 0..cols {
                tiles.push(slice_tile(img, tx * tile_width, ty * tile_height, tile_width, tile_height));
            }
        }

        debug!("found {} tiles of {tile_width}x{tile_height} pixels", tiles.len());
        Ok(Self {
            tiles,
            tile_width,
            tile_height,
        })
    }
}

impl TileAtlas for ImageAtlas {
    fn len(&self) -> usize {
        self.tiles.len()
    }

    fn bitmap(&self, index: usize) -> Option<&Bitmap> {
        self.tiles.get(index)
    }

    fn tile_size(&self) -> (u32, u32) {
        (self.tile_width, self.tile_height)
    }
}

/// Copy one tile-sized window of the sheet into a packed-pixel [`Bitmap`].
fn slice_tile(img: &RgbaImage, x0: u32, y0: u32, w: u32, h: u32) -> Bitmap {
    let mut pixels = Vec::with_capacity((w * h) as usize);
    for y in 0..h {
        for x in 0..w {
            let p = img.get_pixel(x0 + x, y0 + y).0;
            pixels.push(pack_rgba(p));
        }
    }
    Bitmap::from_pixels(w, h, pixels)
}

/// Pack an `[r, g, b, a]` byte quad into the `0xAARRGGBB` form used by
/// [`Bitmap`].
#[inline]
fn pack_rgba([r, g, b, a]: [u8; 4]) -> u32 {
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Parse the `-table-<w>-<h>` suffix of a sheet file stem.
fn parse_table_stem(stem: &str) -> Option<(u32, u32)> {
    let (_, dims) = stem.rsplit_once("-table-")?;
    let (w, h) = dims.split_once('-')?;
    let w: u32 = w.parse().ok()?;
    let h: u32 = h.parse().ok()?;
    if w == 0 || h == 0 {
        return None;
    }
    Some((w, h))
}
