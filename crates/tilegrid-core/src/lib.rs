//! **tilegrid-core** — a scrollable 2D tile-grid renderer.
//!
//! This crate provides the [`TileGrid`] data structure: a rectangular grid
//! of tile references drawn from a shared [`TileAtlas`], rendered to any
//! [`DrawTarget`] at an arbitrary scroll offset with exact clipping.
//!
//! Atlas loading lives behind the [`TileAtlas`] trait seam (see the
//! `tilegrid-image` crate for a PNG-backed implementation); compositing
//! lives behind [`DrawTarget`], with [`FrameBuffer`] as the bundled
//! software surface.

pub mod atlas;
pub mod bitmap;
pub mod error;
pub mod grid;
pub mod surface;

pub use atlas::TileAtlas;
pub use bitmap::Bitmap;
pub use error::TileGridError;
pub use grid::TileGrid;
pub use surface::{DrawTarget, FrameBuffer};
