//! Tile geometry and grid origin traversal.
//!
//! This module provides the TileSpec type which describes the tile
//! dimensions and inter-tile spacing of a grid image, and computes the
//! origins of every tile that fits inside a source image.

use crate::error::{Result, TileError};

/// Geometry of a tile grid: tile width, tile height, and the pixel gap
/// between adjacent tiles along both axes.
///
/// A spacing of zero means tiles sit edge to edge. Zero tile dimensions
/// are rejected at construction; they would describe a degenerate grid
/// with no finite traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSpec {
    /// Tile width in pixels.
    width: u32,
    /// Tile height in pixels.
    height: u32,
    /// Gap between adjacent tiles in pixels.
    spacing: u32,
}

impl TileSpec {
    /// Create a new tile specification.
    ///
    /// # Arguments
    /// * `width` - Tile width in pixels, must be positive
    /// * `height` - Tile height in pixels, must be positive
    /// * `spacing` - Gap between adjacent tiles in pixels, may be zero
    ///
    /// # Errors
    /// Returns [`TileError::InvalidConfiguration`] if `width` or `height`
    /// is zero.
    pub fn new(width: u32, height: u32, spacing: u32) -> Result<Self> {
        if width == 0 {
            return Err(TileError::invalid_configuration(
                "tile width must be positive",
            ));
        }
        if height == 0 {
            return Err(TileError::invalid_configuration(
                "tile height must be positive",
            ));
        }
        Ok(Self {
            width,
            height,
            spacing,
        })
    }

    /// Get the tile width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the tile height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the inter-tile spacing.
    pub fn spacing(&self) -> u32 {
        self.spacing
    }

    /// Iterate the origins of every tile that fits inside an image of the
    /// given dimensions, in row-major order (all x for a given y,
    /// ascending y).
    ///
    /// Origins advance in steps of `width + spacing` along x and
    /// `height + spacing` along y. An origin is yielded only if the full
    /// tile extent `(x + width, y + height)` fits inside the image;
    /// partial edge tiles are dropped, not padded or cropped short.
    ///
    /// # Arguments
    /// * `image_width` - Source image width in pixels
    /// * `image_height` - Source image height in pixels
    ///
    /// # Returns
    /// Iterator over `(x, y)` tile origins.
    pub fn origins(
        &self,
        image_width: u32,
        image_height: u32,
    ) -> impl Iterator<Item = (u32, u32)> {
        let tile_w = self.width as usize;
        let tile_h = self.height as usize;
        // usize arithmetic so width + spacing cannot wrap at the u32 edge.
        let step_x = self.width as usize + self.spacing as usize;
        let step_y = self.height as usize + self.spacing as usize;

        (0..image_height as usize)
            .step_by(step_y)
            .flat_map(move |y| {
                (0..image_width as usize)
                    .step_by(step_x)
                    .map(move |x| (x, y))
            })
            .filter(move |&(x, y)| {
                x + tile_w <= image_width as usize && y + tile_h <= image_height as usize
            })
            .map(|(x, y)| (x as u32, y as u32))
    }

    /// Count the tiles that fit inside an image of the given dimensions.
    pub fn count(&self, image_width: u32, image_height: u32) -> usize {
        self.origins(image_width, image_height).count()
    }
}
