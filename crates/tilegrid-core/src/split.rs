//! The grid splitting routine: crop, normalize color depth, name.

use image::{DynamicImage, GenericImageView, RgbImage};

use crate::grid::TileSpec;
use crate::naming::{NameList, TileNamer};

/// One cropped tile of the source grid, normalized to 24-bit RGB and
/// carrying its assigned name.
#[derive(Debug, Clone)]
pub struct NamedTile {
    /// Assigned tile name, without file extension.
    pub name: String,
    /// Cropped pixel data, alpha and extra channels stripped.
    pub image: RgbImage,
}

/// Split a source image into named 24-bit tiles.
///
/// Traverses grid origins in row-major order, crops each tile that fully
/// fits inside the source, converts it to 24-bit RGB, and names it from
/// the name list with the positional fallback once the list is exhausted.
///
/// # Arguments
/// * `source` - The source image, any color depth
/// * `spec` - Tile dimensions and spacing
/// * `names` - Name list, may be empty for positional names only
///
/// # Returns
/// The emitted tiles in traversal order.
pub fn split(source: &DynamicImage, spec: &TileSpec, names: NameList) -> Vec<NamedTile> {
    let (width, height) = source.dimensions();
    let mut namer = TileNamer::new(names);
    let mut tiles = Vec::with_capacity(spec.count(width, height));

    for (x, y) in spec.origins(width, height) {
        let image = source
            .crop_imm(x, y, spec.width(), spec.height())
            .to_rgb8();
        tiles.push(NamedTile {
            name: namer.next_name(),
            image,
        });
    }

    tiles
}
