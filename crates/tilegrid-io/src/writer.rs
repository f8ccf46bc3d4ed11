use anyhow::{Context, Result};
use image::ImageFormat;
use std::fs;
use std::path::Path;
use tilegrid_core::NamedTile;

/// Write each tile as `<name>.bmp` into the output folder, creating the
/// folder if absent.
///
/// Tiles are already 24-bit RGB; the BMP encoder preserves that depth.
/// The first failed write aborts the run.
///
/// # Returns
/// The number of tiles written.
pub fn write_tiles<P: AsRef<Path>>(tiles: &[NamedTile], out_dir: P) -> Result<usize> {
    let out_dir = out_dir.as_ref();
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output folder {}", out_dir.display()))?;

    for tile in tiles {
        let path = out_dir.join(format!("{}.bmp", tile.name));
        tile.image
            .save_with_format(&path, ImageFormat::Bmp)
            .with_context(|| format!("Failed to write tile {}", path.display()))?;
    }

    Ok(tiles.len())
}

/// Re-encode a single image as 24-bit BMP, stripping alpha and extra
/// channels, creating the output's parent folder if needed.
pub fn convert_image<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<()> {
    let output = output.as_ref();
    let img = crate::read_image(input)?;

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output folder {}", parent.display())
            })?;
        }
    }

    img.to_rgb8()
        .save_with_format(output, ImageFormat::Bmp)
        .with_context(|| format!("Failed to write converted image {}", output.display()))
}
