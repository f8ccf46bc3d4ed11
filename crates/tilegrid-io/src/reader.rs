use anyhow::{Context, Result};
use image::DynamicImage;
use std::path::Path;
use tilegrid_core::{NameList, NameListMode};

/// Open and decode a source image of any supported format and depth.
pub fn read_image<P: AsRef<Path>>(path: P) -> Result<DynamicImage> {
    let path = path.as_ref();
    image::open(path)
        .with_context(|| format!("Failed to read source image {}", path.display()))
}

/// Load a name list from a text file, split according to the given mode.
pub fn read_name_list<P: AsRef<Path>>(path: P, mode: NameListMode) -> Result<NameList> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read name list {}", path.display()))?;
    Ok(NameList::parse(&text, mode))
}
