use image::{ColorType, DynamicImage, GenericImageView, Rgba, RgbaImage};
use tempfile::tempdir;
use tilegrid_core::{split, NameList, NameListMode, TileSpec};
use tilegrid_io::{convert_image, read_image, read_name_list, write_tiles};

fn rgba_fixture(width: u32, height: u32) -> DynamicImage {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, 42, 200])
    });
    DynamicImage::ImageRgba8(img)
}

#[test]
fn test_write_tiles_roundtrip_24bit() {
    let dir = tempdir().unwrap();
    let out_dir = dir.path().join("tiles");

    let source = rgba_fixture(100, 50);
    let spec = TileSpec::new(40, 20, 10).unwrap();
    let tiles = split(&source, &spec, NameList::default());

    let written = write_tiles(&tiles, &out_dir).unwrap();
    assert_eq!(written, 4);

    for i in 0..4 {
        let path = out_dir.join(format!("tile_{:03}.bmp", i));
        let decoded = read_image(&path).unwrap();
        assert_eq!(decoded.dimensions(), (40, 20));
        assert_eq!(decoded.color(), ColorType::Rgb8);
    }
}

#[test]
fn test_write_tiles_creates_output_folder() {
    let dir = tempdir().unwrap();
    let out_dir = dir.path().join("a").join("b");

    let source = rgba_fixture(40, 20);
    let spec = TileSpec::new(40, 20, 0).unwrap();
    let tiles = split(&source, &spec, NameList::default());

    let written = write_tiles(&tiles, &out_dir).unwrap();
    assert_eq!(written, 1);
    assert!(out_dir.join("tile_000.bmp").exists());
}

#[test]
fn test_read_image_missing_is_fatal() {
    let dir = tempdir().unwrap();
    let result = read_image(dir.path().join("nope.png"));
    assert!(result.is_err());
}

#[test]
fn test_read_name_list_line_mode() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("names.txt");
    std::fs::write(&path, "one\n two \nthree\n").unwrap();

    let list = read_name_list(&path, NameListMode::Line).unwrap();
    assert_eq!(list.get(1), Some("two"));
    assert_eq!(list.len(), 3);
}

#[test]
fn test_read_name_list_missing_is_fatal() {
    let dir = tempdir().unwrap();
    let result = read_name_list(dir.path().join("nope.txt"), NameListMode::Line);
    assert!(result.is_err());
}

#[test]
fn test_convert_image_strips_alpha() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("source.png");
    let output = dir.path().join("out").join("source.bmp");

    rgba_fixture(16, 8).save(&input).unwrap();

    convert_image(&input, &output).unwrap();

    let decoded = read_image(&output).unwrap();
    assert_eq!(decoded.dimensions(), (16, 8));
    assert_eq!(decoded.color(), ColorType::Rgb8);
    // Pixel content survives the depth change.
    assert_eq!(decoded.get_pixel(3, 2).0[0], 3);
    assert_eq!(decoded.get_pixel(3, 2).0[1], 2);
}
