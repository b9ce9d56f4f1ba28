use std::io::Cursor;

use super::*;

fn png_bytes(img: image::DynamicImage) -> Vec<u8> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_image_png_dimensions_and_premul() {
    let img = image::RgbaImage::from_raw(1, 1, vec![100u8, 50u8, 200u8, 128u8]).unwrap();
    let canvas = decode_image(&png_bytes(image::DynamicImage::ImageRgba8(img))).unwrap();
    assert_eq!(canvas.width(), 1);
    assert_eq!(canvas.height(), 1);
    assert_eq!(
        canvas.as_bytes(),
        &[
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128u8
        ]
    );
}

#[test]
fn decode_garbage_is_asset_load_error() {
    let err = decode_image(b"not an image").unwrap_err();
    assert!(matches!(err, StripError::AssetLoad(_)));
}

#[test]
fn mask_prefers_alpha_channel() {
    let img = image::RgbaImage::from_raw(2, 1, vec![0, 0, 0, 255, 255, 255, 255, 0]).unwrap();
    let mask = decode_mask(&png_bytes(image::DynamicImage::ImageRgba8(img))).unwrap();
    assert_eq!(mask.coverage(0, 0), 255);
    assert_eq!(mask.coverage(1, 0), 0);
}

#[test]
fn mask_without_alpha_uses_luma() {
    let img = image::GrayImage::from_raw(2, 1, vec![0, 200]).unwrap();
    let mask = decode_mask(&png_bytes(image::DynamicImage::ImageLuma8(img))).unwrap();
    assert_eq!(mask.coverage(0, 0), 0);
    assert_eq!(mask.coverage(1, 0), 200);
    assert_eq!(mask.coverage(5, 5), 0);
}

#[test]
fn missing_file_names_the_path() {
    let err = load_image(Path::new("target/definitely/not/here.png")).unwrap_err();
    let msg = err.to_string();
    assert!(msg.starts_with("asset load error:"));
    assert!(msg.contains("not/here.png"));
}
