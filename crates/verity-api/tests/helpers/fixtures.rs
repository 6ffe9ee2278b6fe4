//! Test fixtures: images encoded on the fly with the `image` crate.

#![allow(dead_code)]

use image::{ImageFormat, Luma, Rgb, RgbImage};
use std::io::Cursor;

/// Solid-color PNG of the given dimensions.
pub fn create_test_png(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_pixel(width, height, Rgb([200, 30, 30]));
    let mut buffer = Vec::new();
    img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
        .expect("encode png");
    buffer
}

/// Grayscale JPEG of the given dimensions.
pub fn create_test_jpeg(width: u32, height: u32) -> Vec<u8> {
    let img = image::GrayImage::from_pixel(width, height, Luma([128]));
    let mut buffer = Vec::new();
    img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Jpeg)
        .expect("encode jpeg");
    buffer
}

/// Bytes that no decoder accepts.
pub fn create_garbage() -> Vec<u8> {
    b"this is a text file pretending to be an image".to_vec()
}

pub const INDEX_HTML: &str = "<!doctype html><html><body><h1>Verity test page</h1></body></html>";
