use std::path::Path;

use image::{GrayImage, Luma, RgbImage};
use tracing::debug;

use crate::error::ConvertError;
use crate::io::write_pbm;

/// Binarize a grayscale image: below `threshold` is black (0), the rest white (255)
pub fn binarize(gray: &GrayImage, threshold: u8) -> GrayImage {
    let mut mask = gray.clone();
    for pixel in mask.pixels_mut() {
        *pixel = if pixel.0[0] < threshold {
            Luma([0])
        } else {
            Luma([255])
        };
    }
    mask
}

/// ITU-R 601-2 luma in 16-bit fixed point, rounded.
///
/// Same weights (0.299/0.587/0.114) as the common "L" conversion of image
/// editors. `DynamicImage::to_luma8` uses Rec. 709 weights instead, which
/// moves colored pixels across the threshold.
pub fn luma_601(rgb: &RgbImage) -> GrayImage {
    GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
        let [r, g, b] = rgb.get_pixel(x, y).0;
        let l = (r as u32 * 19595 + g as u32 * 38470 + b as u32 * 7471 + 0x8000) >> 16;
        Luma([l as u8])
    })
}

/// Stage 1: load the PNG, convert to grayscale, threshold and save as a bi-level mask.
///
/// Alpha is dropped before the gray conversion.
pub fn write_mask(source: &Path, mask_path: &Path, threshold: u8) -> Result<(), ConvertError> {
    let rgb = image::open(source)
        .map_err(|e| ConvertError::Image {
            path: source.to_path_buf(),
            source: e,
        })?
        .to_rgb8();
    let gray = luma_601(&rgb);

    debug!(
        "Thresholding {:?} ({}x{}) at {}",
        source,
        gray.width(),
        gray.height(),
        threshold
    );

    let mask = binarize(&gray, threshold);
    write_pbm(&mask, mask_path)
}
