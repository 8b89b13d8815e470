use std::path::Path;

use image::GrayImage;

use crate::error::ConvertError;

/// Encode a binarized image as raw PBM (P4).
///
/// Black pixels (value 0) set their bit; everything else is white. Rows are
/// packed MSB first and padded to a whole byte.
pub fn encode_pbm(mask: &GrayImage) -> Vec<u8> {
    let (width, height) = mask.dimensions();
    let row_bytes = width.div_ceil(8) as usize;

    let header = format!("P4\n{} {}\n", width, height);
    let mut out = Vec::with_capacity(header.len() + row_bytes * height as usize);
    out.extend_from_slice(header.as_bytes());

    for row in mask.rows() {
        let mut packed = vec![0u8; row_bytes];
        for (x, pixel) in row.enumerate() {
            if pixel.0[0] == 0 {
                packed[x / 8] |= 0x80 >> (x % 8);
            }
        }
        out.extend_from_slice(&packed);
    }

    out
}

/// Write a binarized image to `path` as PBM
pub fn write_pbm(mask: &GrayImage, path: &Path) -> Result<(), ConvertError> {
    std::fs::write(path, encode_pbm(mask)).map_err(|e| ConvertError::io(path, e))
}
