use image::RgbaImage;

use crate::error::{SckError, SckResult};

pub const BYTES_PER_PIXEL: usize = 4;

/// Drawing contexts prefer rows aligned to this many bytes.
const ROW_ALIGNMENT: usize = 64;

/// Fixed-size RGBX pixel grid whose rows may carry padding after the last pixel.
#[derive(Debug)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    bytes_per_row: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> SckResult<PixelBuffer> {
        let allocation_failed = || SckError::ImageAllocation { width, height };

        let row = (width as usize)
            .checked_mul(BYTES_PER_PIXEL)
            .ok_or_else(allocation_failed)?;
        let bytes_per_row = row
            .checked_next_multiple_of(ROW_ALIGNMENT)
            .ok_or_else(allocation_failed)?;
        let len = bytes_per_row
            .checked_mul(height as usize)
            .ok_or_else(allocation_failed)?;

        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| allocation_failed())?;
        data.resize(len, 0);

        Ok(PixelBuffer {
            width,
            height,
            bytes_per_row,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn bytes_per_row(&self) -> usize {
        self.bytes_per_row
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Packs the rows tightly and marks every pixel opaque.
    pub fn into_rgba_image(self) -> SckResult<RgbaImage> {
        let mut buffer = remove_extra_data(
            self.width as usize,
            self.height as usize,
            self.bytes_per_row,
            self.data,
        );
        fill_alpha(&mut buffer);

        RgbaImage::from_raw(self.width, self.height, buffer)
            .ok_or_else(|| SckError::new("RgbaImage::from_raw failed"))
    }
}

/// Some platforms e.g. MacOS can have extra bytes at the end of each row.
pub fn remove_extra_data(
    width: usize,
    height: usize,
    bytes_per_row: usize,
    buf: Vec<u8>,
) -> Vec<u8> {
    let row_len = width * BYTES_PER_PIXEL;
    if bytes_per_row == row_len {
        return buf;
    }

    let mut result = Vec::with_capacity(row_len * height);
    for row in buf.chunks_exact(bytes_per_row).take(height) {
        result.extend_from_slice(&row[..row_len]);
    }

    result
}

/// Bitmap contexts with a skipped alpha channel leave the fourth byte undefined.
pub fn fill_alpha(buf: &mut [u8]) {
    for pixel in buf.chunks_exact_mut(BYTES_PER_PIXEL) {
        pixel[3] = 255;
    }
}
