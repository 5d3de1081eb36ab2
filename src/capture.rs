use image::RgbaImage;

use crate::{
    display::DisplayInfo,
    error::{SckError, SckResult},
    geometry::Rect,
    options::CaptureOptions,
    platform,
    utils::image::PixelBuffer,
};

/// Part of a requested region that lies on one display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CapturePiece {
    pub display_id: u32,
    /// Piece in global desktop coordinates.
    pub region: Rect,
    /// Piece in the display's local coordinates.
    pub source: Rect,
    /// Top-left corner of the piece inside the destination image.
    pub offset_x: u32,
    pub offset_y: u32,
}

/// Splits `region` over every display it overlaps.
pub(crate) fn plan_pieces(region: Rect, displays: &[DisplayInfo]) -> Vec<CapturePiece> {
    displays
        .iter()
        .filter_map(|display| {
            let bounds = display.bounds();
            let piece = region.intersect(&bounds);
            if piece.is_empty() {
                return None;
            }

            Some(CapturePiece {
                display_id: display.id,
                region: piece,
                source: piece.relative_to(bounds.min_x, bounds.min_y),
                offset_x: (piece.min_x - region.min_x) as u32,
                offset_y: (piece.min_y - region.min_y) as u32,
            })
        })
        .collect()
}

/// Captures the desktop region `width x height` at `(x, y)` in global coordinates.
pub fn capture(
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    options: &CaptureOptions,
) -> SckResult<RgbaImage> {
    if width <= 0 || height <= 0 {
        return Err(SckError::InvalidDimensions { width, height });
    }

    let region = Rect::checked_from_origin_size(x, y, width as u32, height as u32)
        .ok_or(SckError::InvalidDimensions { width, height })?;

    capture_rect(region, options)
}

/// Rectangle `(x, y, width, height)` a captured piece is drawn at inside a
/// bitmap context of `buffer_height` rows, whose origin is the bottom left.
#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
pub(crate) fn draw_rect(
    buffer_height: u32,
    piece: &CapturePiece,
    image_width: usize,
    image_height: usize,
) -> (f64, f64, f64, f64) {
    (
        piece.offset_x as f64,
        buffer_height as f64 - piece.offset_y as f64 - image_height as f64,
        image_width as f64,
        image_height as f64,
    )
}

pub(crate) fn capture_rect(region: Rect, options: &CaptureOptions) -> SckResult<RgbaImage> {
    if region.is_empty() {
        return Err(SckError::InvalidDimensions {
            width: region.width(),
            height: region.height(),
        });
    }

    let mut buffer = PixelBuffer::new(region.width() as u32, region.height() as u32)?;

    let displays = platform::all_displays()?;
    let pieces = plan_pieces(region, &displays);
    if pieces.is_empty() {
        log::error!("region {region} does not overlap any display");
        return Err(SckError::CaptureFailed(region));
    }

    log::debug!(
        "capturing {region} from {} display(s) into {}x{} buffer",
        pieces.len(),
        buffer.width(),
        buffer.height()
    );
    platform::capture_pieces(&mut buffer, &pieces, options)?;

    buffer.into_rgba_image()
}
