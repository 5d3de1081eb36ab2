use std::{ptr::NonNull, sync::mpsc::sync_channel};

use block2::RcBlock;
use objc2::{AllocAnyThread, rc::Retained};
use objc2_core_foundation::{CFRetained, CFString, CGPoint, CGRect, CGSize};
use objc2_core_graphics::{
    CGBitmapContextCreate, CGColorSpace, CGColorSpaceCreateDeviceRGB, CGColorSpaceCreateWithName,
    CGContextDrawImage, CGImage, CGImageAlphaInfo, CGImageGetHeight, CGImageGetWidth,
    kCGColorSpaceDisplayP3, kCGColorSpaceSRGB,
};
use objc2_foundation::{NSArray, NSError};
use objc2_screen_capture_kit::{
    SCContentFilter, SCDisplay, SCRunningApplication, SCScreenshotManager,
    SCStreamConfiguration, SCWindow,
};

use crate::{
    capture::{CapturePiece, draw_rect},
    error::{SckError, SckResult},
    geometry::Rect,
    options::{CaptureOptions, ColorSpace},
    utils::image::PixelBuffer,
};

use super::content::{find_display, shareable_content};

fn color_space_name(color_space: ColorSpace) -> Option<&'static CFString> {
    match color_space {
        ColorSpace::DeviceRgb => None,
        ColorSpace::Srgb => Some(unsafe { kCGColorSpaceSRGB }),
        ColorSpace::DisplayP3 => Some(unsafe { kCGColorSpaceDisplayP3 }),
    }
}

fn create_color_space(color_space: ColorSpace) -> SckResult<CFRetained<CGColorSpace>> {
    let cg_color_space = match color_space_name(color_space) {
        Some(name) => unsafe { CGColorSpaceCreateWithName(Some(name)) },
        None => unsafe { CGColorSpaceCreateDeviceRGB() },
    };

    cg_color_space.ok_or_else(|| SckError::new(format!("Create {color_space:?} color space failed")))
}

fn cg_rect(x: f64, y: f64, width: f64, height: f64) -> CGRect {
    CGRect {
        origin: CGPoint { x, y },
        size: CGSize { width, height },
    }
}

/// Captures `source` (display local coordinates) of `display` as a still image.
///
/// Blocks until the screenshot manager calls back. Platform errors are logged
/// and reported as `None`.
fn capture_image(
    display: &SCDisplay,
    source: &Rect,
    options: &CaptureOptions,
) -> Option<CFRetained<CGImage>> {
    unsafe {
        let filter = SCContentFilter::initWithDisplay_excludingApplications_exceptingWindows(
            SCContentFilter::alloc(),
            display,
            &NSArray::<SCRunningApplication>::new(),
            &NSArray::<SCWindow>::new(),
        );

        let configuration = SCStreamConfiguration::new();
        configuration.setWidth(source.width() as usize);
        configuration.setHeight(source.height() as usize);
        configuration.setSourceRect(cg_rect(
            source.min_x as f64,
            source.min_y as f64,
            source.width() as f64,
            source.height() as f64,
        ));
        configuration.setScalesToFit(false);
        configuration.setShowsCursor(options.shows_cursor);
        if let Some(name) = color_space_name(options.color_space) {
            configuration.setColorSpaceName(name);
        }

        let (tx, rx) = sync_channel(1);
        let completion_handler = RcBlock::new(move |image: *mut CGImage, error: *mut NSError| {
            if let Some(error) = Retained::retain(error) {
                log::error!(
                    "capture image failed: {} (domain {}, code {})",
                    error.localizedDescription(),
                    error.domain(),
                    error.code()
                );
                let _ = tx.send(None);
                return;
            }

            let image = NonNull::new(image).map(|image| CFRetained::retain(image));
            if image.is_none() {
                log::error!("no image captured");
            }
            let _ = tx.send(image);
        });

        log::debug!(
            "capture display {} source {source}",
            display.displayID()
        );
        SCScreenshotManager::captureImageWithFilter_configuration_completionHandler(
            &filter,
            &configuration,
            Some(&*completion_handler),
        );

        rx.recv().ok().flatten()
    }
}

/// Captures every piece and draws it into `buffer` at its offset.
pub(crate) fn capture_pieces(
    buffer: &mut PixelBuffer,
    pieces: &[CapturePiece],
    options: &CaptureOptions,
) -> SckResult<()> {
    let content = shareable_content()?;
    let color_space = create_color_space(options.color_space)?;

    let width = buffer.width() as usize;
    let height = buffer.height() as usize;
    let bytes_per_row = buffer.bytes_per_row();

    let context = unsafe {
        CGBitmapContextCreate(
            buffer.as_mut_slice().as_mut_ptr().cast(),
            width,
            height,
            8,
            bytes_per_row,
            Some(&*color_space),
            CGImageAlphaInfo::NoneSkipLast.0,
        )
    }
    .ok_or_else(|| SckError::new(format!("Create {width}x{height} bitmap context failed")))?;

    for piece in pieces {
        let display = find_display(&content, piece.display_id)
            .ok_or_else(|| SckError::new(format!("Display {} not found", piece.display_id)))?;

        let cg_image = capture_image(&display, &piece.source, options)
            .ok_or(SckError::CaptureFailed(piece.region))?;

        let image_width = unsafe { CGImageGetWidth(Some(&*cg_image)) };
        let image_height = unsafe { CGImageGetHeight(Some(&*cg_image)) };

        let (x, y, w, h) = draw_rect(height as u32, piece, image_width, image_height);
        let rect = cg_rect(x, y, w, h);
        unsafe { CGContextDrawImage(Some(&*context), rect, Some(&*cg_image)) };
    }

    Ok(())
}
