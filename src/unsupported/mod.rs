use crate::{
    capture::CapturePiece,
    display::DisplayInfo,
    error::{SckError, SckResult},
    options::CaptureOptions,
    utils::image::PixelBuffer,
};

pub(crate) fn all_displays() -> SckResult<Vec<DisplayInfo>> {
    Ok(Vec::new())
}

pub(crate) fn capture_pieces(
    _buffer: &mut PixelBuffer,
    _pieces: &[CapturePiece],
    _options: &CaptureOptions,
) -> SckResult<()> {
    Err(SckError::NotSupported)
}
