use objc2_screen_capture_kit::SCDisplay;

use crate::{display::DisplayInfo, error::SckResult};

use super::content::shareable_content;

fn display_info(display: &SCDisplay) -> DisplayInfo {
    unsafe {
        let frame = display.frame();

        DisplayInfo {
            id: display.displayID(),
            x: frame.origin.x as i32,
            y: frame.origin.y as i32,
            width: display.width() as u32,
            height: display.height() as u32,
        }
    }
}

pub(crate) fn all_displays() -> SckResult<Vec<DisplayInfo>> {
    let content = shareable_content()?;
    let displays = unsafe { content.displays() };

    let infos: Vec<DisplayInfo> = displays
        .iter()
        .map(|display| display_info(&display))
        .collect();

    for (index, info) in infos.iter().enumerate() {
        log::debug!(
            "display {index}: id {} origin ({}, {}) size {}x{}",
            info.id,
            info.x,
            info.y,
            info.width,
            info.height
        );
    }

    Ok(infos)
}
