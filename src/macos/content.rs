use std::sync::{Once, mpsc::sync_channel};

use block2::RcBlock;
use objc2::{MainThreadMarker, rc::Retained};
use objc2_app_kit::NSApplication;
use objc2_foundation::NSError;
use objc2_screen_capture_kit::{SCDisplay, SCShareableContent};

use crate::error::{SckError, SckResult};

static INIT_APPLICATION: Once = Once::new();

/// ScreenCaptureKit needs a window server connection, which a command line
/// process only gets through the shared application.
fn init_application() {
    INIT_APPLICATION.call_once(|| {
        let _ = NSApplication::sharedApplication(unsafe { MainThreadMarker::new_unchecked() });
        log::debug!("NSApplication initialized");
    });
}

/// Blocks until ScreenCaptureKit reports the current shareable content.
pub(super) fn shareable_content() -> SckResult<Retained<SCShareableContent>> {
    init_application();

    let (tx, rx) = sync_channel(1);
    let completion_handler = RcBlock::new(
        move |content: *mut SCShareableContent, error: *mut NSError| unsafe {
            let result = Retained::retain(content).ok_or_else(|| {
                let description = Retained::retain(error)
                    .map(|error| error.localizedDescription().to_string())
                    .unwrap_or_else(|| "no content".to_string());

                SckError::new(format!("Get shareable content failed: {description}"))
            });

            let _ = tx.send(result);
        },
    );

    unsafe { SCShareableContent::getShareableContentWithCompletionHandler(&completion_handler) };

    rx.recv()
        .map_err(|err| SckError::new(format!("Shareable content handler dropped: {err}")))?
}

pub(super) fn find_display(
    content: &SCShareableContent,
    display_id: u32,
) -> Option<Retained<SCDisplay>> {
    let displays = unsafe { content.displays() };

    displays
        .iter()
        .find(|display| unsafe { display.displayID() } == display_id)
}
