mod capture;
mod display;
mod error;
mod geometry;
mod options;
mod run;
mod utils;
mod writer;

#[cfg(target_os = "macos")]
#[path = "macos/mod.rs"]
mod platform;

#[cfg(not(target_os = "macos"))]
#[path = "unsupported/mod.rs"]
mod platform;

pub use capture::capture;
pub use display::{Display, DisplayInfo};
pub use error::{SckError, SckResult};
pub use geometry::{Rect, union_all};
pub use options::{CaptureOptions, ColorSpace};
pub use run::{CaptureJob, CapturePlan, run};
pub use utils::image::PixelBuffer;
pub use writer::{ALL_FILE_NAME, display_file_name, save_png};
