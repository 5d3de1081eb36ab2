mod capture;
mod content;
mod impl_display;

pub(crate) use capture::capture_pieces;
pub(crate) use impl_display::all_displays;
