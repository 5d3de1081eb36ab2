use image::RgbaImage;

use crate::{
    capture::capture_rect,
    error::{SckError, SckResult},
    geometry::Rect,
    options::CaptureOptions,
    platform,
};

/// Snapshot of one display's geometry. All zero when the display is unknown.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DisplayInfo {
    pub id: u32,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl DisplayInfo {
    /// Bounds in global desktop coordinates.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.x, self.y, self.width, self.height)
    }
}

#[derive(Debug, Clone)]
pub struct Display {
    info: DisplayInfo,
}

impl Display {
    pub(crate) fn new(info: DisplayInfo) -> Display {
        Display { info }
    }
}

impl Display {
    /// All shareable displays, in platform order.
    ///
    /// The first call may bring up the screen recording permission prompt and
    /// blocks until the platform answers.
    pub fn all() -> SckResult<Vec<Display>> {
        let displays = platform::all_displays()?
            .into_iter()
            .map(Display::new)
            .collect();

        Ok(displays)
    }

    /// Number of shareable displays, 0 if they cannot be listed.
    pub fn count() -> usize {
        match platform::all_displays() {
            Ok(displays) => displays.len(),
            Err(err) => {
                log::error!("list displays failed: {err}");
                0
            }
        }
    }

    /// Descriptor of the display at `index`. Out of range gives the zero descriptor.
    pub fn info_at(index: usize) -> DisplayInfo {
        match platform::all_displays() {
            Ok(displays) => displays.get(index).copied().unwrap_or_else(|| {
                log::warn!("invalid display index: {index}");
                DisplayInfo::default()
            }),
            Err(err) => {
                log::error!("list displays failed: {err}");
                DisplayInfo::default()
            }
        }
    }

    pub fn from_id(id: u32) -> SckResult<Display> {
        platform::all_displays()?
            .into_iter()
            .find(|info| info.id == id)
            .map(Display::new)
            .ok_or_else(|| SckError::new(format!("Display {id} not found")))
    }
}

impl Display {
    pub fn id(&self) -> u32 {
        self.info.id
    }
    /// The display x coordinate.
    pub fn x(&self) -> i32 {
        self.info.x
    }
    /// The display y coordinate.
    pub fn y(&self) -> i32 {
        self.info.y
    }
    pub fn width(&self) -> u32 {
        self.info.width
    }
    pub fn height(&self) -> u32 {
        self.info.height
    }
    pub fn bounds(&self) -> Rect {
        self.info.bounds()
    }
    pub fn info(&self) -> DisplayInfo {
        self.info
    }
}

impl Display {
    /// Capture image of the whole display
    pub fn capture_image(&self, options: &CaptureOptions) -> SckResult<RgbaImage> {
        capture_rect(self.bounds(), options)
    }

    /// Capture a region given in display local coordinates
    pub fn capture_region(
        &self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        options: &CaptureOptions,
    ) -> SckResult<RgbaImage> {
        if width <= 0 || height <= 0 {
            return Err(SckError::InvalidDimensions { width, height });
        }

        let outside = || {
            SckError::new(format!(
                "Region ({x}, {y}, {width}, {height}) is outside display bounds {}",
                self.bounds()
            ))
        };

        let region_x = self.x().checked_add(x).ok_or_else(outside)?;
        let region_y = self.y().checked_add(y).ok_or_else(outside)?;
        let region =
            Rect::checked_from_origin_size(region_x, region_y, width as u32, height as u32)
                .ok_or_else(outside)?;
        if region.intersect(&self.bounds()) != region {
            return Err(SckError::new(format!(
                "Region {region} is outside display bounds {}",
                self.bounds()
            )));
        }

        capture_rect(region, options)
    }
}
