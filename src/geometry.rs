use std::fmt;

/// Integer rectangle in global desktop coordinates, top-left origin.
///
/// The rectangle is half-open: it covers `min_x..max_x` horizontally and
/// `min_y..max_y` vertically. It is empty when either span is empty.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl Rect {
    /// Builds a rectangle from two corners, swapping them if needed.
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Rect {
        Rect {
            min_x: x0.min(x1),
            min_y: y0.min(y1),
            max_x: x0.max(x1),
            max_y: y0.max(y1),
        }
    }

    pub fn from_origin_size(x: i32, y: i32, width: u32, height: u32) -> Rect {
        Rect {
            min_x: x,
            min_y: y,
            max_x: x.saturating_add_unsigned(width),
            max_y: y.saturating_add_unsigned(height),
        }
    }

    /// Like [`Rect::from_origin_size`], but `None` when the far edge overflows `i32`.
    pub fn checked_from_origin_size(x: i32, y: i32, width: u32, height: u32) -> Option<Rect> {
        Some(Rect {
            min_x: x,
            min_y: y,
            max_x: x.checked_add_unsigned(width)?,
            max_y: y.checked_add_unsigned(height)?,
        })
    }

    pub fn width(&self) -> i32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> i32 {
        self.max_y - self.min_y
    }

    pub fn is_empty(&self) -> bool {
        self.min_x >= self.max_x || self.min_y >= self.max_y
    }

    /// Smallest rectangle containing both. Empty rectangles are ignored.
    pub fn union(&self, other: &Rect) -> Rect {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }

        Rect {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Overlap of both rectangles, or the zero rectangle when they are disjoint.
    pub fn intersect(&self, other: &Rect) -> Rect {
        let rect = Rect {
            min_x: self.min_x.max(other.min_x),
            min_y: self.min_y.max(other.min_y),
            max_x: self.max_x.min(other.max_x),
            max_y: self.max_y.min(other.max_y),
        };

        if rect.is_empty() {
            return Rect::default();
        }

        rect
    }

    pub fn overlaps(&self, other: &Rect) -> bool {
        !self.intersect(other).is_empty()
    }

    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        self.min_x <= x && x < self.max_x && self.min_y <= y && y < self.max_y
    }

    /// Moves the rectangle by `(-dx, -dy)`, e.g. into a display's local space.
    pub fn relative_to(&self, dx: i32, dy: i32) -> Rect {
        Rect {
            min_x: self.min_x - dx,
            min_y: self.min_y - dy,
            max_x: self.max_x - dx,
            max_y: self.max_y - dy,
        }
    }
}

/// Union of every rectangle in `rects`; the zero rectangle for none.
pub fn union_all<'a, I>(rects: I) -> Rect
where
    I: IntoIterator<Item = &'a Rect>,
{
    rects
        .into_iter()
        .fold(Rect::default(), |all, rect| rect.union(&all))
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{})-({},{})",
            self.min_x, self.min_y, self.max_x, self.max_y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_covers_all_displays() {
        let displays = [
            Rect::from_origin_size(0, 0, 2560, 1440),
            Rect::from_origin_size(2560, 200, 1920, 1080),
            Rect::from_origin_size(-1280, -800, 1280, 1024),
        ];

        let all = union_all(&displays);

        assert_eq!(all, Rect::new(-1280, -800, 4480, 1440));
        for display in &displays {
            assert_eq!(display.intersect(&all), *display);
        }
        assert_eq!(all.width(), 5760);
        assert_eq!(all.height(), 2240);
    }

    #[test]
    fn union_ignores_empty() {
        let rect = Rect::from_origin_size(100, 100, 10, 10);

        assert_eq!(Rect::default().union(&rect), rect);
        assert_eq!(rect.union(&Rect::new(0, 0, 0, 50)), rect);
        assert_eq!(union_all(&[]), Rect::default());
        assert!(union_all(&[]).is_empty());
    }

    #[test]
    fn checked_from_origin_size_keeps_requested_size() {
        let rect = Rect::checked_from_origin_size(-100, 50, 300, 200).unwrap();

        assert_eq!(rect, Rect::from_origin_size(-100, 50, 300, 200));
        assert_eq!((rect.width(), rect.height()), (300, 200));
        assert_eq!(Rect::checked_from_origin_size(i32::MAX - 10, 0, 100, 100), None);
        assert_eq!(Rect::checked_from_origin_size(0, i32::MAX, 1, 1), None);
    }

    #[test]
    fn new_normalizes_corners() {
        assert_eq!(Rect::new(10, 20, 0, 5), Rect::new(0, 5, 10, 20));
    }

    #[test]
    fn intersect_disjoint_is_zero() {
        let a = Rect::from_origin_size(0, 0, 100, 100);
        let b = Rect::from_origin_size(100, 0, 100, 100);

        assert_eq!(a.intersect(&b), Rect::default());
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn intersect_and_relative() {
        let display = Rect::from_origin_size(1920, 0, 1920, 1080);
        let region = Rect::new(1000, 500, 2500, 1500);

        let piece = region.intersect(&display);
        assert_eq!(piece, Rect::new(1920, 500, 2500, 1080));
        assert_eq!(piece.relative_to(1920, 0), Rect::new(0, 500, 580, 1080));
    }

    #[test]
    fn contains_point_is_half_open() {
        let rect = Rect::from_origin_size(0, 0, 10, 10);

        assert!(rect.contains_point(0, 0));
        assert!(rect.contains_point(9, 9));
        assert!(!rect.contains_point(10, 0));
        assert!(!rect.contains_point(-1, 5));
    }

    #[test]
    fn display_format() {
        assert_eq!(
            Rect::from_origin_size(-1280, 0, 1280, 1024).to_string(),
            "(-1280,0)-(0,1024)"
        );
    }
}
