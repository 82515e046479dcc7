//! Pixel-space geometry. Origin is top-left, y grows downward.

/// A point in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Point {
    /// Horizontal offset.
    pub x: i32,
    /// Vertical offset.
    pub y: i32,
}

/// An axis-aligned pixel rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width.
    pub w: i32,
    /// Height.
    pub h: i32,
}

impl Rect {
    /// Construct a rectangle from its top-left corner and size.
    #[must_use]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Centre point, rounded toward the top-left.
    #[inline]
    #[must_use]
    pub const fn center(&self) -> Point {
        Point {
            x: self.x + self.w / 2,
            y: self.y + self.h / 2,
        }
    }

    /// The rectangle shifted by `p`.
    #[must_use]
    pub const fn offset(self, p: Point) -> Self {
        Self::new(
            self.x.saturating_add(p.x),
            self.y.saturating_add(p.y),
            self.w,
            self.h,
        )
    }
}
