// Screen-space geometry primitives. All coordinates are physical pixels:
// x grows rightward, y grows downward.

/// A point in screen-pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An immutable left/top/right/bottom rectangle.
///
/// Rectangles are constructed fresh from live UI state for every query and
/// never cached across calls — the underlying geometry can change between
/// invocations. Zero-width and zero-height rectangles are legal; some
/// controls report degenerate bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    /// Build from edge coordinates, normalizing so that `left <= right` and
    /// `top <= bottom` always hold.
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left: left.min(right),
            top: top.min(bottom),
            right: left.max(right),
            bottom: top.max(bottom),
        }
    }

    /// Build from an origin plus extent, the shape most window systems report.
    pub fn from_ltwh(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self::new(left, top, left + width, top + height)
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Integer midpoint of the rectangle.
    pub fn center(&self) -> Point {
        Point::new((self.left + self.right) / 2, (self.top + self.bottom) / 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_normalizes_swapped_edges() {
        let rect = Rect::new(200, 120, 100, 100);
        assert_eq!(rect.left, 100);
        assert_eq!(rect.top, 100);
        assert_eq!(rect.right, 200);
        assert_eq!(rect.bottom, 120);
    }

    #[test]
    fn from_ltwh_matches_edges() {
        let rect = Rect::from_ltwh(100, 100, 100, 20);
        assert_eq!(rect, Rect::new(100, 100, 200, 120));
        assert_eq!(rect.width(), 100);
        assert_eq!(rect.height(), 20);
    }

    #[test]
    fn center_uses_integer_midpoint() {
        let rect = Rect::new(100, 100, 200, 120);
        assert_eq!(rect.center(), Point::new(150, 110));
        // odd extents truncate toward the origin
        let odd = Rect::new(0, 0, 5, 3);
        assert_eq!(odd.center(), Point::new(2, 1));
    }

    #[test]
    fn degenerate_rect_is_legal() {
        let rect = Rect::new(50, 50, 50, 50);
        assert_eq!(rect.width(), 0);
        assert_eq!(rect.height(), 0);
        assert_eq!(rect.center(), Point::new(50, 50));
    }
}
