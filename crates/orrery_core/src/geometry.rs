//! Screen-space geometry
//!
//! Integer pixel rectangles and the viewport they are laid out in.

/// Axis-aligned rectangle in screen pixels (origin top-left, y down)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Horizontal centre, rounded toward the top-left like the pixel grid
    #[inline]
    pub fn center_x(&self) -> i32 {
        self.x + self.width / 2
    }

    /// Vertical centre, rounded toward the top-left like the pixel grid
    #[inline]
    pub fn center_y(&self) -> i32 {
        self.y + self.height / 2
    }
}

/// Drawable area size in pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Create a new viewport
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Centre point of the viewport
    #[inline]
    pub fn center(&self) -> (i32, i32) {
        (self.width as i32 / 2, self.height as i32 / 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_center_uses_integer_halves() {
        let rect = Rect::new(369, 492, 15, 15);
        assert_eq!(rect.center_x(), 376);
        assert_eq!(rect.center_y(), 499);
    }

    #[test]
    fn test_viewport_center() {
        assert_eq!(Viewport::new(1920, 1080).center(), (960, 540));
        assert_eq!(Viewport::new(1001, 7).center(), (500, 3));
    }
}
