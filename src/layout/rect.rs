//! Rect: Rectangle and size primitives for layout calculations.
//!
//! Geometry is in abstract `f32` units. Rendering maps one unit to one
//! terminal cell.

/// A width/height pair.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct Size {
    /// Width in units.
    pub width: f32,
    /// Height in units.
    pub height: f32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Zero size.
    pub const ZERO: Self = Self::new(0.0, 0.0);
}

impl std::fmt::Debug for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A rectangle defined by position and size.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X coordinate of the top-left corner.
    pub x: f32,
    /// Y coordinate of the top-left corner.
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Create a rectangle at the origin with the given size.
    #[inline]
    pub const fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Zero-sized rectangle.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Get the size of the rectangle.
    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// The same size, moved to the origin.
    ///
    /// This is what a view's own bounds look like given its frame.
    #[inline]
    #[must_use]
    pub const fn local(&self) -> Self {
        Self::from_size(self.width, self.height)
    }

    /// Check if the rectangle has no area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Get the right edge (exclusive).
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Get the bottom edge (exclusive).
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Move the rectangle by an offset.
    #[inline]
    #[must_use]
    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }
}

impl std::fmt::Debug for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rect({}, {} {}x{})", self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(2.0, 3.0, 10.0, 4.0);
        assert!((rect.right() - 12.0).abs() < f32::EPSILON);
        assert!((rect.bottom() - 7.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(0.0, 0.0, 4.0, 4.0);
        assert!(rect.contains(0.0, 0.0));
        assert!(rect.contains(3.9, 3.9));
        assert!(!rect.contains(4.0, 2.0));
    }

    #[test]
    fn test_rect_local_and_offset() {
        let rect = Rect::new(5.0, 6.0, 3.0, 2.0);
        assert_eq!(rect.local(), Rect::from_size(3.0, 2.0));
        assert_eq!(rect.offset(1.0, -1.0), Rect::new(6.0, 5.0, 3.0, 2.0));
    }

    #[test]
    fn test_rect_is_empty() {
        assert!(Rect::ZERO.is_empty());
        assert!(Rect::from_size(5.0, 0.0).is_empty());
        assert!(!Rect::from_size(1.0, 1.0).is_empty());
    }
}
