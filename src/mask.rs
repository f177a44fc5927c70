//! Circular masks: clip shapes that keep dots round.
//!
//! A [`CircularMask`] turns a view's current bounds into a [`RoundedRect`]
//! whose corner radius is half the bounds height. For square bounds this is
//! a circle. Masks are derived from bounds on every layout pass and never
//! cached.

use crate::layout::Rect;
use bitflags::bitflags;

bitflags! {
    /// The set of corners a mask rounds.
    ///
    /// # Example
    /// ```
    /// use typing_dots::Corners;
    /// let top = Corners::TOP_LEFT | Corners::TOP_RIGHT;
    /// assert!(Corners::ALL.contains(top));
    /// ```
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Corners: u8 {
        /// Top-left corner
        const TOP_LEFT = 0b0001;
        /// Top-right corner
        const TOP_RIGHT = 0b0010;
        /// Bottom-left corner
        const BOTTOM_LEFT = 0b0100;
        /// Bottom-right corner
        const BOTTOM_RIGHT = 0b1000;
        /// All four corners
        const ALL = Self::TOP_LEFT.bits()
            | Self::TOP_RIGHT.bits()
            | Self::BOTTOM_LEFT.bits()
            | Self::BOTTOM_RIGHT.bits();
    }
}

impl std::fmt::Debug for Corners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

/// A rectangle with some corners rounded by a radius.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RoundedRect {
    /// The rectangle being clipped, in the view's own coordinates.
    pub rect: Rect,
    /// Requested corner radius.
    pub radius: f32,
    /// Which corners are rounded.
    pub corners: Corners,
}

impl RoundedRect {
    /// Radius actually applied: never more than half the shorter side.
    pub fn effective_radius(&self) -> f32 {
        self.radius
            .min(self.rect.width / 2.0)
            .min(self.rect.height / 2.0)
            .max(0.0)
    }

    /// True when the shape has no area.
    pub fn is_degenerate(&self) -> bool {
        self.rect.is_empty()
    }

    /// True when the shape is a full circle.
    pub fn is_circle(&self) -> bool {
        !self.is_degenerate()
            && self.corners == Corners::ALL
            && (self.rect.width - self.rect.height).abs() <= f32::EPSILON * self.rect.height.max(1.0)
            && (self.radius - self.rect.height / 2.0).abs() <= f32::EPSILON * self.rect.height.max(1.0)
    }

    /// Check if a point lies inside the clipped area.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        if self.is_degenerate() || !self.rect.contains(x, y) {
            return false;
        }

        let r = self.effective_radius();
        if r <= 0.0 {
            return true;
        }

        let Rect { x: left, y: top, .. } = self.rect;
        let (right, bottom) = (self.rect.right(), self.rect.bottom());

        // Corner circle centers, paired with the corner they round.
        let corner = if x < left + r && y < top + r {
            Some((Corners::TOP_LEFT, left + r, top + r))
        } else if x > right - r && y < top + r {
            Some((Corners::TOP_RIGHT, right - r, top + r))
        } else if x < left + r && y > bottom - r {
            Some((Corners::BOTTOM_LEFT, left + r, bottom - r))
        } else if x > right - r && y > bottom - r {
            Some((Corners::BOTTOM_RIGHT, right - r, bottom - r))
        } else {
            None
        };

        match corner {
            Some((which, cx, cy)) if self.corners.contains(which) => {
                let (dx, dy) = (x - cx, y - cy);
                dx.mul_add(dx, dy * dy) <= r * r
            }
            _ => true,
        }
    }
}

/// Produces circular clip shapes from view bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CircularMask {
    corners: Corners,
}

impl Default for CircularMask {
    fn default() -> Self {
        Self::new(Corners::ALL)
    }
}

impl CircularMask {
    /// Create a mask generator that rounds the given corners.
    pub const fn new(corners: Corners) -> Self {
        Self { corners }
    }

    /// The corners this mask rounds.
    pub const fn corners(&self) -> Corners {
        self.corners
    }

    /// Compute the clip shape for `bounds`.
    ///
    /// Radius is `height / 2`. Zero or negative heights give a degenerate,
    /// zero-radius shape.
    pub fn shape_for(&self, bounds: Rect) -> RoundedRect {
        RoundedRect {
            rect: bounds,
            radius: (bounds.height / 2.0).max(0.0),
            corners: self.corners,
        }
    }
}
