//! Widget trait: what a host needs to place, lay out and draw a view.

use crate::buffer::Buffer;
use crate::layout::Rect;
use std::time::Duration;

/// A view that can be positioned, laid out and rendered to a buffer.
///
/// Geometry is in `f32` units mapped one-to-one onto buffer cells.
pub trait Widget {
    /// Get the current bounds of this widget, in buffer coordinates.
    fn bounds(&self) -> Rect;

    /// Set the bounds of this widget.
    ///
    /// Implementations run a layout pass, as a bounds change invalidates
    /// every derived frame and mask.
    fn set_bounds(&mut self, bounds: Rect);

    /// Recompute child frames and derived geometry from the current bounds.
    fn layout(&mut self);

    /// Render this widget to the given buffer as it appears at `now`.
    ///
    /// The widget should only write to cells within its bounds.
    fn render(&self, buffer: &mut Buffer, now: Duration);

    /// Check if this widget needs to be redrawn.
    ///
    /// Widgets with running animations always do.
    fn needs_redraw(&self) -> bool;

    /// Clear the redraw flag after rendering.
    fn clear_redraw(&mut self);
}
