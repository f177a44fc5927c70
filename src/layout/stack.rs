//! Stack: A one-axis container that arranges child frames.
//!
//! Like the rest of the layout module, arrangement is a pure function of the
//! container's frame and its items. Nothing is cached between passes.

use super::rect::{Rect, Size};

/// Main axis of a stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    /// Items laid out left to right.
    #[default]
    Horizontal,
    /// Items laid out top to bottom.
    Vertical,
}

/// Cross-axis placement of items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Items stretch to the container's cross length.
    #[default]
    Fill,
    /// Items sit at the start of the cross axis (top or left).
    Leading,
    /// Items are centered on the cross axis.
    Center,
    /// Items sit at the end of the cross axis (bottom or right).
    Trailing,
}

/// How main-axis space is shared between items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Distribution {
    /// Every item gets the same main-axis length.
    #[default]
    FillEqually,
    /// Items keep their intrinsic length; leftover space goes between them.
    EqualSpacing,
}

/// A child managed by a stack.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ArrangedItem {
    /// Size the item would like when nothing else constrains it.
    pub intrinsic: Size,
    /// Standing `width / height` constraint, if any.
    pub aspect_ratio: Option<f32>,
}

impl ArrangedItem {
    /// An item with an intrinsic size and no aspect constraint.
    pub const fn new(intrinsic: Size) -> Self {
        Self {
            intrinsic,
            aspect_ratio: None,
        }
    }

    /// An item whose width must always equal its height.
    pub const fn square() -> Self {
        Self {
            intrinsic: Size::ZERO,
            aspect_ratio: Some(1.0),
        }
    }

    fn main_length(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.intrinsic.width,
            Axis::Vertical => self.intrinsic.height,
        }
    }

    fn cross_length(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.intrinsic.height,
            Axis::Vertical => self.intrinsic.width,
        }
    }

    /// Cross length implied by the aspect constraint for a given main length.
    fn constrained_cross(&self, axis: Axis, main: f32) -> Option<f32> {
        let ratio = self.aspect_ratio.filter(|r| r.is_finite() && *r > 0.0)?;
        Some(match axis {
            Axis::Horizontal => main / ratio,
            Axis::Vertical => main * ratio,
        })
    }
}

/// A container that lays its items out along one axis.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StackContainer {
    /// Frame of the container in its parent's coordinates.
    pub frame: Rect,
    /// Main axis.
    pub axis: Axis,
    /// Cross-axis alignment.
    pub alignment: Alignment,
    /// Main-axis distribution.
    pub distribution: Distribution,
    /// Gap between adjacent items (minimum gap for `EqualSpacing`).
    pub spacing: f32,
}

impl StackContainer {
    /// Create a stack with the given axis, alignment and distribution.
    pub fn new(axis: Axis, alignment: Alignment, distribution: Distribution) -> Self {
        Self {
            frame: Rect::ZERO,
            axis,
            alignment,
            distribution,
            spacing: 0.0,
        }
    }

    /// Compute frames for `items`, in the container's own coordinates.
    ///
    /// The result has one frame per item, in the same order.
    #[allow(clippy::cast_precision_loss)]
    pub fn arrange(&self, items: &[ArrangedItem]) -> Vec<Rect> {
        if items.is_empty() {
            return Vec::new();
        }

        let (main_total, cross_total) = match self.axis {
            Axis::Horizontal => (self.frame.width, self.frame.height),
            Axis::Vertical => (self.frame.height, self.frame.width),
        };
        let count = items.len() as f32;
        let spacing = self.spacing.max(0.0);

        // Main-axis lengths and the gap between items.
        let (lengths, gap): (Vec<f32>, f32) = match self.distribution {
            Distribution::FillEqually => {
                let each = ((main_total - spacing * (count - 1.0)) / count).max(0.0);
                (vec![each; items.len()], spacing)
            }
            Distribution::EqualSpacing => {
                let lengths: Vec<f32> = items.iter().map(|i| i.main_length(self.axis).max(0.0)).collect();
                let used: f32 = lengths.iter().sum();
                let gap = if items.len() > 1 {
                    ((main_total - used) / (count - 1.0)).max(spacing)
                } else {
                    0.0
                };
                (lengths, gap)
            }
        };

        let mut cursor = 0.0_f32;
        items
            .iter()
            .zip(lengths)
            .map(|(item, main)| {
                let cross = item.constrained_cross(self.axis, main).unwrap_or(match self.alignment {
                    Alignment::Fill => cross_total,
                    _ => item.cross_length(self.axis),
                });
                let cross_pos = match self.alignment {
                    Alignment::Fill | Alignment::Leading => 0.0,
                    Alignment::Center => (cross_total - cross) / 2.0,
                    Alignment::Trailing => cross_total - cross,
                };
                let main_pos = cursor;
                cursor += main + gap;
                match self.axis {
                    Axis::Horizontal => Rect::new(main_pos, cross_pos, main, cross),
                    Axis::Vertical => Rect::new(cross_pos, main_pos, cross, main),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    fn dots_stack(width: f32, height: f32, spacing: f32) -> StackContainer {
        let mut stack = StackContainer::new(Axis::Horizontal, Alignment::Center, Distribution::FillEqually);
        stack.frame = Rect::from_size(width, height);
        stack.spacing = spacing;
        stack
    }

    #[test]
    fn test_fill_equally_horizontal() {
        let stack = dots_stack(40.0, 20.0, 5.0);
        let frames = stack.arrange(&[ArrangedItem::square(); 3]);

        assert_eq!(frames.len(), 3);
        // (40 - 2 * 5) / 3 = 10
        for (i, frame) in frames.iter().enumerate() {
            assert!(approx(frame.width, 10.0));
            assert!(approx(frame.height, 10.0));
            assert!(approx(frame.y, 5.0), "centered vertically");
            #[allow(clippy::cast_precision_loss)]
            let expected_x = i as f32 * 15.0;
            assert!(approx(frame.x, expected_x));
        }
    }

    #[test]
    fn test_fill_equally_never_negative() {
        let stack = dots_stack(4.0, 10.0, 5.0);
        let frames = stack.arrange(&[ArrangedItem::square(); 3]);
        for frame in frames {
            assert!(frame.width >= 0.0);
            assert!(approx(frame.width, frame.height));
        }
    }

    #[test]
    fn test_fill_alignment_without_aspect() {
        let mut stack = StackContainer::new(Axis::Horizontal, Alignment::Fill, Distribution::FillEqually);
        stack.frame = Rect::from_size(30.0, 8.0);
        let frames = stack.arrange(&[ArrangedItem::new(Size::new(1.0, 1.0)); 2]);
        assert!(approx(frames[0].height, 8.0));
        assert!(approx(frames[1].x, 15.0));
    }

    #[test]
    fn test_equal_spacing_distribution() {
        let mut stack = StackContainer::new(Axis::Horizontal, Alignment::Leading, Distribution::EqualSpacing);
        stack.frame = Rect::from_size(20.0, 4.0);
        stack.spacing = 1.0;
        let frames = stack.arrange(&[ArrangedItem::new(Size::new(4.0, 2.0)); 3]);
        // Leftover 8 units split over 2 gaps
        assert!(approx(frames[1].x, 8.0));
        assert!(approx(frames[2].x, 16.0));
        assert!(approx(frames[0].y, 0.0));
    }

    #[test]
    fn test_vertical_trailing() {
        let mut stack = StackContainer::new(Axis::Vertical, Alignment::Trailing, Distribution::FillEqually);
        stack.frame = Rect::from_size(10.0, 20.0);
        let frames = stack.arrange(&[ArrangedItem::square(); 2]);
        assert!(approx(frames[0].height, 10.0));
        assert!(approx(frames[0].x, 0.0));
        assert!(approx(frames[1].y, 10.0));
    }

    #[test]
    fn test_empty_items() {
        assert!(dots_stack(10.0, 10.0, 5.0).arrange(&[]).is_empty());
    }
}
