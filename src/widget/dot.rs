//! Dot: one circular element of the typing indicator.

use crate::animation::{AnimationDescriptor, EffectKind, Layer, Presentation};
use crate::buffer::{Buffer, Rgb};
use crate::layout::{ArrangedItem, Rect};
use crate::mask::{CircularMask, RoundedRect};
use std::time::Duration;

/// A circular view with a fill color and its own animation layer.
///
/// Frames and masks are owned by layout: a dot's frame is whatever the
/// indicator's stack last assigned, and its mask is recomputed from that
/// frame on every pass.
#[derive(Debug, PartialEq)]
pub struct Dot {
    index: usize,
    color: Rgb,
    frame: Rect,
    mask: RoundedRect,
    layer: Layer,
}

impl Dot {
    pub(crate) fn new(index: usize, color: Rgb) -> Self {
        Self {
            index,
            color,
            frame: Rect::ZERO,
            mask: RoundedRect::default(),
            layer: Layer::new(),
        }
    }

    /// How the dot participates in a stack: always square.
    pub(crate) const fn arranged_item() -> ArrangedItem {
        ArrangedItem::square()
    }

    /// Position in the indicator (0, 1 or 2).
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Fill color.
    pub const fn color(&self) -> Rgb {
        self.color
    }

    pub(crate) fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    /// Frame within the indicator's container.
    pub const fn frame(&self) -> Rect {
        self.frame
    }

    /// Clip shape from the last layout pass, in the dot's own coordinates.
    pub const fn mask(&self) -> &RoundedRect {
        &self.mask
    }

    /// The dot's rendering layer.
    pub const fn layer(&self) -> &Layer {
        &self.layer
    }

    /// Whether `kind` is currently attached.
    pub fn has_effect(&self, kind: EffectKind) -> bool {
        self.layer.animation(kind.key()).is_some()
    }

    /// Effects currently attached, bounce first.
    pub fn effects(&self) -> Vec<EffectKind> {
        self.layer.animation_keys().filter_map(EffectKind::from_key).collect()
    }

    /// Queue time at which `kind` was attached.
    pub fn effect_attached_at(&self, kind: EffectKind) -> Option<Duration> {
        self.layer.animation(kind.key()).map(|a| a.attached_at)
    }

    pub(crate) fn attach(&mut self, kind: EffectKind, descriptor: AnimationDescriptor, now: Duration) {
        self.layer.add_animation(kind.key(), descriptor, now);
    }

    pub(crate) fn detach(&mut self, kind: EffectKind) {
        self.layer.remove_animation(kind.key());
    }

    /// Apply a new frame and recompute the mask from the new bounds.
    pub(crate) fn apply_frame(&mut self, frame: Rect, mask: &CircularMask) {
        self.frame = frame;
        self.mask = mask.shape_for(frame.local());
    }

    /// Paint the dot into `buffer` as it appears at `now`.
    ///
    /// `origin` is the buffer position of the container's top-left corner.
    /// A cell is painted when its center falls inside the mask after the
    /// layer's vertical translation.
    #[allow(clippy::cast_possible_truncation)]
    #[allow(clippy::cast_sign_loss)]
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn render(&self, buffer: &mut Buffer, origin: (f32, f32), clip: Rect, now: Duration) {
        if self.mask.is_degenerate() {
            return;
        }
        let Presentation { translation_y, opacity } = self.layer.presentation(now);
        let screen = self.frame.offset(origin.0, origin.1 + translation_y);

        let first_col = screen.x.max(clip.x).max(0.0).floor() as u16;
        let first_row = screen.y.max(clip.y).max(0.0).floor() as u16;
        let last_col = screen.right().min(clip.right()).ceil().max(0.0) as u16;
        let last_row = screen.bottom().min(clip.bottom()).ceil().max(0.0) as u16;

        for row in first_row..last_row {
            for col in first_col..last_col {
                let (cx, cy) = (f32::from(col) + 0.5, f32::from(row) + 0.5);
                if !clip.contains(cx, cy) {
                    continue;
                }
                if self.mask.contains(cx - screen.x, cy - screen.y) {
                    buffer.paint_bg(col, row, self.color, opacity);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::fade;

    #[test]
    fn test_apply_frame_recomputes_mask() {
        let mut dot = Dot::new(0, Rgb::WHITE);
        let mask = CircularMask::default();

        dot.apply_frame(Rect::new(3.0, 1.0, 6.0, 6.0), &mask);
        assert!(dot.mask().is_circle());
        assert_eq!(dot.mask().rect, Rect::from_size(6.0, 6.0));

        dot.apply_frame(Rect::new(0.0, 0.0, 2.0, 2.0), &mask);
        assert!((dot.mask().radius - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_attach_and_detach() {
        let mut dot = Dot::new(1, Rgb::WHITE);
        dot.attach(EffectKind::Fade, fade(), Duration::from_millis(330));
        assert!(dot.has_effect(EffectKind::Fade));
        assert!(!dot.has_effect(EffectKind::Bounce));
        assert_eq!(dot.effects(), vec![EffectKind::Fade]);
        assert_eq!(dot.effect_attached_at(EffectKind::Fade), Some(Duration::from_millis(330)));

        dot.detach(EffectKind::Fade);
        dot.detach(EffectKind::Bounce);
        assert!(dot.effects().is_empty());
    }

    #[test]
    fn test_render_paints_inside_mask_only() {
        let mut dot = Dot::new(0, Rgb::WHITE);
        dot.apply_frame(Rect::from_size(6.0, 6.0), &CircularMask::default());

        let mut buffer = Buffer::new(8, 8);
        dot.render(&mut buffer, (0.0, 0.0), Rect::from_size(8.0, 8.0), Duration::ZERO);

        assert_eq!(buffer.get(3, 3).unwrap().bg(), Rgb::WHITE);
        assert_eq!(buffer.get(0, 0).unwrap().bg(), Rgb::BLACK);
        assert_eq!(buffer.get(7, 3).unwrap().bg(), Rgb::BLACK);
    }

    #[test]
    fn test_render_respects_clip() {
        let mut dot = Dot::new(0, Rgb::WHITE);
        dot.apply_frame(Rect::from_size(6.0, 6.0), &CircularMask::default());

        let mut buffer = Buffer::new(8, 8);
        dot.render(&mut buffer, (0.0, 0.0), Rect::from_size(3.0, 8.0), Duration::ZERO);

        assert_eq!(buffer.get(2, 3).unwrap().bg(), Rgb::WHITE);
        assert_eq!(buffer.get(3, 3).unwrap().bg(), Rgb::BLACK);
    }
}
