//! Layer: the rendering state of one view, with key-addressed animations.

use super::descriptor::{AnimatedProperty, AnimationDescriptor};
use std::collections::BTreeMap;
use std::time::Duration;

/// An animation attached to a layer, with the time it was attached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttachedAnimation {
    /// What the animation does.
    pub descriptor: AnimationDescriptor,
    /// Queue time at which the animation was added.
    pub attached_at: Duration,
}

impl AttachedAnimation {
    /// Time the animation has been running at `now`.
    pub fn elapsed(&self, now: Duration) -> Duration {
        now.saturating_sub(self.attached_at)
    }
}

/// Values a layer displays at a given moment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Presentation {
    /// Vertical offset from the laid-out frame (negative is up).
    pub translation_y: f32,
    /// Opacity in `0.0..=1.0`.
    pub opacity: f32,
}

/// Model values plus any running animations.
///
/// Adding an animation under a key that is already in use replaces it.
/// Removing a key that is not present does nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    translation_y: f32,
    opacity: f32,
    animations: BTreeMap<String, AttachedAnimation>,
}

impl Default for Layer {
    fn default() -> Self {
        Self::new()
    }
}

impl Layer {
    /// A layer at rest: no offset, fully opaque, nothing attached.
    pub const fn new() -> Self {
        Self {
            translation_y: 0.0,
            opacity: 1.0,
            animations: BTreeMap::new(),
        }
    }

    /// Model opacity.
    pub const fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Model vertical offset.
    pub const fn translation_y(&self) -> f32 {
        self.translation_y
    }

    /// Attach `descriptor` under `key`, starting at `now`.
    pub fn add_animation(&mut self, key: &str, descriptor: AnimationDescriptor, now: Duration) {
        self.animations.insert(
            key.to_string(),
            AttachedAnimation {
                descriptor,
                attached_at: now,
            },
        );
    }

    /// Detach whatever is under `key`, returning it.
    pub fn remove_animation(&mut self, key: &str) -> Option<AttachedAnimation> {
        self.animations.remove(key)
    }

    /// The animation attached under `key`, if any.
    pub fn animation(&self, key: &str) -> Option<&AttachedAnimation> {
        self.animations.get(key)
    }

    /// Keys of all attached animations, in sorted order.
    pub fn animation_keys(&self) -> impl Iterator<Item = &str> {
        self.animations.keys().map(String::as_str)
    }

    /// Whether any animation is attached.
    pub fn has_animations(&self) -> bool {
        !self.animations.is_empty()
    }

    /// Compute what the layer shows at `now`.
    ///
    /// Animations on the same property apply in key order; the last one wins.
    pub fn presentation(&self, now: Duration) -> Presentation {
        let mut shown = Presentation {
            translation_y: self.translation_y,
            opacity: self.opacity,
        };
        for attached in self.animations.values() {
            let elapsed = attached.elapsed(now);
            match attached.descriptor.property {
                AnimatedProperty::TranslationY => {
                    shown.translation_y = attached.descriptor.sample(self.translation_y, elapsed);
                }
                AnimatedProperty::Opacity => {
                    shown.opacity = attached.descriptor.sample(self.opacity, elapsed).clamp(0.0, 1.0);
                }
            }
        }
        shown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{bounce, fade};

    #[test]
    fn test_layer_at_rest() {
        let layer = Layer::new();
        let shown = layer.presentation(Duration::from_secs(3));
        assert!(shown.translation_y.abs() < f32::EPSILON);
        assert!((shown.opacity - 1.0).abs() < f32::EPSILON);
        assert!(!layer.has_animations());
    }

    #[test]
    fn test_keys_are_independent() {
        let mut layer = Layer::new();
        layer.add_animation("bounce", bounce(6.0), Duration::ZERO);
        layer.add_animation("opacity", fade(), Duration::ZERO);
        assert_eq!(layer.animation_keys().collect::<Vec<_>>(), vec!["bounce", "opacity"]);

        layer.remove_animation("bounce");
        assert!(layer.animation("bounce").is_none());
        assert!(layer.animation("opacity").is_some());
    }

    #[test]
    fn test_remove_missing_key_is_noop() {
        let mut layer = Layer::new();
        assert!(layer.remove_animation("bounce").is_none());
        assert!(!layer.has_animations());
    }

    #[test]
    fn test_same_key_replaces() {
        let mut layer = Layer::new();
        layer.add_animation("bounce", bounce(2.0), Duration::ZERO);
        layer.add_animation("bounce", bounce(9.0), Duration::from_secs(1));

        let attached = layer.animation("bounce").unwrap();
        assert_eq!(attached.attached_at, Duration::from_secs(1));
        assert_eq!(layer.animation_keys().count(), 1);
    }

    #[test]
    fn test_presentation_is_relative_to_attach_time() {
        let mut layer = Layer::new();
        layer.add_animation("bounce", bounce(4.0), Duration::from_secs(2));
        layer.add_animation("opacity", fade(), Duration::from_secs(2));

        let start = layer.presentation(Duration::from_secs(2));
        assert!(start.translation_y.abs() < 1e-4);
        assert!((start.opacity - 1.0).abs() < 1e-4);

        let peak = layer.presentation(Duration::from_millis(2500));
        assert!((peak.translation_y + 4.0).abs() < 1e-4);
        assert!((peak.opacity - 0.5).abs() < 1e-4);
    }
}
