//! Animation module: declarative effects attached to layers by key.
//!
//! Effects are descriptions, not running objects. A layer stores each
//! attached descriptor with the time it was added, and samples all of them
//! whenever its presentation is requested. Nothing advances on its own.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use typing_dots::animation::{bounce, EffectKind, Layer};
//!
//! let mut layer = Layer::new();
//! layer.add_animation(EffectKind::Bounce.key(), bounce(7.5), Duration::ZERO);
//!
//! let shown = layer.presentation(Duration::from_millis(500));
//! assert!((shown.translation_y + 7.5).abs() < 1e-4);
//! ```

mod descriptor;
mod layer;

pub use descriptor::{
    bounce, fade, AnimatedProperty, AnimationDescriptor, AnimationValues, EffectKind, EFFECT_DURATION, FADE_FROM,
    FADE_TO,
};
pub use layer::{AttachedAnimation, Layer, Presentation};
