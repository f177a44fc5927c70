//! # Typing Dots
//!
//! A "someone is typing" indicator: three dots that bounce and fade in a
//! staggered wave, rendered into a terminal cell buffer.
//!
//! ## Core Concepts
//!
//! - **Stack layout**: the dots share the width equally, stay square, and
//!   are centered vertically
//! - **Circular masks**: each dot is clipped to a circle recomputed from its
//!   bounds on every layout pass
//! - **Keyed animations**: bounce and fade are declarative descriptors
//!   attached to a dot's layer under independent keys
//! - **Deferred queue**: `start` staggers attachment through a
//!   single-threaded queue on a virtual clock; a ticker thread drives it
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//! use typing_dots::{DeferredQueue, EffectKind, Rect, TypingIndicator};
//!
//! let queue = DeferredQueue::new();
//! let mut indicator = TypingIndicator::new(Rect::new(0.0, 0.0, 40.0, 12.0), &queue);
//! indicator.set_bounce_enabled(true);
//! indicator.start();
//!
//! // Dot 2 attaches 0.66s after start
//! queue.advance_by(Duration::from_millis(660));
//! assert!(indicator.dots()[2].has_effect(EffectKind::Bounce));
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod animation;
pub mod buffer;
pub mod error;
pub mod layout;
pub mod mask;
pub mod runloop;
pub mod terminal;
pub mod widget;

// Re-exports for convenience
pub use animation::{AnimationDescriptor, EffectKind, Layer};
pub use buffer::{Buffer, Cell, Rgb};
pub use error::ConfigError;
pub use layout::{Rect, Size, StackContainer};
pub use mask::{CircularMask, Corners, RoundedRect};
pub use runloop::{DeferredQueue, Tick, TickerActor};
pub use terminal::{OutputBuffer, SessionKey, TerminalSession};
pub use widget::{Dot, IndicatorConfig, PendingPolicy, TypingIndicator, Widget};
