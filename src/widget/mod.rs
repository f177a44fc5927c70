//! Widgets: the typing indicator and the trait hosts drive it through.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use typing_dots::{Buffer, DeferredQueue, Rect, Rgb, TypingIndicator, Widget};
//!
//! let queue = DeferredQueue::new();
//! let mut indicator = TypingIndicator::new(Rect::new(0.0, 0.0, 20.0, 6.0), &queue);
//! indicator.set_dot_color(Rgb::from_u32(0x4a90d9));
//! indicator.start();
//!
//! let mut buffer = Buffer::new(20, 6);
//! queue.advance_by(Duration::from_millis(16));
//! indicator.render(&mut buffer, queue.now());
//! ```

mod config;
mod dot;
mod indicator;
mod traits;

pub use config::{IndicatorConfig, PendingPolicy, DEFAULT_BOUNCE_OFFSET};
pub use dot::Dot;
pub use indicator::{TypingIndicator, DOT_COUNT, DOT_SPACING, STAGGER};
pub use traits::Widget;
