//! Layout module: Geometry primitives and the stack container.
//!
//! Layout is recomputed from scratch on every pass. There is no constraint
//! solver: a stack turns its frame and its items into child frames directly.

mod rect;
mod stack;

pub use rect::{Rect, Size};
pub use stack::{Alignment, ArrangedItem, Axis, Distribution, StackContainer};
