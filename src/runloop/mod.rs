//! Run loop: deferred callbacks and frame pacing.
//!
//! Widgets are single-threaded. They schedule delayed work on a
//! [`DeferredQueue`], which only moves when the UI thread advances it. A
//! [`TickerActor`] thread supplies the wall-clock ticks that drive it:
//!
//! ```text
//! ┌───────────────┐     Tick      ┌──────────────────────────────┐
//! │ Ticker Thread │ ────────────▶ │ UI thread                    │
//! └───────────────┘               │  queue.advance_to(elapsed)   │
//!                                 │  widget.render(buf, elapsed) │
//!                                 └──────────────────────────────┘
//! ```

mod queue;
mod ticker;

pub use queue::{DeferredQueue, TaskId};
pub use ticker::{Tick, TickerActor};
