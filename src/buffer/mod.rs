//! Buffer module: the cell grid widgets render into.
//!
//! This module contains:
//! - [`Cell`]: A symbol with foreground and background colors
//! - [`Buffer`]: A grid of cells
//! - [`Rgb`]: True-color representation with opacity blending

mod cell;
#[allow(clippy::module_inception)]
mod buffer;

pub use cell::{Cell, Rgb};
pub use buffer::Buffer;
