//! `OutputBuffer`: Single-syscall output buffer for ANSI sequences.

use crate::buffer::{Buffer, Rgb};
use std::io::Write;

/// Pre-allocated buffer for building ANSI escape sequences.
///
/// A whole frame is accumulated here, then flushed in a single `write()`
/// syscall to prevent terminal flickering.
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create a new output buffer with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create a buffer sized for a typical terminal (4KB).
    pub fn new() -> Self {
        Self::with_capacity(4096)
    }

    /// Clear the buffer for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Get the buffer contents.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Move cursor to (x, y) position (1-indexed for ANSI).
    #[inline]
    pub fn cursor_move(&mut self, x: u16, y: u16) {
        // Writes into a Vec cannot fail
        let _ = write!(self.data, "\x1b[{};{}H", u32::from(y) + 1, u32::from(x) + 1);
    }

    /// Set foreground color (true color).
    #[inline]
    pub fn set_fg(&mut self, color: Rgb) {
        let _ = write!(self.data, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b);
    }

    /// Set background color (true color).
    #[inline]
    pub fn set_bg(&mut self, color: Rgb) {
        let _ = write!(self.data, "\x1b[48;2;{};{};{}m", color.r, color.g, color.b);
    }

    /// Reset all attributes.
    #[inline]
    pub fn reset_attrs(&mut self) {
        self.data.extend_from_slice(b"\x1b[0m");
    }

    /// Append a full repaint of `buffer` with its top-left at `origin`.
    ///
    /// Color sequences are only emitted when a cell's colors differ from
    /// the previous cell's.
    pub fn write_frame(&mut self, buffer: &Buffer, origin: (u16, u16)) {
        let mut fg: Option<Rgb> = None;
        let mut bg: Option<Rgb> = None;
        let mut utf8 = [0u8; 4];

        for (row, cells) in (0u16..).zip(buffer.rows()) {
            self.cursor_move(origin.0, origin.1.saturating_add(row));
            for cell in cells {
                if fg != Some(cell.fg()) {
                    self.set_fg(cell.fg());
                    fg = Some(cell.fg());
                }
                if bg != Some(cell.bg()) {
                    self.set_bg(cell.bg());
                    bg = Some(cell.bg());
                }
                self.data
                    .extend_from_slice(cell.symbol().encode_utf8(&mut utf8).as_bytes());
            }
        }
        self.reset_attrs();
    }

    /// Flush to a writer in a single syscall.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.data)?;
        writer.flush()
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}
