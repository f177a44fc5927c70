//! `TerminalSession`: raw-mode terminal setup and teardown.

use super::output::OutputBuffer;
use crate::buffer::Buffer;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::debug;

/// Keys a session reports to its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKey {
    /// A printable character.
    Char(char),
    /// Escape, or Ctrl+C.
    Quit,
}

/// A terminal in raw mode, optionally on the alternate screen.
///
/// Dropping the session restores the terminal.
pub struct TerminalSession {
    stdout: Stdout,
    output: OutputBuffer,
    alternate_screen: bool,
}

impl TerminalSession {
    /// Enter raw mode, hide the cursor and optionally switch screens.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup fails.
    pub fn enter(alternate_screen: bool) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        if alternate_screen {
            execute!(stdout, EnterAlternateScreen)?;
        }
        execute!(stdout, cursor::Hide, terminal::Clear(terminal::ClearType::All))?;
        debug!(alternate_screen, "typing:terminal session entered");

        Ok(Self {
            stdout,
            output: OutputBuffer::new(),
            alternate_screen,
        })
    }

    /// Current terminal size in columns and rows.
    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Repaint `buffer` at `origin` in one write.
    pub fn draw(&mut self, buffer: &Buffer, origin: (u16, u16)) -> io::Result<()> {
        self.output.clear();
        self.output.write_frame(buffer, origin);
        self.output.flush_to(&mut self.stdout)
    }

    /// Wait up to `timeout` for a key press.
    pub fn poll_key(&self, timeout: Duration) -> io::Result<Option<SessionKey>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        let key = match event::read()? {
            Event::Key(KeyEvent {
                code,
                modifiers,
                kind: KeyEventKind::Press,
                ..
            }) => match code {
                KeyCode::Esc => Some(SessionKey::Quit),
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(SessionKey::Quit),
                KeyCode::Char(c) => Some(SessionKey::Char(c)),
                _ => None,
            },
            _ => None,
        };
        Ok(key)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, cursor::Show);
        if self.alternate_screen {
            let _ = execute!(self.stdout, LeaveAlternateScreen);
        }
        let _ = terminal::disable_raw_mode();
        debug!("typing:terminal session restored");
    }
}
