//! Terminal module: getting rendered buffers onto a real terminal.

mod output;
mod session;

pub use output::OutputBuffer;
pub use session::{SessionKey, TerminalSession};
