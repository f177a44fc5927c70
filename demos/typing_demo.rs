//! Typing Demo: an interactive typing indicator in the terminal.
//!
//! Keys:
//! - `space` starts or stops the animation
//! - `b` / `f` toggle bounce and fade for the next start
//! - `c` cycles the dot color
//! - `q` or `Esc` quits
//!
//! Logs go to `typing_demo.log`; set `RUST_LOG=typing_dots=trace` for detail.

use crossbeam_channel::select;
use std::fs::File;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use typing_dots::{
    Buffer, DeferredQueue, IndicatorConfig, Rect, Rgb, SessionKey, TerminalSession, TickerActor, TypingIndicator,
    Widget,
};

const WIDTH: u16 = 34;
const HEIGHT: u16 = 12;

const PALETTE: [Rgb; 4] = [
    Rgb::LIGHT_GRAY,
    Rgb::from_u32(0x4a90d9),
    Rgb::from_u32(0xe07a5f),
    Rgb::from_u32(0x81b29a),
];

fn main() -> std::io::Result<()> {
    let log = File::create("typing_demo.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("typing_dots=debug")))
        .with_writer(Mutex::new(log))
        .with_ansi(false)
        .init();

    let queue = DeferredQueue::new();
    let config = IndicatorConfig {
        bounce_offset: 2.0,
        bounce_enabled: true,
        ..IndicatorConfig::default()
    };
    let mut indicator = TypingIndicator::with_config(Rect::from_size(f32::from(WIDTH), f32::from(HEIGHT)), config, &queue);
    let mut buffer = Buffer::new(WIDTH, HEIGHT);
    let mut color = 0;

    let mut session = TerminalSession::enter(true)?;
    let ticker = TickerActor::with_fps(30);
    indicator.start();

    loop {
        select! {
            recv(ticker.receiver()) -> tick => {
                let Ok(tick) = tick else { break };
                queue.advance_to(tick.elapsed);
                if indicator.needs_redraw() {
                    let (cols, rows) = session.size()?;
                    let origin = (cols.saturating_sub(WIDTH) / 2, rows.saturating_sub(HEIGHT) / 2);
                    buffer.clear();
                    indicator.render(&mut buffer, queue.now());
                    session.draw(&buffer, origin)?;
                    indicator.clear_redraw();
                }
            }
            default(Duration::from_millis(5)) => {}
        }

        match session.poll_key(Duration::ZERO)? {
            Some(SessionKey::Quit | SessionKey::Char('q')) => break,
            Some(SessionKey::Char(' ')) => {
                if indicator.is_animating() {
                    indicator.stop();
                } else {
                    indicator.start();
                }
            }
            Some(SessionKey::Char('b')) => indicator.set_bounce_enabled(!indicator.is_bounce_enabled()),
            Some(SessionKey::Char('f')) => indicator.set_fade_enabled(!indicator.is_fade_enabled()),
            Some(SessionKey::Char('c')) => {
                color = (color + 1) % PALETTE.len();
                indicator.set_dot_color(PALETTE[color]);
            }
            _ => {}
        }
    }

    ticker.join();
    drop(session);
    Ok(())
}
