#![forbid(unsafe_code)]

//! Tessera demo: padded labels in a fixed-column grid.

pub mod canvas;
pub mod cli;
pub mod screen;

use std::fmt;
use std::io;

use tessera_layout::LayoutError;

/// Width used when stdout is not a terminal.
pub const FALLBACK_WIDTH: u16 = 80;

/// Failure while producing the demo output.
#[derive(Debug)]
pub enum DemoError {
    Layout(LayoutError),
    Io(io::Error),
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Layout(err) => write!(f, "layout failed: {err}"),
            Self::Io(err) => write!(f, "write failed: {err}"),
        }
    }
}

impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Layout(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<LayoutError> for DemoError {
    fn from(err: LayoutError) -> Self {
        Self::Layout(err)
    }
}

impl From<io::Error> for DemoError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Current terminal width, or [`FALLBACK_WIDTH`] when it cannot be queried.
pub fn terminal_width() -> u16 {
    #[cfg(not(target_arch = "wasm32"))]
    {
        match crossterm::terminal::size() {
            Ok((width, _)) if width > 0 => width,
            _ => FALLBACK_WIDTH,
        }
    }
    #[cfg(target_arch = "wasm32")]
    {
        FALLBACK_WIDTH
    }
}

/// Render the screen described by `opts` into `out`.
pub fn run<W: io::Write>(opts: &cli::Opts, out: &mut W) -> Result<(), DemoError> {
    let width = opts.width.unwrap_or_else(terminal_width);
    let mut screen = screen::Screen::from_opts(opts);
    let frame = screen.render(width)?;
    frame.canvas.write_to(out)?;
    out.flush()?;
    Ok(())
}
