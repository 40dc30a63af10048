//! Terminal plumbing: raw mode, key mapping and the render sink.
//!
//! This is the only module that knows about crossterm events and cursor
//! control; the rest of the crate deals in `KeyInput` and `Frame`.

use crate::core::session::KeyInput;
use crate::stats::StatsSummary;
use crate::view::Frame;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{execute, queue};
use log::info;
use std::io::{self, stdout, Write};

/// A key event as the host loop sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostKey {
    Input(KeyInput),
    Resize,
    Quit,
}

/// Puts the terminal in raw mode for as long as it lives.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), Hide, Clear(ClearType::All))?;
        info!("terminal in raw mode");
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show, Print("\r\n"));
        let _ = terminal::disable_raw_mode();
    }
}

pub fn map_key(event: KeyEvent) -> Option<HostKey> {
    if event.kind != KeyEventKind::Press {
        return None;
    }

    let key = match event.code {
        KeyCode::Esc => HostKey::Quit,
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => HostKey::Quit,
        KeyCode::Char(c) => HostKey::Input(KeyInput::Char(c)),
        KeyCode::Backspace | KeyCode::Delete => HostKey::Input(KeyInput::Backspace),
        _ => HostKey::Input(KeyInput::Other),
    };
    Some(key)
}

/// Blocks until the next relevant terminal event.
pub fn read_key() -> io::Result<HostKey> {
    loop {
        match event::read()? {
            Event::Key(key) => {
                if let Some(host_key) = map_key(key) {
                    return Ok(host_key);
                }
            }
            Event::Resize(..) => return Ok(HostKey::Resize),
            _ => {}
        }
    }
}

/// Draws a frame from the top-left corner, clearing the screen first when
/// `clear` is set.
pub fn draw<W: Write>(out: &mut W, frame: &Frame, clear: bool) -> io::Result<()> {
    queue!(out, MoveTo(0, 0))?;
    if clear {
        queue!(out, Clear(ClearType::All))?;
    }
    queue!(
        out,
        Print("\r\n"),
        Print(frame.words_line()),
        Clear(ClearType::UntilNewLine),
        Print("\r\n\r\n"),
        Print(frame.input_line()),
        Clear(ClearType::UntilNewLine)
    )?;
    out.flush()
}

pub fn draw_summary<W: Write>(out: &mut W, summary: &StatsSummary) -> io::Result<()> {
    queue!(
        out,
        Print("\r\n\r\n"),
        Print(format!(
            "完了! {} words in {:.1}s, {:.1} wpm, {:.1} keys/min ({} backspaces)\r\n",
            summary.words_completed,
            summary.elapsed.as_secs_f64(),
            summary.words_per_minute,
            summary.keys_per_minute,
            summary.backspaces
        )),
        Print("Press any key to exit.\r\n")
    )?;
    out.flush()
}
