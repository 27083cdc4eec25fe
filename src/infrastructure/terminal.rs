// Crossterm input adapter and raw-mode guard
use crate::application::input_watcher::InputWatcher;
use anyhow::Context;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::time::Duration;

/// Keyboard watcher for the controlling terminal.
///
/// The value itself is the raw-mode guard: `acquire` switches the terminal
/// into raw mode and `Drop` restores the previous mode, so the mode is
/// released on every exit path, panics included.
pub struct TerminalInput {
    _raw_mode: (),
}

impl TerminalInput {
    pub fn acquire() -> anyhow::Result<Self> {
        enable_raw_mode().context("failed to switch terminal into raw mode")?;
        Ok(Self { _raw_mode: () })
    }
}

impl Drop for TerminalInput {
    fn drop(&mut self) {
        // Nothing sensible to do with a failure while tearing down.
        let _ = disable_raw_mode();
    }
}

impl InputWatcher for TerminalInput {
    fn poll_quit(&mut self) -> anyhow::Result<bool> {
        if !event::poll(Duration::ZERO).context("failed to poll terminal input")? {
            return Ok(false);
        }
        match event::read().context("failed to read terminal input")? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(is_quit_key(&key)),
            _ => Ok(false),
        }
    }
}

/// `q`/`Q` quits; so does Ctrl+C, which raw mode delivers as a key event
/// instead of a signal.
fn is_quit_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        KeyCode::Char('c') | KeyCode::Char('C') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
