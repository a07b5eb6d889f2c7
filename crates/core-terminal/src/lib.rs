//! Terminal collaborator: raw mode, byte input, frame output, window size.
//!
//! The editor core talks to the terminal only through the `Terminal` trait.
//! `CrosstermTerminal` is the real implementation (crossterm drives raw mode
//! and the OS size query; bytes move over stdin/stdout). `TerminalGuard`
//! restores the original mode on every exit path, including early returns
//! and unwinding.

use std::io::{self, Read, Write};
use std::ops::{Deref, DerefMut};

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use thiserror::Error;

pub mod ansi;
pub mod size;
#[cfg(any(test, feature = "scripted"))]
pub mod scripted;

pub use size::{WindowSize, parse_cursor_report, probe_window_size};

#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("raw mode: {0}")]
    RawMode(io::Error),
    #[error("read: {0}")]
    Read(io::Error),
    #[error("write: {0}")]
    Write(io::Error),
    #[error("window size: {0}")]
    WindowSize(String),
    #[error("input closed")]
    InputClosed,
}

pub trait Terminal {
    fn enter_raw_mode(&mut self) -> Result<(), TerminalError>;
    fn restore_mode(&mut self) -> Result<(), TerminalError>;
    /// Next input byte; `None` when the read returned without data.
    fn read_byte(&mut self) -> Result<Option<u8>, TerminalError>;
    /// Write `bytes` in full and flush.
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), TerminalError>;
    fn window_size(&mut self) -> Result<WindowSize, TerminalError>;
}

pub struct CrosstermTerminal {
    raw: bool,
}

impl Default for CrosstermTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl CrosstermTerminal {
    pub fn new() -> Self {
        Self { raw: false }
    }
}

impl Terminal for CrosstermTerminal {
    fn enter_raw_mode(&mut self) -> Result<(), TerminalError> {
        if !self.raw {
            enable_raw_mode().map_err(TerminalError::RawMode)?;
            self.raw = true;
            tracing::debug!(target: "terminal", "raw_mode_entered");
        }
        Ok(())
    }

    fn restore_mode(&mut self) -> Result<(), TerminalError> {
        if self.raw {
            disable_raw_mode().map_err(TerminalError::RawMode)?;
            self.raw = false;
            tracing::debug!(target: "terminal", "raw_mode_restored");
        }
        Ok(())
    }

    fn read_byte(&mut self) -> Result<Option<u8>, TerminalError> {
        let mut byte = [0u8; 1];
        match io::stdin().lock().read(&mut byte) {
            Ok(1) => Ok(Some(byte[0])),
            Ok(_) => Err(TerminalError::InputClosed),
            Err(e) if matches!(e.kind(), io::ErrorKind::Interrupted | io::ErrorKind::WouldBlock) => {
                Ok(None)
            }
            Err(e) => Err(TerminalError::Read(e)),
        }
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), TerminalError> {
        let mut out = io::stdout().lock();
        out.write_all(bytes).map_err(TerminalError::Write)?;
        out.flush().map_err(TerminalError::Write)
    }

    fn window_size(&mut self) -> Result<WindowSize, TerminalError> {
        match crossterm::terminal::size() {
            Ok((cols, rows)) if cols > 0 => Ok(WindowSize::new(rows, cols)),
            Ok(_) => probe_window_size(self),
            Err(e) => {
                tracing::debug!(target: "terminal", ?e, "window_size_query_failed");
                probe_window_size(self)
            }
        }
    }
}

impl Drop for CrosstermTerminal {
    fn drop(&mut self) {
        let _ = self.restore_mode();
    }
}

/// Best-effort restore for panic hooks: clears the screen and leaves raw
/// mode without touching any `Terminal` value.
pub fn emergency_restore() {
    let mut out = io::stdout();
    let _ = out.write_all(&ansi::clear_and_home());
    let _ = out.flush();
    let _ = disable_raw_mode();
}

/// RAII guard ensuring terminal state restoration even if the caller
/// early-returns or panics.
pub struct TerminalGuard<'a, T: Terminal + ?Sized> {
    term: &'a mut T,
    active: bool,
}

impl<'a, T: Terminal + ?Sized> TerminalGuard<'a, T> {
    /// Enter raw mode and return a guard that restores it on drop.
    pub fn enter(term: &'a mut T) -> Result<Self, TerminalError> {
        term.enter_raw_mode()?;
        Ok(Self { term, active: true })
    }

    /// Restore now, surfacing the error instead of swallowing it in `Drop`.
    pub fn restore(mut self) -> Result<(), TerminalError> {
        self.active = false;
        self.term.restore_mode()
    }
}

impl<T: Terminal + ?Sized> Deref for TerminalGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.term
    }
}

impl<T: Terminal + ?Sized> DerefMut for TerminalGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.term
    }
}

impl<T: Terminal + ?Sized> Drop for TerminalGuard<'_, T> {
    fn drop(&mut self) {
        if self.active {
            let _ = self.term.restore_mode();
        }
    }
}
