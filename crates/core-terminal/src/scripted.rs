//! In-memory terminal for tests: scripted input, captured output.

use std::collections::VecDeque;

use crate::{Terminal, TerminalError, WindowSize};

#[derive(Debug, Clone)]
pub struct ScriptedTerminal {
    input: VecDeque<u8>,
    writes: Vec<Vec<u8>>,
    size: Option<WindowSize>,
    raw: bool,
    restores: usize,
}

impl ScriptedTerminal {
    pub fn new(size: WindowSize) -> Self {
        Self {
            input: VecDeque::new(),
            writes: Vec::new(),
            size: Some(size),
            raw: false,
            restores: 0,
        }
    }

    /// A terminal whose size query fails, forcing callers onto the
    /// cursor-report probe.
    pub fn without_size() -> Self {
        Self {
            size: None,
            ..Self::new(WindowSize::new(0, 0))
        }
    }

    pub fn with_input(mut self, bytes: &[u8]) -> Self {
        self.input.extend(bytes);
        self
    }

    pub fn is_raw(&self) -> bool {
        self.raw
    }

    pub fn restore_count(&self) -> usize {
        self.restores
    }

    /// Every `write_bytes` call, in order.
    pub fn writes(&self) -> &[Vec<u8>] {
        &self.writes
    }

    /// All written bytes concatenated.
    pub fn output(&self) -> Vec<u8> {
        self.writes.concat()
    }
}

impl Terminal for ScriptedTerminal {
    fn enter_raw_mode(&mut self) -> Result<(), TerminalError> {
        self.raw = true;
        Ok(())
    }

    fn restore_mode(&mut self) -> Result<(), TerminalError> {
        if self.raw {
            self.raw = false;
            self.restores += 1;
        }
        Ok(())
    }

    fn read_byte(&mut self) -> Result<Option<u8>, TerminalError> {
        self.input.pop_front().map(Some).ok_or(TerminalError::InputClosed)
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), TerminalError> {
        self.writes.push(bytes.to_vec());
        Ok(())
    }

    fn window_size(&mut self) -> Result<WindowSize, TerminalError> {
        match self.size {
            Some(size) => Ok(size),
            None => crate::probe_window_size(self),
        }
    }
}
