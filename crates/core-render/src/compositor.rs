//! Frame compositor.
//!
//! Builds one complete frame from the editor state and flushes it in a
//! single write. Frame layout, top to bottom:
//!
//! ```text
//! ESC[?25l ESC[H
//! screen_rows text rows, each followed by ESC[K \r\n
//! ESC[7m status bar ESC[m \r\n
//! ESC[K message bar
//! ESC[<row>;<col>H ESC[?25h
//! ```
//!
//! Rows past the end of the document show `~`. An empty document shows the
//! welcome banner centered on row `screen_rows / 3`.

use std::time::{Duration, Instant};

use anyhow::Context;
use core_state::{DEFAULT_MESSAGE_SUSTAIN, EditorState, Mode};
use core_terminal::Terminal;

use crate::status::{StatusContext, compose_message_bar, compose_status_bar};
use crate::writer::FrameWriter;

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub welcome: String,
    pub message_sustain: Duration,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            welcome: format!("Bon Jour -- version {}", env!("CARGO_PKG_VERSION")),
            message_sustain: DEFAULT_MESSAGE_SUSTAIN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameStats {
    pub bytes: usize,
    pub elapsed: Duration,
}

#[derive(Debug, Default)]
pub struct Compositor {
    options: RenderOptions,
}

impl Compositor {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Assemble the frame for `state` without writing it anywhere.
    pub fn compose(&self, state: &EditorState, now: Instant) -> FrameWriter {
        let vp = &state.viewport;
        let mut w = FrameWriter::with_capacity((vp.screen_rows + 2) * (vp.screen_cols + 8));
        w.hide_cursor();
        w.home();
        self.draw_rows(state, &mut w);
        draw_status_bar(state, &mut w);
        let message = state.fresh_status(now, self.options.message_sustain);
        w.clear_line();
        w.print(&compose_message_bar(&state.mode, message, vp.screen_cols));
        let (row, col) = cursor_target(state);
        w.move_to(row, col);
        w.show_cursor();
        w
    }

    /// Compose and flush one frame.
    pub fn render<T: Terminal + ?Sized>(
        &self,
        state: &EditorState,
        term: &mut T,
        now: Instant,
    ) -> anyhow::Result<FrameStats> {
        let start = Instant::now();
        let frame = self.compose(state, now);
        let bytes = frame.flush(term).context("flush frame")?;
        let elapsed = start.elapsed();
        tracing::trace!(
            target: "render",
            bytes,
            elapsed_us = elapsed.as_micros() as u64,
            "frame"
        );
        Ok(FrameStats { bytes, elapsed })
    }

    fn draw_rows(&self, state: &EditorState, w: &mut FrameWriter) {
        let vp = &state.viewport;
        let num_rows = state.num_rows();
        for y in 0..vp.screen_rows {
            let line = y + vp.row_offset;
            match state.buffer.row(line) {
                Some(row) => w.print(row.render_slice(vp.col_offset, vp.screen_cols)),
                None if num_rows == 0 && y == vp.screen_rows / 3 => {
                    self.draw_welcome(vp.screen_cols, w)
                }
                None => w.print(b"~"),
            }
            w.clear_line();
            w.newline();
        }
    }

    fn draw_welcome(&self, cols: usize, w: &mut FrameWriter) {
        let banner = self.options.welcome.as_bytes();
        let banner = &banner[..banner.len().min(cols)];
        let mut padding = (cols - banner.len()) / 2;
        if padding > 0 {
            w.print(b"~");
            padding -= 1;
        }
        w.print(&b" ".repeat(padding));
        w.print(banner);
    }
}

fn draw_status_bar(state: &EditorState, w: &mut FrameWriter) {
    let line = match state.mode.command_line() {
        Some(cmd) => cmd.saved().line,
        None => state.cursor.line,
    };
    let ctx = StatusContext {
        file_name: state.file_name.as_deref(),
        num_rows: state.num_rows(),
        line,
    };
    w.inverse(true);
    w.print(&compose_status_bar(&ctx, state.viewport.screen_cols));
    w.inverse(false);
    w.newline();
}

/// 1-indexed terminal position for the cursor. In Command mode the cursor
/// sits on the message bar just past the echoed command.
fn cursor_target(state: &EditorState) -> (usize, usize) {
    let vp = &state.viewport;
    match &state.mode {
        Mode::Command(cmd) => {
            let col = (2 + cmd.len()).min(vp.screen_cols.max(1));
            (vp.screen_rows + 2, col)
        }
        _ => (
            state.cursor.line.saturating_sub(vp.row_offset) + 1,
            state.cursor.render_column.saturating_sub(vp.col_offset) + 1,
        ),
    }
}
