//! Editor runtime: bootstrap and the main loop.
//!
//! Each iteration runs, in strict sequence:
//! 1. viewport recompute (render column + scroll),
//! 2. compose and flush one frame,
//! 3. block on one input byte,
//! 4. translate and dispatch it.
//!
//! Steps 1 and 2 are skipped when the previous key left the state
//! unchanged. An idle wakeup always repaints.
//!
//! The loop ends when a dispatch requests quit. Every exit path, including
//! errors, clears the screen and restores the terminal mode before the
//! outcome is returned.

use anyhow::{Context, Result};
use core_actions::{load_file, step};
use core_config::Config;
use core_events::{InputEvent, Key};
use core_render::{Compositor, RenderOptions, recompute};
use core_state::{EditorState, Mode, Viewport};
use core_terminal::{Terminal, TerminalGuard, ansi};
use core_text::LineBuffer;
use std::fmt;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

pub const HELP_MESSAGE: &str = ":q to quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownReason {
    /// `:q` (possibly after `:w`) from the command line.
    CommandQuit,
    /// The Normal-mode quit combo.
    ActionQuit,
}

impl ShutdownReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShutdownReason::CommandQuit => "command_quit",
            ShutdownReason::ActionQuit => "action_quit",
        }
    }
}

impl fmt::Display for ShutdownReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn log_shutdown_stage(reason: Option<ShutdownReason>, stage: &'static str) {
    info!(
        target: "runtime.shutdown",
        reason = reason.map_or("error", |r| r.as_str()),
        stage = stage,
        "shutdown_stage"
    );
}

enum KeyOutcome {
    /// Keep going; `redraw` is false when the key changed nothing visible.
    Continue { redraw: bool },
    Shutdown(ShutdownReason),
}

pub struct EditorRuntime {
    state: EditorState,
    compositor: Compositor,
}

impl EditorRuntime {
    pub fn new(state: EditorState, compositor: Compositor) -> Self {
        Self { state, compositor }
    }

    /// Size the viewport from the terminal, load `path` if given, and set
    /// the startup help message.
    pub fn bootstrap<T: Terminal + ?Sized>(
        term: &mut T,
        path: Option<&Path>,
        config: &Config,
    ) -> Result<Self> {
        let size = term.window_size().context("query window size")?;
        let viewport = Viewport::from_window(usize::from(size.rows), usize::from(size.cols));
        let tab_stop = config.effective_tab_stop();
        let buffer = match path {
            Some(p) => load_file(p, tab_stop).with_context(|| format!("open {}", p.display()))?,
            None => LineBuffer::new(tab_stop),
        };
        let mut state = EditorState::new(buffer, viewport);
        if let Some(p) = path {
            state = state.with_file_name(p);
        }
        state.set_status(HELP_MESSAGE);
        let path_str = path.map(|p| p.display().to_string());
        let config_str = config.source.as_ref().map(|p| p.display().to_string());
        info!(
            target: "runtime.startup",
            path = path_str.as_deref(),
            rows = state.num_rows(),
            screen_rows = viewport.screen_rows,
            screen_cols = viewport.screen_cols,
            tab_stop,
            config = config_str.as_deref(),
            "bootstrap_complete"
        );
        let compositor = Compositor::new(RenderOptions {
            message_sustain: config.message_sustain(),
            ..RenderOptions::default()
        });
        Ok(Self::new(state, compositor))
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn run<T: Terminal + ?Sized>(&mut self, term: &mut T) -> Result<ShutdownReason> {
        let span = tracing::debug_span!(target: "runtime", "event_loop");
        let _enter_loop = span.enter();
        let mut dirty = true;
        let mut frames = 0usize;
        let mut frame_bytes = 0usize;
        let outcome = loop {
            if dirty {
                recompute(&mut self.state);
                let stats = self
                    .compositor
                    .render(&self.state, term, Instant::now())
                    .context("render frame")?;
                frames += 1;
                frame_bytes += stats.bytes;
            }
            let event = InputEvent::from(term.read_byte().context("read input")?);
            // An idle wakeup repaints so an expired status message disappears.
            let InputEvent::Key(key) = event else {
                dirty = true;
                continue;
            };
            match self.handle_key(key) {
                KeyOutcome::Continue { redraw } => dirty = redraw,
                KeyOutcome::Shutdown(reason) => break reason,
            }
        };
        debug!(target: "runtime", frames, frame_bytes, "event_loop_exit");
        Ok(outcome)
    }

    fn handle_key(&mut self, key: Key) -> KeyOutcome {
        let from_command = matches!(self.state.mode, Mode::Command(_));
        let result = step(&mut self.state, key);
        if !result.quit {
            return KeyOutcome::Continue {
                redraw: result.dirty,
            };
        }
        debug!(target: "runtime", %key, "quit_dispatched");
        KeyOutcome::Shutdown(if from_command {
            ShutdownReason::CommandQuit
        } else {
            ShutdownReason::ActionQuit
        })
    }
}

/// Run a whole session on `term`: raw mode, bootstrap, loop, teardown.
pub fn run<T: Terminal + ?Sized>(
    term: &mut T,
    path: Option<&Path>,
    config: &Config,
) -> Result<ShutdownReason> {
    let mut guard = TerminalGuard::enter(term).context("enter raw mode")?;
    let outcome = EditorRuntime::bootstrap(&mut *guard, path, config)
        .and_then(|mut runtime| runtime.run(&mut *guard));

    let reason = outcome.as_ref().ok().copied();
    log_shutdown_stage(reason, "begin");
    let cleared = guard.write_bytes(&ansi::clear_and_home());
    let restored = guard.restore();
    log_shutdown_stage(reason, "complete");

    let reason = outcome?;
    restored.context("restore terminal mode")?;
    cleared.context("clear screen")?;
    Ok(reason)
}
