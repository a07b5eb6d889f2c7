//! Frame rendering: viewport recompute, frame assembly, and the bars.
//!
//! Every frame is a full repaint built in memory (`FrameWriter`) and handed
//! to the terminal in one write. The screen is split into the text area
//! (`viewport.screen_rows` rows), the inverse-video status bar, and the
//! message bar.
//!
//! Components:
//! - `viewport::recompute`: render column + scroll adjustment, run before
//!   every frame.
//! - `status`: status bar segments and message bar text.
//! - `compositor::Compositor`: assembles and flushes the frame.
//! - `writer::FrameWriter`: append-only byte buffer with the escape
//!   sequences the compositor needs.

pub mod compositor;
pub mod status;
pub mod viewport;
pub mod writer;

pub use compositor::{Compositor, FrameStats, RenderOptions};
pub use viewport::recompute;
pub use writer::FrameWriter;
