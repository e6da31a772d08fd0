//! Pointer-control seam.
//!
//! The operating-system mouse primitive lives outside this crate; the
//! session drives it through [`PointerSink`]. Sink failures are per-action
//! events: the action is dropped for that frame and the loop carries on.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Mouse button for discrete click actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Button {
    Left,
    Right,
}

impl std::fmt::Display for Button {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Button::Left => write!(f, "left"),
            Button::Right => write!(f, "right"),
        }
    }
}

/// One frame's pointer command, in target-screen pixel space.
///
/// Coordinates are emitted unclamped; a fingertip just outside the active
/// region maps just off-screen, and whether to clamp is the sink's call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum PointerAction {
    MoveTo { x: f64, y: f64 },
    Click { button: Button },
}

/// Errors a pointer sink can report for a single command.
#[derive(Error, Debug)]
pub enum PointerError {
    #[error("pointer device unavailable: {0}")]
    Unavailable(String),

    #[error("pointer command rejected: {0}")]
    Rejected(String),
}

/// Absolute-coordinate pointer control.
pub trait PointerSink {
    /// Target screen resolution in pixels.
    fn screen_size(&self) -> (f64, f64);

    fn move_to(&mut self, x: f64, y: f64) -> Result<(), PointerError>;

    fn click(&mut self, button: Button) -> Result<(), PointerError>;
}

/// Sink that logs actions instead of driving a device.
///
/// Useful headless: replay, diagnostics, and tests all run against it
/// without touching the host pointer.
pub struct TracingSink {
    screen_width: f64,
    screen_height: f64,
}

impl TracingSink {
    pub fn new(screen_width: f64, screen_height: f64) -> Self {
        Self {
            screen_width,
            screen_height,
        }
    }
}

impl PointerSink for TracingSink {
    fn screen_size(&self) -> (f64, f64) {
        (self.screen_width, self.screen_height)
    }

    fn move_to(&mut self, x: f64, y: f64) -> Result<(), PointerError> {
        tracing::debug!("pointer move to ({:.1}, {:.1})", x, y);
        Ok(())
    }

    fn click(&mut self, button: Button) -> Result<(), PointerError> {
        tracing::info!("pointer {} click", button);
        Ok(())
    }
}
