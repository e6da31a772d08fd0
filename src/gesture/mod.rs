//! Gesture interpretation.
//!
//! Split in two on purpose: [`classifier`] is a pure frame-to-mode map,
//! trivially testable in isolation, while [`interpreter`] holds the
//! session's smoothing and cooldown state.

pub mod classifier;
pub mod interpreter;
pub mod smoothing;

pub use classifier::{classify, Mode};
pub use interpreter::GestureInterpreter;
pub use smoothing::{CursorFilter, FilterState};
