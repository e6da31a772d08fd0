//! Gesture-mouse - hand-gesture pointer control.
//!
//! Turns a per-frame hand-landmark stream into cursor motion and debounced
//! click events. Each frame flows through a fixed pipeline: a pure
//! classifier picks the frame's control mode from the finger-up vector,
//! then a stateful interpreter applies exponential cursor smoothing and
//! per-button cooldowns and emits at most one pointer action.
//!
//! Camera capture, the landmark detector, and the OS pointer are external
//! collaborators behind the [`capture`], [`tracking`], and [`pointer`]
//! seams; [`session`] runs the synchronous per-frame loop across them, and
//! [`processing`] replays recorded traces offline.

pub mod capture;
pub mod config;
pub mod gesture;
pub mod pointer;
pub mod processing;
pub mod session;
pub mod tracking;

pub use config::GestureConfig;
pub use gesture::{classify, GestureInterpreter, Mode};
pub use pointer::{Button, PointerAction, PointerSink};
pub use session::{Session, SessionHandle, SessionSummary};
pub use tracking::{FingersUp, HandFrame, Landmark};
