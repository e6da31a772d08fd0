//! Offline processing of recorded traces.

pub mod replay;

pub use replay::{replay_frames, replay_trace, RecordedFrame, RecordedTrace, TimedAction};
