use crate::tracking::types::HandFrame;
use thiserror::Error;

/// Errors a hand detector can report for a single frame.
///
/// Detector failures are per-frame events; the session logs them and moves
/// on to the next frame.
#[derive(Error, Debug)]
pub enum DetectError {
    #[error("inference failed: {0}")]
    Inference(String),

    #[error("unsupported frame format: {0}")]
    UnsupportedFrame(String),
}

/// Hand-landmark detector seam.
///
/// Implementations wrap whatever model or bridge produces landmarks from a
/// raw image. `Ok(None)` means no hand was found in the frame, which is an
/// ordinary outcome, not an error.
pub trait HandDetector {
    /// Raw frame type consumed by this detector. Must match the frame type
    /// produced by the session's [`FrameSource`](crate::capture::FrameSource).
    type Frame;

    fn detect(&mut self, frame: &Self::Frame) -> Result<Option<HandFrame>, DetectError>;
}
