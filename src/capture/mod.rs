//! Frame acquisition seam.
//!
//! Video capture and decoding live outside this crate; the session pulls
//! frames through [`FrameSource`]. The shipped [`ChannelFrameSource`]
//! adapts a producer thread's channel into a source whose blocking waits
//! are bounded, so the loop can observe its stop signal even when the
//! producer stalls.

use crossbeam_channel::{Receiver, RecvTimeoutError};
use std::time::Duration;
use thiserror::Error;

/// Errors a frame source can report.
#[derive(Error, Debug)]
pub enum CaptureError {
    /// No frame arrived within the wait budget. Non-fatal: the session
    /// rechecks its stop signal and asks again.
    #[error("no frame within {0:?}")]
    Timeout(Duration),

    /// The capture device failed. Fatal to the session.
    #[error("capture device error: {0}")]
    Device(String),
}

/// Ordered frame delivery from a capture device.
pub trait FrameSource {
    type Frame;

    /// Pull the next frame. `Ok(None)` is end-of-stream and terminates
    /// the session cleanly.
    fn next_frame(&mut self) -> Result<Option<Self::Frame>, CaptureError>;
}

/// Frame source backed by a channel from a producer thread.
///
/// A disconnected channel is end-of-stream: when the producer drops its
/// sender, the session winds down instead of erroring.
pub struct ChannelFrameSource<F> {
    receiver: Receiver<F>,
    timeout: Duration,
}

impl<F> ChannelFrameSource<F> {
    pub fn new(receiver: Receiver<F>, timeout: Duration) -> Self {
        Self { receiver, timeout }
    }
}

impl<F> FrameSource for ChannelFrameSource<F> {
    type Frame = F;

    fn next_frame(&mut self) -> Result<Option<F>, CaptureError> {
        match self.receiver.recv_timeout(self.timeout) {
            Ok(frame) => Ok(Some(frame)),
            Err(RecvTimeoutError::Timeout) => Err(CaptureError::Timeout(self.timeout)),
            Err(RecvTimeoutError::Disconnected) => Ok(None),
        }
    }
}
