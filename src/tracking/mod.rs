//! Hand-tracking data model and the detector seam.
//!
//! The detector itself (camera image in, landmarks out) lives outside this
//! crate; this module defines the frame types it produces and the trait the
//! session drives it through.

pub mod detector;
pub mod types;

pub use detector::{DetectError, HandDetector};
pub use types::{Bounds, FingersUp, HandFrame, Landmark};
