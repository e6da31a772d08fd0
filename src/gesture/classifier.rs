//! Finger-pose to control-mode classification.

use crate::tracking::types::FingersUp;

/// Exclusive control mode derived from a single frame's finger state.
///
/// Selection has no hysteresis: each frame's finger vector fully determines
/// the mode, independent of history. Only click *firing* is damped (by the
/// interpreter's cooldown), so a noisy detector can flicker the mode without
/// producing spurious clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// No gesture; the cursor holds its last position.
    Idle,
    /// Index finger alone raised: the fingertip drives the cursor.
    Move,
    /// Index and middle raised: an index/middle pinch fires a left click.
    LeftClick,
    /// Index, middle and ring raised: a middle/ring pinch fires a right click.
    RightClick,
}

/// Map a finger vector to its control mode.
///
/// Every gesture is gated on the index finger being raised; thumb and pinky
/// never participate. With the index down the hand is idle no matter what
/// the other fingers do.
pub fn classify(fingers: &FingersUp) -> Mode {
    if !fingers.index {
        return Mode::Idle;
    }
    match (fingers.middle, fingers.ring) {
        (false, _) => Mode::Move,
        (true, false) => Mode::LeftClick,
        (true, true) => Mode::RightClick,
    }
}
