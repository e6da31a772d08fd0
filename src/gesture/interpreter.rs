//! Gesture-to-pointer interpretation.
//!
//! Takes the frame's control mode and fingertip positions and produces at
//! most one pointer action per frame: a smoothed cursor move, or a
//! cooldown-debounced click. The interpreter owns the only state that
//! persists across frames: the smoothed cursor position and the per-button
//! cooldown stamps.

use crate::config::GestureConfig;
use crate::gesture::classifier::Mode;
use crate::gesture::smoothing::CursorFilter;
use crate::pointer::{Button, PointerAction};
use crate::tracking::types::{HandFrame, INDEX_TIP, MIDDLE_TIP, RING_TIP};
use std::time::Duration;

/// Last-fire timestamp per click kind.
///
/// A slot that has never fired always permits firing; a slot is re-stamped
/// only when its action actually fires.
#[derive(Debug, Clone, Default)]
struct ClickCooldowns {
    left: Option<Duration>,
    right: Option<Duration>,
}

impl ClickCooldowns {
    fn ready(&self, button: Button, now: Duration, cooldown: Duration) -> bool {
        let last = match button {
            Button::Left => self.left,
            Button::Right => self.right,
        };
        match last {
            None => true,
            Some(fired) => now.saturating_sub(fired) > cooldown,
        }
    }

    fn mark(&mut self, button: Button, now: Duration) {
        match button {
            Button::Left => self.left = Some(now),
            Button::Right => self.right = Some(now),
        }
    }
}

/// Per-session gesture interpreter.
///
/// Construct one per session; all smoothing and debounce memory lives in
/// the instance, so independent sessions (and tests) never share state.
pub struct GestureInterpreter {
    config: GestureConfig,
    screen_width: f64,
    screen_height: f64,
    cursor: CursorFilter,
    cooldowns: ClickCooldowns,
}

impl GestureInterpreter {
    pub fn new(config: GestureConfig, screen_size: (f64, f64)) -> Self {
        Self {
            config,
            screen_width: screen_size.0,
            screen_height: screen_size.1,
            cursor: CursorFilter::new(0.0, 0.0),
            cooldowns: ClickCooldowns::default(),
        }
    }

    /// Interpret one frame. `now` is monotonic time within the session.
    ///
    /// Move mode advances the cursor filter and emits the mirrored target;
    /// the click modes measure their pinch and fire at most once per
    /// cooldown window. Every other mode leaves all state untouched, so the
    /// cursor holds its last smoothed position instead of resetting.
    pub fn step(&mut self, mode: Mode, frame: &HandFrame, now: Duration) -> Option<PointerAction> {
        match mode {
            Mode::Idle => None,
            Mode::Move => self.track(frame),
            Mode::LeftClick => self.pinch(frame, INDEX_TIP, MIDDLE_TIP, Button::Left, now),
            Mode::RightClick => self.pinch(frame, MIDDLE_TIP, RING_TIP, Button::Right, now),
        }
    }

    /// Last smoothed cursor position, in un-mirrored mapped screen space.
    pub fn cursor_position(&self) -> (f64, f64) {
        self.cursor.position()
    }

    fn track(&mut self, frame: &HandFrame) -> Option<PointerAction> {
        let tip = match frame.landmark(INDEX_TIP) {
            Some(tip) => tip,
            None => {
                tracing::debug!("move frame carries no index fingertip, skipping");
                return None;
            }
        };

        // Active region maps to the full screen; values outside it
        // extrapolate rather than clamp.
        let margin = self.config.frame_margin;
        let target_x = remap(
            tip.x,
            margin,
            self.config.capture_width - margin,
            self.screen_width,
        );
        let target_y = remap(
            tip.y,
            margin,
            self.config.capture_height - margin,
            self.screen_height,
        );

        let alpha = 1.0 / self.config.smoothing;
        let (smooth_x, smooth_y) = self.cursor.step(target_x, target_y, alpha);

        // The camera sees a mirror image; flip X on the way out only, so
        // the filter keeps accumulating in mapped (un-mirrored) space.
        Some(PointerAction::MoveTo {
            x: self.screen_width - smooth_x,
            y: smooth_y,
        })
    }

    fn pinch(
        &mut self,
        frame: &HandFrame,
        tip_a: usize,
        tip_b: usize,
        button: Button,
        now: Duration,
    ) -> Option<PointerAction> {
        let (a, b) = match (frame.landmark(tip_a), frame.landmark(tip_b)) {
            (Some(a), Some(b)) => (a, b),
            _ => {
                tracing::debug!("{} click frame missing fingertip {} or {}", button, tip_a, tip_b);
                return None;
            }
        };

        if a.distance_to(b) >= self.config.pinch_threshold {
            return None;
        }
        if !self
            .cooldowns
            .ready(button, now, self.config.click_cooldown())
        {
            // Held pinch within the cooldown window: swallowed on purpose,
            // one click per window rather than one per frame.
            return None;
        }

        self.cooldowns.mark(button, now);
        Some(PointerAction::Click { button })
    }
}

/// Linear remap of `value` from `[in_min, in_max]` to `[0, out_max]`,
/// extrapolating outside the input range.
fn remap(value: f64, in_min: f64, in_max: f64, out_max: f64) -> f64 {
    (value - in_min) * out_max / (in_max - in_min)
}
