//! Offline replay of recorded hand-tracking traces.
//!
//! A trace is what the detector saw, one entry per frame with its capture
//! timestamp. Replaying runs the trace through a fresh interpreter using
//! the recorded timestamps, so cooldown behavior reproduces exactly what a
//! live session would have done. Used for tuning and for diagnosing
//! misbehaving traces without a camera attached.

use crate::config::GestureConfig;
use crate::gesture::{classify, GestureInterpreter};
use crate::pointer::PointerAction;
use crate::tracking::types::{Bounds, FingersUp, HandFrame, Landmark};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Hand-tracking output recorded for one frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordedHand {
    pub landmarks: Vec<Landmark>,
    pub fingers: FingersUp,
    #[serde(default)]
    pub bounds: Option<Bounds>,
}

/// One recorded frame. `hand` is absent when the detector found none.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordedFrame {
    /// Capture time in milliseconds from trace start.
    pub time_ms: f64,
    #[serde(default)]
    pub hand: Option<RecordedHand>,
}

/// A full recorded trace, including the screen it was captured against.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordedTrace {
    pub screen_width: f64,
    pub screen_height: f64,
    pub frames: Vec<RecordedFrame>,
}

/// A pointer action stamped with the frame time that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimedAction {
    pub time_ms: f64,
    #[serde(flatten)]
    pub action: PointerAction,
}

/// Replay a trace through a fresh interpreter.
pub fn replay_trace(trace: &RecordedTrace, config: &GestureConfig) -> Vec<TimedAction> {
    replay_frames(
        &trace.frames,
        config,
        (trace.screen_width, trace.screen_height),
    )
}

/// Replay recorded frames against an explicit screen size.
pub fn replay_frames(
    frames: &[RecordedFrame],
    config: &GestureConfig,
    screen_size: (f64, f64),
) -> Vec<TimedAction> {
    let mut interpreter = GestureInterpreter::new(config.clone(), screen_size);
    let mut actions = Vec::new();

    for recorded in frames {
        let hand = match recorded.hand.as_ref() {
            Some(hand) => hand,
            None => continue,
        };
        let frame = HandFrame {
            landmarks: hand.landmarks.clone(),
            fingers: hand.fingers,
            bounds: hand.bounds,
        };
        let mode = classify(&frame.fingers);
        let now = Duration::from_secs_f64(recorded.time_ms.max(0.0) / 1000.0);
        if let Some(action) = interpreter.step(mode, &frame, now) {
            actions.push(TimedAction {
                time_ms: recorded.time_ms,
                action,
            });
        }
    }

    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pointer::Button;
    use crate::tracking::types::{INDEX_TIP, MIDDLE_TIP};

    fn pinch_frame(time_ms: f64) -> RecordedFrame {
        RecordedFrame {
            time_ms,
            hand: Some(RecordedHand {
                landmarks: vec![
                    Landmark {
                        id: INDEX_TIP,
                        x: 200.0,
                        y: 200.0,
                    },
                    Landmark {
                        id: MIDDLE_TIP,
                        x: 210.0,
                        y: 200.0,
                    },
                ],
                fingers: FingersUp {
                    index: true,
                    middle: true,
                    ..Default::default()
                },
                bounds: None,
            }),
        }
    }

    fn move_frame(time_ms: f64, x: f64, y: f64) -> RecordedFrame {
        RecordedFrame {
            time_ms,
            hand: Some(RecordedHand {
                landmarks: vec![Landmark { id: INDEX_TIP, x, y }],
                fingers: FingersUp {
                    index: true,
                    ..Default::default()
                },
                bounds: None,
            }),
        }
    }

    fn trace(frames: Vec<RecordedFrame>) -> RecordedTrace {
        RecordedTrace {
            screen_width: 1920.0,
            screen_height: 1080.0,
            frames,
        }
    }

    #[test]
    fn test_held_pinch_replays_as_one_click_per_window() {
        // 12 pinch frames spanning 363 ms: the first fires, the rest of
        // the first window is swallowed, then the second window fires.
        let frames = (0..12).map(|i| pinch_frame(i as f64 * 33.0)).collect();
        let actions = replay_trace(&trace(frames), &GestureConfig::default());

        assert_eq!(actions.len(), 2);
        assert_eq!(actions[0].time_ms, 0.0);
        assert_eq!(
            actions[0].action,
            PointerAction::Click {
                button: Button::Left
            }
        );
        assert!(actions[1].time_ms > 300.0);
    }

    #[test]
    fn test_frames_without_hand_are_skipped() {
        let frames = vec![
            RecordedFrame {
                time_ms: 0.0,
                hand: None,
            },
            move_frame(33.0, 320.0, 240.0),
        ];
        let actions = replay_trace(&trace(frames), &GestureConfig::default());

        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].time_ms, 33.0);
        assert!(matches!(actions[0].action, PointerAction::MoveTo { .. }));
    }

    #[test]
    fn test_trace_roundtrips_through_json() {
        let original = trace(vec![pinch_frame(0.0), move_frame(33.0, 320.0, 240.0)]);
        let json = serde_json::to_string(&original).unwrap();
        let parsed: RecordedTrace = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.frames.len(), 2);
        assert_eq!(
            replay_trace(&parsed, &GestureConfig::default()).len(),
            replay_trace(&original, &GestureConfig::default()).len()
        );
    }

    #[test]
    fn test_timed_actions_serialize_flat() {
        let actions = replay_trace(&trace(vec![pinch_frame(12.0)]), &GestureConfig::default());
        let json = serde_json::to_value(&actions[0]).unwrap();

        assert_eq!(json["timeMs"], 12.0);
        assert_eq!(json["kind"], "click");
        assert_eq!(json["button"], "left");
    }
}
