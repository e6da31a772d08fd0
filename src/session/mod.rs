//! The per-frame control loop.
//!
//! A session wires the four external seams together and runs them
//! synchronously, one frame at a time: acquire, detect, classify,
//! interpret, act. Nothing overlaps; the interpreter's state is touched
//! only from this loop, so gesture-to-action latency stays bounded and
//! deterministic per frame.

use crate::capture::{CaptureError, FrameSource};
use crate::config::GestureConfig;
use crate::gesture::{classify, GestureInterpreter};
use crate::pointer::{PointerAction, PointerSink};
use crate::tracking::HandDetector;
use parking_lot::Mutex;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use uuid::Uuid;

/// Monotonic session time.
///
/// Only used for cooldown comparisons and the session stats; must not go
/// backward within a session.
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Wall clock anchored at construction time.
pub struct MonotonicClock {
    epoch: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.epoch.elapsed()
    }
}

/// Errors that end a session.
///
/// Everything else (detector misses, sink failures, frame timeouts) is
/// recovered inside the loop.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("frame source failed: {0}")]
    Source(CaptureError),
}

/// Live counters, shared with [`SessionHandle`] for mid-session snapshots.
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStats {
    pub frames: u64,
    pub frames_with_hand: u64,
    pub moves_emitted: u64,
    pub clicks_emitted: u64,
    pub detector_errors: u64,
    pub sink_errors: u64,
}

/// Final report of a finished session.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub session_id: Uuid,
    #[serde(flatten)]
    pub stats: SessionStats,
    pub duration_ms: f64,
    pub avg_fps: f64,
}

/// Cooperative control over a running session from another thread.
///
/// The loop checks the stop flag between frames; stopping never interrupts
/// a frame mid-flight, so no action is ever half-committed.
#[derive(Clone)]
pub struct SessionHandle {
    stop: Arc<AtomicBool>,
    stats: Arc<Mutex<SessionStats>>,
}

impl SessionHandle {
    /// Ask the loop to wind down after the current frame.
    pub fn stop(&self) {
        self.stop.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.stop.load(Ordering::SeqCst)
    }

    /// Snapshot of the live counters.
    pub fn stats(&self) -> SessionStats {
        *self.stats.lock()
    }
}

/// One gesture-control session over a frame stream.
pub struct Session<S, D, P, C> {
    source: S,
    detector: D,
    sink: P,
    clock: C,
    interpreter: GestureInterpreter,
    id: Uuid,
    stop: Arc<AtomicBool>,
    stats: Arc<Mutex<SessionStats>>,
}

impl<S, D, P, C> Session<S, D, P, C>
where
    S: FrameSource,
    D: HandDetector<Frame = S::Frame>,
    P: PointerSink,
    C: Clock,
{
    pub fn new(config: GestureConfig, source: S, detector: D, sink: P, clock: C) -> Self {
        let screen = sink.screen_size();
        Self {
            source,
            detector,
            sink,
            clock,
            interpreter: GestureInterpreter::new(config, screen),
            id: Uuid::new_v4(),
            stop: Arc::new(AtomicBool::new(false)),
            stats: Arc::new(Mutex::new(SessionStats::default())),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn handle(&self) -> SessionHandle {
        SessionHandle {
            stop: self.stop.clone(),
            stats: self.stats.clone(),
        }
    }

    /// Run until end-of-stream, a fatal source error, or a stop request.
    pub fn run(mut self) -> Result<SessionSummary, SessionError> {
        tracing::info!(session = %self.id, "gesture session started");
        let started = self.clock.now();
        let mut stats = SessionStats::default();

        loop {
            if self.stop.load(Ordering::SeqCst) {
                tracing::info!(session = %self.id, "stop requested");
                break;
            }

            let frame = match self.source.next_frame() {
                Ok(Some(frame)) => frame,
                Ok(None) => {
                    tracing::info!(session = %self.id, "frame source ended");
                    break;
                }
                Err(CaptureError::Timeout(waited)) => {
                    tracing::debug!("no frame within {:?}, rechecking stop flag", waited);
                    continue;
                }
                Err(err) => {
                    tracing::error!(session = %self.id, "frame source failed: {}", err);
                    return Err(SessionError::Source(err));
                }
            };

            stats.frames += 1;

            let hand = match self.detector.detect(&frame) {
                Ok(Some(hand)) => hand,
                Ok(None) => {
                    *self.stats.lock() = stats;
                    continue;
                }
                Err(err) => {
                    stats.detector_errors += 1;
                    tracing::debug!("detector failed on frame: {}", err);
                    *self.stats.lock() = stats;
                    continue;
                }
            };
            stats.frames_with_hand += 1;

            let mode = classify(&hand.fingers);
            let now = self.clock.now();
            if let Some(action) = self.interpreter.step(mode, &hand, now) {
                match self.dispatch(action) {
                    Ok(()) => match action {
                        PointerAction::MoveTo { .. } => stats.moves_emitted += 1,
                        PointerAction::Click { .. } => stats.clicks_emitted += 1,
                    },
                    Err(err) => {
                        // The action is dropped for this frame; smoothing
                        // and cooldown state already committed stay valid.
                        stats.sink_errors += 1;
                        tracing::warn!("pointer sink rejected {:?}: {}", action, err);
                    }
                }
            }

            *self.stats.lock() = stats;
        }

        *self.stats.lock() = stats;
        let duration = self.clock.now().saturating_sub(started);
        let summary = SessionSummary {
            session_id: self.id,
            stats,
            duration_ms: duration.as_secs_f64() * 1000.0,
            avg_fps: if duration.as_secs_f64() > 0.0 {
                stats.frames as f64 / duration.as_secs_f64()
            } else {
                0.0
            },
        };
        tracing::info!(
            session = %self.id,
            "gesture session finished (frames={}, moves={}, clicks={}, avg_fps={:.1})",
            summary.stats.frames,
            summary.stats.moves_emitted,
            summary.stats.clicks_emitted,
            summary.avg_fps
        );
        Ok(summary)
    }

    fn dispatch(&mut self, action: PointerAction) -> Result<(), crate::pointer::PointerError> {
        match action {
            PointerAction::MoveTo { x, y } => self.sink.move_to(x, y),
            PointerAction::Click { button } => self.sink.click(button),
        }
    }
}
