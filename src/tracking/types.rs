use serde::{Deserialize, Serialize};

// Fingertip landmark ids in the 21-point hand topology.
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_TIP: usize = 12;
pub const RING_TIP: usize = 16;

/// A single tracked keypoint on the hand, in source-image pixel space.
///
/// The `id` is the landmark's anatomical identity and is stable across
/// frames; positions are not.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Landmark {
    pub id: usize,
    pub x: f64,
    pub y: f64,
}

impl Landmark {
    /// Euclidean distance to another landmark, in pixels.
    pub fn distance_to(&self, other: &Landmark) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Hand bounding box in source-image pixel space.
///
/// Carried through from the detector for consumers such as overlays;
/// the gesture logic itself never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Per-finger up/down classification produced by the detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FingersUp {
    pub thumb: bool,
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
}

/// One frame of hand-tracking output.
///
/// Produced fresh every frame by the detector and never mutated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandFrame {
    pub landmarks: Vec<Landmark>,
    pub fingers: FingersUp,
    pub bounds: Option<Bounds>,
}

impl HandFrame {
    /// Look up a landmark by its anatomical id.
    pub fn landmark(&self, id: usize) -> Option<&Landmark> {
        self.landmarks.iter().find(|lm| lm.id == id)
    }
}
